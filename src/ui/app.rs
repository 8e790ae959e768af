//! Application state and navigation logic

use ratatui::widgets::ListState;
use tokio::task::JoinHandle;

use crate::api::models::Visibility;
use crate::config::Config;
use crate::credentials::CachedUser;
use crate::icons::IconService;
use crate::service::display::{CommentDisplay, PostDisplay, RequestDisplay, UserDisplay};
use crate::service::FeedPage;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Main,
}

/// Views reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainView {
    Feed,
    MyPosts,
    Friends,
    Requests,
    Search,
    Profile,
}

impl MainView {
    pub const ALL: [MainView; 6] = [
        MainView::Feed,
        MainView::MyPosts,
        MainView::Friends,
        MainView::Requests,
        MainView::Search,
        MainView::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainView::Feed => "Feed",
            MainView::MyPosts => "My Posts",
            MainView::Friends => "Friends",
            MainView::Requests => "Requests",
            MainView::Search => "Find Friends",
            MainView::Profile => "Profile",
        }
    }

    pub fn from_config(value: &str) -> Self {
        match value {
            "my_posts" => MainView::MyPosts,
            "friends" => MainView::Friends,
            "requests" => MainView::Requests,
            "search" => MainView::Search,
            "profile" => MainView::Profile,
            _ => MainView::Feed,
        }
    }
}

/// Login form state
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// 0 = email, 1 = password
    pub focus: usize,
}

/// Registration form state
#[derive(Debug, Default)]
pub struct RegisterForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password2: String,
    /// 0..=4, field order as rendered
    pub focus: usize,
}

/// Profile edit form state
#[derive(Debug, Default)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub location: String,
    pub website: String,
    /// 0..=4, field order as rendered
    pub focus: usize,
}

/// What the comment composer is writing
#[derive(Debug, Clone, Copy)]
pub struct CommentTarget {
    pub post_id: i64,
    /// Reply target; `None` writes a root comment
    pub parent: Option<i64>,
}

/// What the delete confirmation dialog is about to remove
#[derive(Debug, Clone)]
pub enum DeleteTarget {
    Post(i64),
    Comment(i64),
    Friend { user_id: i64, name: String },
}

/// Application state
pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub view: MainView,

    // Auth forms
    pub login_form: LoginForm,
    pub register_form: RegisterForm,
    pub auth_in_flight: bool,

    // Session
    pub current_user: Option<CachedUser>,

    // Feed (shared by Feed and MyPosts views)
    pub posts: Vec<PostDisplay>,
    pub post_list_state: ListState,
    pub feed_page: u32,
    pub has_more_posts: bool,
    pub loading: bool,
    pub refreshing: bool,
    // Background feed load (if one is in progress)
    pub feed_task: Option<JoinHandle<anyhow::Result<FeedPage>>>,

    // Comment thread panel
    pub comments_post: Option<i64>,
    pub comments: Vec<CommentDisplay>,
    pub comment_list_state: ListState,

    // Friends & requests
    pub friends: Vec<UserDisplay>,
    pub friend_list_state: ListState,
    pub requests: Vec<RequestDisplay>,
    pub request_list_state: ListState,

    // User search
    pub search_query: String,
    pub search_input_active: bool,
    pub search_results: Vec<UserDisplay>,
    pub search_list_state: ListState,

    // Own profile
    pub profile: Option<UserDisplay>,

    // Post composer / editor dialog
    pub composing_post: bool,
    pub new_post_content: String,
    pub new_post_visibility: Visibility,
    pub new_post_image: String,
    /// 0 = content, 1 = image path
    pub post_field_focus: usize,
    pub editing_post: Option<i64>,

    // Comment composer / editor dialog
    pub composing_comment: Option<CommentTarget>,
    pub new_comment_content: String,
    pub editing_comment: Option<i64>,

    // Profile editor dialog
    pub editing_profile: bool,
    pub profile_form: ProfileForm,

    // Messages & overlays
    pub delete_confirmation: Option<DeleteTarget>,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
    pub show_help: bool,
    pub help_scroll_offset: usize,
    pub show_logs: bool,
    /// Snapshot of the in-memory log ring taken when the dialog opens
    pub logs_snapshot: Vec<String>,

    // Display settings
    pub icons: IconService,
    pub show_visibility: bool,
    pub sidebar_width: u16,
}

impl App {
    /// Create application state from configuration
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mut post_list_state = ListState::default();
        post_list_state.select(Some(0));

        Self {
            should_quit: false,
            screen: Screen::Login,
            view: MainView::from_config(&config.ui.default_view),
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            auth_in_flight: false,
            current_user: None,
            posts: Vec::new(),
            post_list_state,
            feed_page: 1,
            has_more_posts: false,
            loading: false,
            refreshing: false,
            feed_task: None,
            comments_post: None,
            comments: Vec::new(),
            comment_list_state: ListState::default(),
            friends: Vec::new(),
            friend_list_state: ListState::default(),
            requests: Vec::new(),
            request_list_state: ListState::default(),
            search_query: String::new(),
            search_input_active: false,
            search_results: Vec::new(),
            search_list_state: ListState::default(),
            profile: None,
            composing_post: false,
            new_post_content: String::new(),
            new_post_visibility: Visibility::Public,
            new_post_image: String::new(),
            post_field_focus: 0,
            editing_post: None,
            composing_comment: None,
            new_comment_content: String::new(),
            editing_comment: None,
            editing_profile: false,
            profile_form: ProfileForm::default(),
            delete_confirmation: None,
            error_message: None,
            info_message: None,
            show_help: false,
            help_scroll_offset: 0,
            show_logs: false,
            logs_snapshot: Vec::new(),
            icons: IconService::new(config.display.icon_theme),
            show_visibility: config.display.show_visibility,
            sidebar_width: config.ui.sidebar_width,
        }
    }

    // ── Selection helpers ──

    #[must_use]
    pub fn selected_post(&self) -> Option<&PostDisplay> {
        self.posts.get(self.post_list_state.selected()?)
    }

    #[must_use]
    pub fn selected_comment(&self) -> Option<&CommentDisplay> {
        self.comments.get(self.comment_list_state.selected()?)
    }

    #[must_use]
    pub fn selected_friend(&self) -> Option<&UserDisplay> {
        self.friends.get(self.friend_list_state.selected()?)
    }

    #[must_use]
    pub fn selected_request(&self) -> Option<&RequestDisplay> {
        self.requests.get(self.request_list_state.selected()?)
    }

    #[must_use]
    pub fn selected_search_result(&self) -> Option<&UserDisplay> {
        self.search_results.get(self.search_list_state.selected()?)
    }

    pub fn next_in(state: &mut ListState, len: usize) {
        if len == 0 {
            state.select(None);
            return;
        }
        let next = match state.selected() {
            Some(index) if index + 1 < len => index + 1,
            Some(index) => index,
            None => 0,
        };
        state.select(Some(next));
    }

    pub fn previous_in(state: &mut ListState, len: usize) {
        if len == 0 {
            state.select(None);
            return;
        }
        let previous = state.selected().map_or(0, |index| index.saturating_sub(1));
        state.select(Some(previous));
    }

    // ── View switching ──

    pub fn switch_view(&mut self, view: MainView) {
        if self.view != view {
            self.view = view;
            self.comments_post = None;
            self.comments.clear();
        }
    }

    pub fn next_view(&mut self) {
        let index = MainView::ALL.iter().position(|v| *v == self.view).unwrap_or(0);
        self.switch_view(MainView::ALL[(index + 1) % MainView::ALL.len()]);
    }

    pub fn previous_view(&mut self) {
        let index = MainView::ALL.iter().position(|v| *v == self.view).unwrap_or(0);
        self.switch_view(MainView::ALL[(index + MainView::ALL.len() - 1) % MainView::ALL.len()]);
    }

    // ── Feed state ──

    /// Merge a loaded feed page: page 1 replaces, later pages append.
    pub fn apply_feed_page(&mut self, page: FeedPage) {
        self.has_more_posts = page.has_more;
        self.feed_page = page.page;
        if page.page <= 1 {
            self.posts = page.posts;
            let select = if self.posts.is_empty() { None } else { Some(0) };
            self.post_list_state.select(select);
        } else {
            self.posts.extend(page.posts);
        }
    }

    /// Patch the selected post's like state in place.
    pub fn update_selected_post_like(&mut self, liked: bool, likes_count: i64) {
        if let Some(index) = self.post_list_state.selected() {
            if let Some(post) = self.posts.get_mut(index) {
                post.is_liked = liked;
                post.likes_count = likes_count;
            }
        }
    }

    /// Patch the selected comment's like state in place.
    pub fn update_selected_comment_like(&mut self, liked: bool, likes_count: i64) {
        if let Some(index) = self.comment_list_state.selected() {
            if let Some(comment) = self.comments.get_mut(index) {
                comment.is_liked = liked;
                comment.likes_count = likes_count;
            }
        }
    }

    // ── Session transitions ──

    /// Enter the main screen after a successful login or session restore.
    pub fn enter_main(&mut self, user: CachedUser) {
        self.current_user = Some(user);
        self.screen = Screen::Main;
        self.login_form = LoginForm::default();
        self.register_form = RegisterForm::default();
    }

    /// Drop back to the login screen, wiping per-session view state.
    pub fn force_logout(&mut self, message: impl Into<String>) {
        self.screen = Screen::Login;
        self.current_user = None;
        self.posts.clear();
        self.comments.clear();
        self.comments_post = None;
        self.friends.clear();
        self.requests.clear();
        self.search_results.clear();
        self.search_query.clear();
        self.profile = None;
        self.feed_task = None;
        self.composing_post = false;
        self.composing_comment = None;
        self.editing_post = None;
        self.editing_comment = None;
        self.editing_profile = false;
        self.delete_confirmation = None;
        self.error_message = Some(message.into());
    }

    /// Open the profile editor pre-filled from the loaded profile.
    pub fn open_profile_editor(&mut self) {
        if let Some(profile) = &self.profile {
            let (first_name, last_name) = split_name(&profile.name);
            self.profile_form = ProfileForm {
                first_name,
                last_name,
                bio: profile.bio.clone().unwrap_or_default(),
                location: profile.location.clone().unwrap_or_default(),
                website: profile.website.clone().unwrap_or_default(),
                focus: 0,
            };
            self.editing_profile = true;
        }
    }
}

fn split_name(full_name: &str) -> (String, String) {
    match full_name.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (full_name.to_string(), String::new()),
    }
}
