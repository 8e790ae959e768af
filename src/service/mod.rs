//! Session service: the data layer between the UI and the API client
//!
//! The [`SessionService`] owns the authenticated [`ApiClient`] and the
//! credential store, converts API payloads into display types, and logs
//! every operation. UI code never touches HTTP or raw payload models; it
//! calls the service and renders what comes back.

pub mod display;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::api::models::{PostUpdate, ProfileUpdate, RegisterRequest, Visibility};
use crate::api::{ApiClient, ApiError, NewPost};
use crate::config::Config;
use crate::credentials::{CachedUser, CredentialStore, FileCredentialStore, MemoryCredentialStore};
use crate::logger::Logger;
use display::{flatten_thread, CommentDisplay, PostDisplay, RequestDisplay, UserDisplay};

/// One page of the feed plus pagination state.
#[derive(Debug, Clone)]
pub struct FeedPage {
    pub posts: Vec<PostDisplay>,
    pub page: u32,
    pub has_more: bool,
}

/// Service that every screen talks to.
#[derive(Clone)]
pub struct SessionService {
    api: Arc<ApiClient>,
    credentials: Arc<dyn CredentialStore>,
    logger: Logger,
}

impl SessionService {
    /// Build the service from configuration.
    ///
    /// `[session] remember` picks between the file-backed store and an
    /// in-memory one that forgets everything on exit.
    pub fn new(config: &Config) -> Result<Self> {
        let credentials: Arc<dyn CredentialStore> = if config.session.remember {
            Arc::new(FileCredentialStore::new()?)
        } else {
            Arc::new(MemoryCredentialStore::new())
        };
        let api = Arc::new(ApiClient::new(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
            Arc::clone(&credentials),
        ));
        let logger = Logger::from_config(config.logging.enabled)?;
        Ok(Self {
            api,
            credentials,
            logger,
        })
    }

    /// Build the service from explicit parts. Used by tests to inject an
    /// in-memory store against a stub server.
    pub fn from_parts(api: Arc<ApiClient>, credentials: Arc<dyn CredentialStore>, logger: Logger) -> Self {
        Self {
            api,
            credentials,
            logger,
        }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// The profile summary cached at login, if a session exists.
    pub fn current_user(&self) -> Option<CachedUser> {
        self.credentials.cached_user()
    }

    /// Whether a persisted session can skip the login screen.
    pub fn has_session(&self) -> bool {
        self.credentials.access_token().is_some() && self.credentials.cached_user().is_some()
    }

    // ── Session lifecycle ──

    /// Log in and persist the token pair plus the cached profile summary.
    pub async fn login(&self, email: &str, password: &str) -> Result<CachedUser> {
        let response = self.api.login(email, password).await?;
        self.credentials
            .store_session(&response.access, &response.refresh, &response.user)?;
        self.logger.log(format!("logged in as {}", response.user.email));
        Ok(response.user)
    }

    /// Create an account. The caller still logs in afterwards.
    pub async fn register(&self, email: &str, first_name: &str, last_name: &str, password: &str, password2: &str) -> Result<String> {
        let request = RegisterRequest {
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            password: password.to_string(),
            password2: password2.to_string(),
        };
        let response = self.api.register(&request).await?;
        self.logger.log(format!("registered account {}", request.email));
        Ok(response.message)
    }

    /// Drop the session: erase tokens and the cached profile.
    pub fn logout(&self) -> Result<()> {
        self.credentials.clear()?;
        self.logger.log("logged out".to_string());
        Ok(())
    }

    // ── Feed ──

    /// Load one feed page; `mine_only` filters to the viewer's own posts.
    pub async fn load_feed(&self, page: u32, mine_only: bool) -> Result<FeedPage> {
        let viewer = self.current_user().map(|user| user.id);
        let author = if mine_only { viewer } else { None };
        let result = self.api.posts(page, author).await;
        match result {
            Ok(page_data) => {
                let posts = page_data
                    .results
                    .iter()
                    .map(|post| PostDisplay::from_post(post, viewer))
                    .collect::<Vec<_>>();
                self.logger.log(format!("loaded feed page {} ({} posts)", page, posts.len()));
                Ok(FeedPage {
                    has_more: page_data.has_more(),
                    posts,
                    page,
                })
            }
            Err(err) => {
                self.logger.log(format!("feed load failed: {err}"));
                Err(err.into())
            }
        }
    }

    pub async fn create_post(&self, content: &str, visibility: Visibility, image: Option<std::path::PathBuf>) -> Result<PostDisplay> {
        let new_post = NewPost {
            content: content.to_string(),
            visibility,
            image,
        };
        let post = self.api.create_post(&new_post).await?;
        self.logger.log(format!("published post {}", post.id));
        Ok(PostDisplay::from_post(&post, self.current_user().map(|u| u.id)))
    }

    pub async fn update_post(&self, id: i64, content: Option<String>, visibility: Option<Visibility>) -> Result<PostDisplay> {
        let update = PostUpdate { content, visibility };
        let post = self.api.update_post(id, &update).await?;
        self.logger.log(format!("updated post {id}"));
        Ok(PostDisplay::from_post(&post, self.current_user().map(|u| u.id)))
    }

    pub async fn delete_post(&self, id: i64) -> Result<()> {
        self.api.delete_post(id).await?;
        self.logger.log(format!("deleted post {id}"));
        Ok(())
    }

    /// Toggle a like; returns `(liked, likes_count)` for in-place updates.
    pub async fn toggle_post_like(&self, id: i64) -> Result<(bool, i64)> {
        let toggle = self.api.toggle_post_like(id).await?;
        Ok((toggle.liked, toggle.likes_count))
    }

    // ── Comments ──

    /// Load a post's comment thread as flattened, depth-annotated rows.
    pub async fn comments(&self, post_id: i64) -> Result<Vec<CommentDisplay>> {
        let viewer = self.current_user().map(|user| user.id);
        let roots = self.api.comments(post_id).await?;
        Ok(flatten_thread(&roots, viewer))
    }

    pub async fn add_comment(&self, post_id: i64, content: &str, parent: Option<i64>) -> Result<CommentDisplay> {
        let viewer = self.current_user().map(|user| user.id);
        let comment = self.api.create_comment(post_id, content, parent).await?;
        self.logger.log(format!("commented on post {post_id}"));
        let rows = flatten_thread(std::slice::from_ref(&comment), viewer);
        Ok(rows.into_iter().next().expect("one comment in, one row out"))
    }

    pub async fn update_comment(&self, id: i64, content: &str) -> Result<()> {
        self.api.update_comment(id, content).await?;
        self.logger.log(format!("updated comment {id}"));
        Ok(())
    }

    pub async fn delete_comment(&self, id: i64) -> Result<()> {
        self.api.delete_comment(id).await?;
        self.logger.log(format!("deleted comment {id}"));
        Ok(())
    }

    pub async fn toggle_comment_like(&self, id: i64) -> Result<(bool, i64)> {
        let toggle = self.api.toggle_comment_like(id).await?;
        Ok((toggle.liked, toggle.likes_count))
    }

    // ── Friends ──

    pub async fn friends(&self) -> Result<Vec<UserDisplay>> {
        let users = self.api.friends().await?;
        Ok(users.iter().map(UserDisplay::from).collect())
    }

    pub async fn friend_requests(&self) -> Result<Vec<RequestDisplay>> {
        let requests = self.api.friend_requests().await?;
        Ok(requests.iter().map(RequestDisplay::from).collect())
    }

    pub async fn send_friend_request(&self, user_id: i64) -> Result<()> {
        self.api.send_friend_request(user_id).await?;
        self.logger.log(format!("sent friend request to user {user_id}"));
        Ok(())
    }

    pub async fn respond_friend_request(&self, friendship_id: i64, accept: bool) -> Result<()> {
        self.api.respond_friend_request(friendship_id, accept).await?;
        self.logger.log(format!(
            "{} friend request {friendship_id}",
            if accept { "accepted" } else { "rejected" }
        ));
        Ok(())
    }

    pub async fn unfriend(&self, user_id: i64) -> Result<()> {
        self.api.unfriend(user_id).await?;
        self.logger.log(format!("unfriended user {user_id}"));
        Ok(())
    }

    // ── Profile & search ──

    pub async fn search_users(&self, query: &str) -> Result<Vec<UserDisplay>> {
        let users = self.api.search_users(query).await?;
        self.logger.log(format!("search '{}' returned {} users", query, users.len()));
        Ok(users.iter().map(UserDisplay::from).collect())
    }

    pub async fn profile(&self) -> Result<UserDisplay> {
        let user = self.api.profile().await?;
        Ok(UserDisplay::from(&user))
    }

    /// Fetch another user's profile by id.
    pub async fn user_profile(&self, user_id: i64) -> Result<UserDisplay> {
        let user = self.api.user(user_id).await?;
        Ok(UserDisplay::from(&user))
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<UserDisplay> {
        self.api.update_profile(&update).await?;
        self.logger.log("profile updated".to_string());
        self.profile().await
    }
}

/// Whether an error means the session is gone and the UI must return to the
/// login screen.
pub fn is_session_expired(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ApiError>()
        .map(ApiError::is_session_expired)
        .unwrap_or(false)
}
