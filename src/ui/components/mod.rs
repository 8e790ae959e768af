//! UI components

pub mod comments_panel;
pub mod dialogs;
pub mod friends_list;
pub mod help_panel;
pub mod login_screen;
pub mod posts_list;
pub mod profile_panel;
pub mod register_screen;
pub mod requests_list;
pub mod search_panel;
pub mod sidebar;
pub mod status_bar;

pub use comments_panel::CommentsPanel;
pub use friends_list::FriendsList;
pub use help_panel::HelpPanel;
pub use login_screen::LoginScreen;
pub use posts_list::PostsList;
pub use profile_panel::ProfilePanel;
pub use register_screen::RegisterScreen;
pub use requests_list::RequestsList;
pub use search_panel::SearchPanel;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
