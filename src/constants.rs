//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_POST_CREATED: &str = "✅ Post published";
pub const SUCCESS_POST_UPDATED: &str = "✅ Post updated";
pub const SUCCESS_POST_DELETED: &str = "✅ Post deleted";
pub const SUCCESS_COMMENT_CREATED: &str = "✅ Comment added";
pub const SUCCESS_COMMENT_UPDATED: &str = "✅ Comment updated";
pub const SUCCESS_COMMENT_DELETED: &str = "✅ Comment deleted";
pub const SUCCESS_REPLY_CREATED: &str = "✅ Reply added";
pub const SUCCESS_PROFILE_UPDATED: &str = "✅ Profile updated";
pub const SUCCESS_FRIEND_REQUEST_SENT: &str = "✅ Friend request sent";
pub const SUCCESS_FRIEND_REQUEST_ACCEPTED: &str = "✅ Friend request accepted";
pub const SUCCESS_FRIEND_REQUEST_REJECTED: &str = "✅ Friend request rejected";
pub const SUCCESS_UNFRIENDED: &str = "✅ Friend removed";

// Error Messages
pub const ERROR_POST_CREATE_FAILED: &str = "❌ Failed to publish post";
pub const ERROR_POST_UPDATE_FAILED: &str = "❌ Failed to update post";
pub const ERROR_POST_DELETE_FAILED: &str = "❌ Failed to delete post";
pub const ERROR_COMMENT_CREATE_FAILED: &str = "❌ Failed to add comment";
pub const ERROR_COMMENT_UPDATE_FAILED: &str = "❌ Failed to update comment";
pub const ERROR_COMMENT_DELETE_FAILED: &str = "❌ Failed to delete comment";
pub const ERROR_LIKE_FAILED: &str = "❌ Failed to toggle like";
pub const ERROR_PROFILE_UPDATE_FAILED: &str = "❌ Failed to update profile";
pub const ERROR_FRIEND_REQUEST_FAILED: &str = "❌ Failed to send friend request";
pub const ERROR_FRIEND_RESPOND_FAILED: &str = "❌ Failed to respond to friend request";
pub const ERROR_UNFRIEND_FAILED: &str = "❌ Failed to remove friend";
pub const ERROR_FEED_LOAD_FAILED: &str = "❌ Failed to load feed";
pub const ERROR_SESSION_EXPIRED: &str = "🔒 Session expired, please log in again";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// Persisted session file name, relative to the platform data directory
pub const SESSION_FILE_NAME: &str = "session.json";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 24;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;

/// Maximum post/comment content length accepted by the server
pub const MAX_CONTENT_LENGTH: usize = 1000;
/// Maximum attached image size accepted by the server (2 MB)
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;
