//! Dialog components

pub mod comment_composer_dialog;
pub mod delete_confirmation_dialog;
pub mod error_dialog;
pub mod info_dialog;
pub mod logs_dialog;
pub mod post_composer_dialog;
pub mod profile_edit_dialog;

pub use comment_composer_dialog::CommentComposerDialog;
pub use delete_confirmation_dialog::DeleteConfirmationDialog;
pub use error_dialog::ErrorDialog;
pub use info_dialog::InfoDialog;
pub use logs_dialog::LogsDialog;
pub use post_composer_dialog::PostComposerDialog;
pub use profile_edit_dialog::ProfileEditDialog;
