//! Comment endpoints

use serde_json::json;

use super::models::{Comment, LikeToggle};
use super::{ApiClient, ApiError, ApiRequest};

impl ApiClient {
    /// List a post's root comments, replies nested.
    pub async fn comments(&self, post_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.expect_json(&ApiRequest::get(format!("posts/{}/comments/", post_id)))
            .await
    }

    /// Add a comment to a post; pass `parent` to reply to an existing
    /// comment on the same post.
    pub async fn create_comment(&self, post_id: i64, content: &str, parent: Option<i64>) -> Result<Comment, ApiError> {
        let payload = json!({ "content": content, "parent": parent });
        self.expect_json(&ApiRequest::post(format!("posts/{}/comments/", post_id)).json(&payload))
            .await
    }

    /// Edit a comment's content. Authors only, server-enforced.
    pub async fn update_comment(&self, id: i64, content: &str) -> Result<Comment, ApiError> {
        let payload = json!({ "content": content });
        self.expect_json(&ApiRequest::patch(format!("posts/comments/{}/", id)).json(&payload))
            .await
    }

    /// Delete a comment. Authors only, server-enforced.
    pub async fn delete_comment(&self, id: i64) -> Result<(), ApiError> {
        self.expect_ok(&ApiRequest::delete(format!("posts/comments/{}/", id)))
            .await
    }

    /// Toggle the authenticated user's like on a comment.
    pub async fn toggle_comment_like(&self, id: i64) -> Result<LikeToggle, ApiError> {
        self.expect_json(&ApiRequest::post(format!("posts/comments/{}/like/", id)))
            .await
    }
}
