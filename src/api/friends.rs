//! Friendship endpoints

use serde_json::json;

use super::models::{Friendship, MessageResponse, RespondResponse, User};
use super::{ApiClient, ApiError, ApiRequest};

impl ApiClient {
    /// List the authenticated user's friends.
    pub async fn friends(&self) -> Result<Vec<User>, ApiError> {
        self.expect_json(&ApiRequest::get("auth/friends/")).await
    }

    /// List incoming pending friend requests, newest first.
    pub async fn friend_requests(&self) -> Result<Vec<Friendship>, ApiError> {
        self.expect_json(&ApiRequest::get("auth/friend-requests/")).await
    }

    /// Send a friend request to a user.
    pub async fn send_friend_request(&self, user_id: i64) -> Result<Friendship, ApiError> {
        self.expect_json(&ApiRequest::post(format!("auth/friend-requests/send/{}/", user_id)))
            .await
    }

    /// Accept or reject an incoming friend request.
    pub async fn respond_friend_request(&self, friendship_id: i64, accept: bool) -> Result<RespondResponse, ApiError> {
        let action = if accept { "accept" } else { "reject" };
        let payload = json!({ "action": action });
        self.expect_json(
            &ApiRequest::post(format!("auth/friend-requests/{}/respond/", friendship_id)).json(&payload),
        )
        .await
    }

    /// Dissolve an accepted friendship.
    pub async fn unfriend(&self, user_id: i64) -> Result<MessageResponse, ApiError> {
        self.expect_json(&ApiRequest::delete(format!("auth/unfriend/{}/", user_id)))
            .await
    }
}
