//! Account, profile and user-search endpoints

use super::models::{LoginRequest, LoginResponse, ProfileUpdate, RegisterRequest, RegisterResponse, User};
use super::{ApiClient, ApiError, ApiRequest};

impl ApiClient {
    /// Create a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.expect_json_public(&ApiRequest::post("auth/register/").json(request))
            .await
    }

    /// Obtain an access+refresh token pair for the given credentials.
    ///
    /// Persisting the pair is the caller's decision; the client only stores
    /// tokens it mints through the refresh path.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.expect_json_public(&ApiRequest::post("auth/login/").json(&payload))
            .await
    }

    /// Fetch the authenticated user's own profile.
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.expect_json(&ApiRequest::get("auth/profile/")).await
    }

    /// Patch the authenticated user's own profile.
    ///
    /// The server answers with the patch serializer (no id), so callers
    /// re-fetch [`profile`](Self::profile) for the full record.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.expect_ok(&ApiRequest::patch("auth/profile/").json(update))
            .await
    }

    /// Fetch any user's profile by id.
    pub async fn user(&self, id: i64) -> Result<User, ApiError> {
        self.expect_json(&ApiRequest::get(format!("auth/users/{}/", id)))
            .await
    }

    /// Search users by name or email. The server caps results at 20 and
    /// excludes the searching user.
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>, ApiError> {
        self.expect_json(&ApiRequest::get("auth/users/search/").query("q", query))
            .await
    }
}
