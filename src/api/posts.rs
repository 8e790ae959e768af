//! Post feed endpoints

use std::path::{Path, PathBuf};

use super::models::{LikeToggle, Page, Post, PostUpdate, Visibility};
use super::{ApiClient, ApiError, ApiRequest, MultipartField, MultipartValue};

/// A post to publish: text, visibility, and an optional image attachment.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub content: String,
    pub visibility: Visibility,
    pub image: Option<PathBuf>,
}

impl NewPost {
    pub fn text(content: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            content: content.into(),
            visibility,
            image: None,
        }
    }

    /// Build the multipart fields, reading the image up front so a replay
    /// after a token refresh reuses the same bytes.
    fn to_fields(&self) -> Result<Vec<MultipartField>, ApiError> {
        let mut fields = vec![
            MultipartField {
                name: "content".to_string(),
                value: MultipartValue::Text(self.content.clone()),
            },
            MultipartField {
                name: "visibility".to_string(),
                value: MultipartValue::Text(self.visibility.as_str().to_string()),
            },
        ];
        if let Some(path) = &self.image {
            let bytes = std::fs::read(path)
                .map_err(|err| ApiError::Storage(anyhow::anyhow!("failed to read image {}: {err}", path.display())))?;
            // Reject oversized images before uploading; the server would
            // bounce them anyway
            if bytes.len() as u64 > crate::constants::MAX_IMAGE_BYTES {
                let mut fields = std::collections::BTreeMap::new();
                fields.insert(
                    "image".to_string(),
                    vec!["Image size cannot exceed 2MB.".to_string()],
                );
                return Err(ApiError::Validation(fields));
            }
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("image.jpg")
                .to_string();
            fields.push(MultipartField {
                name: "image".to_string(),
                value: MultipartValue::File {
                    mime: guess_mime(path).to_string(),
                    file_name,
                    bytes,
                },
            });
        }
        Ok(fields)
    }
}

fn guess_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

impl ApiClient {
    /// Fetch a feed page, optionally filtered to a single author.
    pub async fn posts(&self, page: u32, author: Option<i64>) -> Result<Page<Post>, ApiError> {
        let mut request = ApiRequest::get("posts/").query("page", page);
        if let Some(author) = author {
            request = request.query("author", author);
        }
        self.expect_json(&request).await
    }

    /// Publish a post (multipart: content, visibility, optional image).
    pub async fn create_post(&self, new_post: &NewPost) -> Result<Post, ApiError> {
        let fields = new_post.to_fields()?;
        self.expect_json(&ApiRequest::post("posts/").multipart(fields)).await
    }

    /// Patch a post's content or visibility. Authors only, server-enforced.
    pub async fn update_post(&self, id: i64, update: &PostUpdate) -> Result<Post, ApiError> {
        self.expect_json(&ApiRequest::patch(format!("posts/{}/", id)).json(update))
            .await
    }

    /// Delete a post. Authors only, server-enforced.
    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        self.expect_ok(&ApiRequest::delete(format!("posts/{}/", id))).await
    }

    /// Toggle the authenticated user's like on a post.
    pub async fn toggle_post_like(&self, id: i64) -> Result<LikeToggle, ApiError> {
        self.expect_json(&ApiRequest::post(format!("posts/{}/like/", id)))
            .await
    }
}
