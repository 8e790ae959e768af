//! Display types consumed by the UI
//!
//! API payloads are converted once, close to the network edge, so components
//! only deal with flat, render-ready data.

use crate::api::models::{Comment, Friendship, FriendshipStatus, Post, User, Visibility};

/// A user row for friends, search results and profile views.
#[derive(Debug, Clone)]
pub struct UserDisplay {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub is_online: bool,
    pub friendship_status: Option<FriendshipStatus>,
    pub posts_count: Option<i64>,
    pub friends_count: Option<i64>,
}

impl From<&User> for UserDisplay {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: display_name(user),
            email: user.email.clone(),
            bio: user.bio.clone(),
            location: user.location.clone(),
            website: user.website.clone(),
            is_online: user.is_online,
            friendship_status: user.friendship_status,
            posts_count: user.posts_count,
            friends_count: user.friends_count,
        }
    }
}

/// A feed row.
#[derive(Debug, Clone)]
pub struct PostDisplay {
    pub id: i64,
    pub author_id: i64,
    pub author_name: String,
    pub content: String,
    pub visibility: Visibility,
    pub created_at: String,
    pub likes_count: i64,
    pub comments_count: i64,
    pub is_liked: bool,
    pub has_image: bool,
    /// Authored by the viewer; gates edit/delete shortcuts
    pub is_own: bool,
}

impl PostDisplay {
    pub fn from_post(post: &Post, viewer_id: Option<i64>) -> Self {
        Self {
            id: post.id,
            author_id: post.author.id,
            author_name: display_name(&post.author),
            content: post.content.clone(),
            visibility: post.visibility,
            created_at: post.created_at.clone(),
            likes_count: post.likes_count,
            comments_count: post.comments_count,
            is_liked: post.is_liked,
            has_image: post.image_url.is_some(),
            is_own: viewer_id == Some(post.author.id),
        }
    }
}

/// A comment row, carrying its depth in the thread for indentation.
#[derive(Debug, Clone)]
pub struct CommentDisplay {
    pub id: i64,
    pub author_id: i64,
    pub author_name: String,
    pub content: String,
    pub created_at: String,
    pub likes_count: i64,
    pub is_liked: bool,
    pub parent: Option<i64>,
    pub depth: usize,
    pub is_own: bool,
}

/// An incoming friend request row.
#[derive(Debug, Clone)]
pub struct RequestDisplay {
    pub id: i64,
    pub from_id: i64,
    pub from_name: String,
    pub from_email: String,
    pub created_at: String,
}

impl From<&Friendship> for RequestDisplay {
    fn from(friendship: &Friendship) -> Self {
        Self {
            id: friendship.id,
            from_id: friendship.from_user.id,
            from_name: display_name(&friendship.from_user),
            from_email: friendship.from_user.email.clone(),
            created_at: friendship.created_at.clone(),
        }
    }
}

/// Flatten a comment tree into depth-annotated rows, depth-first.
///
/// Replies only ever reference a parent one level up, so the walk cannot
/// cycle and plain recursion is enough.
pub fn flatten_thread(roots: &[Comment], viewer_id: Option<i64>) -> Vec<CommentDisplay> {
    let mut rows = Vec::new();
    for comment in roots {
        push_comment(comment, 0, viewer_id, &mut rows);
    }
    rows
}

fn push_comment(comment: &Comment, depth: usize, viewer_id: Option<i64>, rows: &mut Vec<CommentDisplay>) {
    rows.push(CommentDisplay {
        id: comment.id,
        author_id: comment.author.id,
        author_name: display_name(&comment.author),
        content: comment.content.clone(),
        created_at: comment.created_at.clone(),
        likes_count: comment.likes_count,
        is_liked: comment.is_liked,
        parent: comment.parent,
        depth,
        is_own: viewer_id == Some(comment.author.id),
    });
    for reply in &comment.replies {
        push_comment(reply, depth + 1, viewer_id, rows);
    }
}

fn display_name(user: &User) -> String {
    if !user.full_name.trim().is_empty() {
        return user.full_name.clone();
    }
    let assembled = format!("{} {}", user.first_name, user.last_name);
    if !assembled.trim().is_empty() {
        return assembled.trim().to_string();
    }
    user.email.clone()
}
