//! Payload model deserialization against server-shaped fixtures.

use buddyterm::api::models::{Friendship, FriendshipStatus, LoginResponse, Page, Post, User, Visibility};

#[test]
fn login_response_carries_tokens_and_user_summary() {
    let body = r#"{
        "access": "access-token",
        "refresh": "refresh-token",
        "user": {
            "id": 1,
            "email": "ada@example.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "full_name": "Ada Lovelace",
            "profile_picture_url": null
        }
    }"#;

    let parsed: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.access, "access-token");
    assert_eq!(parsed.refresh, "refresh-token");
    assert_eq!(parsed.user.full_name, "Ada Lovelace");
}

#[test]
fn friendship_status_values_round_trip() {
    let statuses: Vec<Option<FriendshipStatus>> = serde_json::from_str(
        r#"["self", "none", "pending_sent", "pending_received", "friends", null]"#,
    )
    .unwrap();
    assert_eq!(
        statuses,
        vec![
            Some(FriendshipStatus::Own),
            Some(FriendshipStatus::None),
            Some(FriendshipStatus::PendingSent),
            Some(FriendshipStatus::PendingReceived),
            Some(FriendshipStatus::Friends),
            None,
        ]
    );
}

#[test]
fn paginated_feed_with_embedded_comments_deserializes() {
    let body = r#"{
        "count": 12,
        "next": "http://localhost:8000/api/posts/?page=2",
        "previous": null,
        "results": [{
            "id": 5,
            "author": {
                "id": 2,
                "email": "bob@example.com",
                "first_name": "Bob",
                "last_name": "Builder",
                "full_name": "Bob Builder",
                "is_online": true,
                "friendship_status": "friends"
            },
            "content": "hello world",
            "image": null,
            "image_url": "http://localhost:8000/media/posts/pic.jpg",
            "visibility": "public",
            "created_at": "2026-08-01T10:00:00Z",
            "updated_at": "2026-08-01T10:00:00Z",
            "likes_count": 3,
            "comments_count": 2,
            "is_liked": true,
            "likes": [],
            "comments": [{
                "id": 9,
                "post": 5,
                "author": {"id": 3, "email": "eve@example.com", "full_name": "Eve"},
                "parent": null,
                "content": "nice",
                "likes_count": 1,
                "replies_count": 1,
                "is_liked": false,
                "replies": [{
                    "id": 10,
                    "post": 5,
                    "author": {"id": 2, "email": "bob@example.com", "full_name": "Bob Builder"},
                    "parent": 9,
                    "content": "thanks",
                    "replies": []
                }]
            }]
        }]
    }"#;

    let page: Page<Post> = serde_json::from_str(body).unwrap();
    assert_eq!(page.count, 12);
    assert!(page.has_more());

    let post = &page.results[0];
    assert_eq!(post.visibility, Visibility::Public);
    assert!(post.is_liked);
    assert!(post.image_url.is_some());
    assert_eq!(post.author.friendship_status, Some(FriendshipStatus::Friends));

    let comment = &post.comments[0];
    assert_eq!(comment.replies.len(), 1);
    assert_eq!(comment.replies[0].parent, Some(9));
}

#[test]
fn last_page_has_no_more() {
    let body = r#"{"count":1,"next":null,"previous":"http://localhost:8000/api/posts/?page=1","results":[]}"#;
    let page: Page<Post> = serde_json::from_str(body).unwrap();
    assert!(!page.has_more());
}

#[test]
fn friendship_edge_deserializes_both_users() {
    let body = r#"{
        "id": 4,
        "from_user": {"id": 1, "email": "ada@example.com", "full_name": "Ada Lovelace"},
        "to_user": {"id": 2, "email": "bob@example.com", "full_name": "Bob Builder"},
        "status": "pending",
        "created_at": "2026-08-05T09:00:00Z",
        "updated_at": "2026-08-05T09:00:00Z"
    }"#;

    let friendship: Friendship = serde_json::from_str(body).unwrap();
    assert_eq!(friendship.from_user.id, 1);
    assert_eq!(friendship.to_user.id, 2);
    assert_eq!(friendship.status, "pending");
}

#[test]
fn unknown_fields_are_ignored_and_absent_counters_default() {
    let body = r#"{"id": 8, "email": "x@example.com", "brand_new_field": {"nested": true}}"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.id, 8);
    assert!(!user.is_online);
    assert_eq!(user.posts_count, None);
    assert_eq!(user.friendship_status, None);
}

#[test]
fn visibility_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Visibility::Public).unwrap(), "\"public\"");
    assert_eq!(serde_json::to_string(&Visibility::Private).unwrap(), "\"private\"");
    assert_eq!(Visibility::Public.toggled(), Visibility::Private);
}
