//! Comment thread flattening: ordering, depth, ownership marks.

use buddyterm::api::models::Comment;
use buddyterm::service::display::flatten_thread;
use serde_json::json;

fn comment(id: i64, author_id: i64, content: &str, parent: Option<i64>, replies: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "post": 1,
        "author": {
            "id": author_id,
            "email": format!("user{author_id}@example.com"),
            "first_name": format!("User{author_id}"),
            "last_name": "Test",
            "full_name": format!("User{author_id} Test"),
        },
        "parent": parent,
        "content": content,
        "created_at": "2026-08-01T10:00:00Z",
        "updated_at": "2026-08-01T10:00:00Z",
        "likes_count": 0,
        "replies_count": 0,
        "is_liked": false,
        "replies": replies,
    })
}

#[test]
fn thread_flattens_depth_first_with_indent_levels() {
    let roots: Vec<Comment> = serde_json::from_value(json!([
        comment(1, 10, "first root", None, json!([
            comment(2, 11, "reply to first", Some(1), json!([
                comment(3, 12, "nested reply", Some(2), json!([])),
            ])),
            comment(4, 10, "second reply", Some(1), json!([])),
        ])),
        comment(5, 13, "second root", None, json!([])),
    ]))
    .unwrap();

    let rows = flatten_thread(&roots, None);

    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5], "depth-first, replies before siblings");

    let depths: Vec<usize> = rows.iter().map(|row| row.depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 1, 0]);

    assert_eq!(rows[1].parent, Some(1));
    assert_eq!(rows[2].parent, Some(2));
}

#[test]
fn viewer_ownership_is_marked_per_row() {
    let roots: Vec<Comment> = serde_json::from_value(json!([
        comment(1, 10, "mine", None, json!([
            comment(2, 11, "someone else", Some(1), json!([])),
        ])),
    ]))
    .unwrap();

    let rows = flatten_thread(&roots, Some(10));
    assert!(rows[0].is_own);
    assert!(!rows[1].is_own);

    // Without a viewer nothing is own
    let rows = flatten_thread(&roots, None);
    assert!(rows.iter().all(|row| !row.is_own));
}

#[test]
fn empty_thread_produces_no_rows() {
    let rows = flatten_thread(&[], Some(1));
    assert!(rows.is_empty());
}

#[test]
fn author_name_falls_back_to_email_when_names_are_blank() {
    let roots: Vec<Comment> = serde_json::from_value(json!([
        {
            "id": 9,
            "author": { "id": 3, "email": "anon@example.com", "first_name": "", "last_name": "", "full_name": "" },
            "content": "hello",
            "parent": null,
            "replies": [],
        }
    ]))
    .unwrap();

    let rows = flatten_thread(&roots, None);
    assert_eq!(rows[0].author_name, "anon@example.com");
}
