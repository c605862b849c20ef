//! Behavioral tests for posts decoding

use crate::api::{decode_posts, fetch_posts};
use crate::error::UiError;

#[test]
fn given_camel_case_posts_when_decoded_then_fields_map() {
    let body = r#"[
        {"userId": 1, "id": 7, "title": "Hello", "body": "First line\nSecond line"},
        {"userId": 2, "id": 8, "title": "Again", "body": ""}
    ]"#;

    let posts = decode_posts(body).expect("valid body");

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].user_id, 1);
    assert_eq!(posts[0].id, 7);
    assert_eq!(posts[0].body, "First line\nSecond line");
    assert_eq!(posts[1].title, "Again");
}

#[test]
fn given_empty_array_when_decoded_then_no_posts() {
    assert!(decode_posts("[]").expect("valid body").is_empty());
}

#[test]
fn given_object_instead_of_array_when_decoded_then_decode_error() {
    let result = decode_posts(r#"{"posts": []}"#);
    assert!(matches!(result, Err(UiError::Decode(_))));
}

#[test]
fn given_native_target_when_fetching_then_network_error() {
    let result = futures::executor::block_on(fetch_posts("http://localhost:5000/api/posts"));
    assert!(matches!(result, Err(UiError::Network(_))));
}
