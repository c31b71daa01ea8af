//! Tests for the serde field helpers.
#![cfg(feature = "serde")]

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Token {
    #[serde(with = "urlsafe_base64::serde")]
    nonce: Vec<u8>,
}

#[test]
fn serializes_as_url_safe_string() {
    let token = Token {
        nonce: vec![0xfb, 0xff],
    };
    let json = serde_json::to_string(&token).unwrap();
    assert_eq!(json, r#"{"nonce":"-_8"}"#);
    assert_eq!(serde_json::from_str::<Token>(&json).unwrap(), token);
}

#[test]
fn empty_bytes() {
    let token = Token { nonce: Vec::new() };
    let json = serde_json::to_string(&token).unwrap();
    assert_eq!(json, r#"{"nonce":""}"#);
    assert_eq!(serde_json::from_str::<Token>(&json).unwrap(), token);
}

#[test]
fn rejects_malformed_length() {
    let err = serde_json::from_str::<Token>(r#"{"nonce":"abcde"}"#).unwrap_err();
    assert!(err.to_string().contains("abcde"));
}
