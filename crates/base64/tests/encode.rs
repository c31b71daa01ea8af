//! Tests for URL-safe base64 encoding (encode_bytes, encode_text).

use rand::Rng;
use urlsafe_base64::{
    encode_bytes, encode_text, Charset, CharsetError, Config, ConfigError, ALPHABET, ALPHABET_URL,
};

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode_bytes(&blob, '=');

        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
        assert_ne!(encoded.len() % 4, 1);
        assert_eq!(encoded.len(), (blob.len() * 4).div_ceil(3));
    }
}

#[test]
fn hello_world() {
    assert_eq!(encode_bytes(b"Hello World!", '='), "SGVsbG8gV29ybGQh");
}

#[test]
fn empty_input() {
    assert_eq!(encode_bytes(b"", '='), "");
    assert_eq!(encode_text("", Charset::Utf8, '=').unwrap(), "");
}

#[test]
fn single_byte() {
    assert_eq!(encode_bytes(b"f", '='), "Zg");
}

#[test]
fn two_bytes() {
    assert_eq!(encode_bytes(b"fo", '='), "Zm8");
}

#[test]
fn three_bytes() {
    assert_eq!(encode_bytes(b"foo", '='), "Zm9v");
}

#[test]
fn url_safe_characters() {
    assert_eq!(encode_bytes(&[0xfb, 0xef, 0xbe], '='), "----");
    assert_eq!(encode_bytes(&[0xff, 0xff, 0xff], '='), "____");
}

#[test]
fn custom_padding_is_stripped() {
    assert_eq!(encode_bytes(b"f", '*'), "Zg");
    assert_eq!(encode_bytes(b"fo", '.'), "Zm8");
}

#[test]
fn text_utf8() {
    assert_eq!(
        encode_text("Hello World!", Charset::Utf8, '=').unwrap(),
        "SGVsbG8gV29ybGQh"
    );
    assert_eq!(encode_text("é", Charset::Utf8, '=').unwrap(), "w6k");
}

#[test]
fn text_other_charsets() {
    assert_eq!(encode_text("é", Charset::Latin1, '=').unwrap(), "6Q");
    assert_eq!(encode_text("Hi", Charset::Utf16Le, '=').unwrap(), "SABpAA");
}

#[test]
fn text_unrepresentable() {
    assert_eq!(
        encode_text("a€", Charset::Latin1, '=').unwrap_err(),
        CharsetError::Unrepresentable {
            charset: Charset::Latin1,
            ch: '€',
            index: 1,
        }
    );
}

#[test]
fn alphabet_padding_needs_config_validation() {
    // An alphabet character as padding strips real data.
    assert_eq!(encode_bytes(&[0], 'A'), "");
    for c in ALPHABET.chars().chain(ALPHABET_URL.chars()) {
        assert_eq!(
            Config::new().with_padding(c),
            Err(ConfigError::InvalidPadding(c))
        );
    }
}
