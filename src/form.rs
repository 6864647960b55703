//!
//! `application/x-www-form-urlencoded` codec for request bodies.
//!

use crate::error::ClientError;
use bytes::{BufMut, Bytes, BytesMut};
use std::collections::HashMap;

pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encode key-value pairs as a form body, preserving the given order.
pub fn encode<'a, I>(pairs: I) -> Bytes
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut buf = BytesMut::with_capacity(256);
    for (key, value) in pairs {
        if !buf.is_empty() {
            buf.put_u8(b'&');
        }
        buf.put_slice(urlencoding::encode(key).as_bytes());
        buf.put_u8(b'=');
        buf.put_slice(urlencoding::encode(value).as_bytes());
    }
    buf.freeze()
}

/// Decode a form body. When a key repeats, the last occurrence wins.
pub fn parse(src: &[u8]) -> Result<HashMap<String, String>, ClientError> {
    let mut fields = HashMap::new();
    for pair in src.split(|b| *b == b'&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.iter().position(|b| *b == b'=') {
            Some(idx) => (&pair[..idx], &pair[idx + 1..]),
            None => (pair, &[][..]),
        };
        fields.insert(decode_component(key)?, decode_component(value)?);
    }
    Ok(fields)
}

fn decode_component(raw: &[u8]) -> Result<String, ClientError> {
    let plus_as_space: Vec<u8> = raw
        .iter()
        .map(|b| if *b == b'+' { b' ' } else { *b })
        .collect();
    let decoded = urlencoding::decode_binary(&plus_as_space);
    String::from_utf8(decoded.into_owned()).map_err(|_e| {
        return ClientError::InvalidFormBody(String::from_utf8_lossy(raw).into_owned());
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_preserves_order() {
        let body = encode([("topic", "T1"), ("ttl", "3000"), ("tag", "")]);
        assert_eq!(&body[..], b"topic=T1&ttl=3000&tag=");
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let body = encode([("content", "a&b=c d+e"), ("extFields", r#"{"k":"v"}"#)]);
        assert_eq!(
            &body[..],
            &b"content=a%26b%3Dc%20d%2Be&extFields=%7B%22k%22%3A%22v%22%7D"[..]
        );
    }

    #[test]
    fn test_encode_empty() {
        let body = encode(std::iter::empty());
        assert!(body.is_empty());
    }

    #[test]
    fn test_parse() -> Result<(), Box<dyn std::error::Error>> {
        let fields = parse(b"topic=T1&content=hello+world%21&tag&&ttl=")?;
        assert_eq!(fields.len(), 4);
        assert_eq!(fields.get("topic").map(String::as_str), Some("T1"));
        assert_eq!(fields.get("content").map(String::as_str), Some("hello world!"));
        assert_eq!(fields.get("tag").map(String::as_str), Some(""));
        assert_eq!(fields.get("ttl").map(String::as_str), Some(""));
        Ok(())
    }

    #[test]
    fn test_parse_last_duplicate_wins() -> Result<(), Box<dyn std::error::Error>> {
        let fields = parse(b"topic=T1&topic=T2")?;
        assert_eq!(fields.get("topic").map(String::as_str), Some("T2"));
        Ok(())
    }

    #[test]
    fn test_parse_unicode() -> Result<(), Box<dyn std::error::Error>> {
        let body = encode([("content", "订单\n\t✓")]);
        let fields = parse(&body)?;
        assert_eq!(fields.get("content").map(String::as_str), Some("订单\n\t✓"));
        Ok(())
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let result = parse(b"content=%FF%FE");
        assert!(matches!(result, Err(ClientError::InvalidFormBody(_))));
    }
}
