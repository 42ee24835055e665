//! Image-provider request ids of the form `<blurhash>?punch=<float>`.
//!
//! Hosts that load placeholders through a URL-like id pass the hash and an
//! optional punch together. The base83 alphabet itself contains `?` and `=`,
//! so splitting is conservative: an id that is already a correctly sized hash
//! is never split.

use log::debug;

use crate::components::{components, expected_length};
use crate::options::DEFAULT_PUNCH;

/// A parsed request id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRequest<'a> {
    /// The bare BlurHash string.
    pub hash: &'a str,
    /// The requested punch, or `1.0` when absent or unreadable.
    pub punch: f64,
}

impl<'a> ImageRequest<'a> {
    /// Split a request id into hash and punch. Never fails; malformed
    /// hashes are reported later by the decoder.
    ///
    /// ```
    /// use blurhash_decode::ImageRequest;
    ///
    /// let req = ImageRequest::parse("LEHV6nWB2yk8pyo0adR*.7kCMdnj?punch=1.5");
    /// assert_eq!(req.hash, "LEHV6nWB2yk8pyo0adR*.7kCMdnj");
    /// assert_eq!(req.punch, 1.5);
    ///
    /// let bare = ImageRequest::parse("LEHV6nWB2yk8pyo0adR*.7kCMdnj");
    /// assert_eq!(bare.punch, 1.0);
    /// ```
    pub fn parse(id: &'a str) -> Self {
        let request = match id.rfind('?') {
            Some(pos) if !is_sized_hash(id) && is_query(&id[pos + 1..]) => Self {
                hash: &id[..pos],
                punch: punch_from_query(&id[pos + 1..]),
            },
            _ => Self {
                hash: id,
                punch: DEFAULT_PUNCH,
            },
        };
        debug!("handling blurhash {:?} with punch {}", request.hash, request.punch);
        request
    }
}

/// Whether `id` on its own has exactly the length its size flag demands.
fn is_sized_hash(id: &str) -> bool {
    components(id)
        .map(|(x, y)| id.chars().count() == expected_length(x, y))
        .unwrap_or(false)
}

/// `key=value` items joined by `&`, each with a non-empty identifier key.
fn is_query(query: &str) -> bool {
    !query.is_empty()
        && query.split('&').all(|item| match item.split_once('=') {
            Some((key, _)) => {
                !key.is_empty() && key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
            }
            None => false,
        })
}

fn punch_from_query(query: &str) -> f64 {
    query
        .split('&')
        .filter_map(|item| item.split_once('='))
        .find(|(key, _)| *key == "punch")
        .and_then(|(_, value)| value.trim().parse::<f64>().ok())
        .filter(|punch| punch.is_finite())
        .unwrap_or(DEFAULT_PUNCH)
}
