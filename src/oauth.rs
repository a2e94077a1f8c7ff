use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha1::Sha1;
use url::Url;
use uuid::Uuid;

type HmacSha1 = Hmac<Sha1>;

/// RFC 5849 leaves only unreserved characters unencoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Stores the application-level consumer key and secret.
///
/// These identify the calling application to the PayRun.io API; there is no
/// per-user token in the one-legged flow.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub(crate) consumer_key: String,
    pub(crate) consumer_secret: String,
}

impl Credentials {
    /// Creates a new `Credentials` from the provided consumer key and secret.
    #[must_use]
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }

    /// Creates a new `Credentials` from `PAYRUN_CONSUMER_KEY` and
    /// `PAYRUN_CONSUMER_SECRET` environment variables.
    ///
    /// # Panics
    /// Panics if either environment variable is not set.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            consumer_key: std::env::var("PAYRUN_CONSUMER_KEY")
                .expect("PAYRUN_CONSUMER_KEY not set"),
            consumer_secret: std::env::var("PAYRUN_CONSUMER_SECRET")
                .expect("PAYRUN_CONSUMER_SECRET not set"),
        }
    }
}

/// Computes the `Authorization` header value for a single request.
///
/// A fresh nonce and timestamp are generated per call, so no two requests
/// share a signature even within the same second.
pub(crate) fn authorization_header(credentials: &Credentials, method: &str, url: &Url) -> String {
    let nonce = Uuid::new_v4().simple().to_string();
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    authorization_header_at(credentials, method, url, &nonce, timestamp)
}

/// Header assembly with the nonce and timestamp pinned by the caller.
fn authorization_header_at(
    credentials: &Credentials,
    method: &str,
    url: &Url,
    nonce: &str,
    timestamp: u64,
) -> String {
    let timestamp = timestamp.to_string();
    let oauth_params = [
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_version", "1.0"),
    ];

    let base_string = signature_base_string(method, url, &oauth_params);
    let signing_key = format!("{}&", percent_encode(&credentials.consumer_secret));
    let signature = hmac_sha1_base64(signing_key.as_bytes(), base_string.as_bytes());

    let mut header = String::from("OAuth ");
    for (key, value) in oauth_params {
        header.push_str(&format!("{key}=\"{}\", ", percent_encode(value)));
    }
    header.push_str(&format!("oauth_signature=\"{}\"", percent_encode(&signature)));
    header
}

/// Builds the RFC 5849 signature base string from the HTTP method, the URL
/// stripped of its query, and the canonicalized oauth + query parameters.
fn signature_base_string(method: &str, url: &Url, oauth_params: &[(&str, &str)]) -> String {
    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
        .collect();
    params.extend(
        oauth_params
            .iter()
            .map(|(k, v)| (percent_encode(k), percent_encode(v))),
    );
    // Canonical ordering is by encoded name, then encoded value.
    params.sort();

    let normalized = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut base_url = url.clone();
    base_url.set_query(None);
    base_url.set_fragment(None);

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(base_url.as_str()),
        percent_encode(&normalized)
    )
}

fn hmac_sha1_base64(key: &[u8], data: &[u8]) -> String {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts keys of any size");
    mac.update(data);
    base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}

fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn credentials() -> Credentials {
        Credentials::new("ConsumerKey", "ConsumerSecret")
    }

    #[test]
    fn percent_encoding_leaves_unreserved_characters() {
        assert_eq!(percent_encode("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
        assert_eq!(percent_encode("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(percent_encode("/Employer/ER001"), "%2FEmployer%2FER001");
    }

    #[test]
    fn hmac_sha1_matches_reference_vector() {
        // RFC 2202 test vector for HMAC-SHA1.
        let signature = hmac_sha1_base64(
            b"key",
            b"The quick brown fox jumps over the lazy dog",
        );
        assert_eq!(signature, "3nybhbi3iqa8ino29wqQcBydtNk=");
    }

    #[test]
    fn base_string_sorts_and_encodes_parameters() {
        let url = Url::parse("https://api.test.payrun.io/Employers?b=2&a=1").unwrap();
        let base = signature_base_string("get", &url, &[("oauth_nonce", "n"), ("oauth_aaa", "z")]);
        assert_eq!(
            base,
            "GET&https%3A%2F%2Fapi.test.payrun.io%2FEmployers\
             &a%3D1%26b%3D2%26oauth_aaa%3Dz%26oauth_nonce%3Dn"
        );
    }

    #[test]
    fn signature_is_deterministic_for_fixed_nonce_and_timestamp() {
        let url = Url::parse("https://api.test.payrun.io/Employer/ER001").unwrap();
        let first = authorization_header_at(&credentials(), "GET", &url, "nonce123", 1_700_000_000);
        let second = authorization_header_at(&credentials(), "GET", &url, "nonce123", 1_700_000_000);
        assert_eq!(first, second);

        let other_nonce =
            authorization_header_at(&credentials(), "GET", &url, "nonce124", 1_700_000_000);
        assert_ne!(first, other_nonce);
    }

    #[test]
    fn header_carries_every_oauth_parameter() {
        let url = Url::parse("https://api.test.payrun.io/Employer/ER001").unwrap();
        let header = authorization_header_at(&credentials(), "GET", &url, "nonce123", 1_700_000_000);
        assert!(header.starts_with("OAuth "));
        for expected in [
            "oauth_consumer_key=\"ConsumerKey\"",
            "oauth_nonce=\"nonce123\"",
            "oauth_signature_method=\"HMAC-SHA1\"",
            "oauth_timestamp=\"1700000000\"",
            "oauth_version=\"1.0\"",
            "oauth_signature=\"",
        ] {
            assert!(header.contains(expected), "missing {expected} in {header}");
        }
    }

    #[test]
    fn nonces_are_unique_per_request() {
        let url = Url::parse("https://api.test.payrun.io/Employers").unwrap();
        let nonces: HashSet<String> = (0..100)
            .map(|_| {
                let header = authorization_header(&credentials(), "GET", &url);
                let start = header.find("oauth_nonce=\"").unwrap() + "oauth_nonce=\"".len();
                let end = header[start..].find('"').unwrap();
                header[start..start + end].to_string()
            })
            .collect();
        assert_eq!(nonces.len(), 100);
    }
}
