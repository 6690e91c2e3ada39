//! Secure (signed) delivery URL builder
//!
//! Token grammar: `exp={expire}~acl={acl}~hmac={signature}` appended as the
//! `token` query parameter. The signature covers the `exp` and `acl` fields
//! joined by the same `~` delimiter, HMAC-keyed with the project secret and
//! hex-encoded. The default digest is SHA-1, the service's legacy scheme;
//! stronger algorithms are selectable.
//!
//! The ACL defaults to the exact path being signed, so the token authorizes
//! only that path+transformation combination. Pass a wildcard ACL such as
//! `/*/` via [`SecureUrlBuilder::build_with_acl`] to authorize a file under
//! any transformation.

use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::error::UpcdnError;

const DEFAULT_WINDOW_SECS: u64 = 300;

/// HMAC digest used for the token signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignAlgorithm {
    /// Legacy 160-bit digest; the service default
    Sha1,
    Sha256,
    Sha512,
}

/// Builds time-limited signed delivery URLs for a CDN host.
///
/// Effectively immutable once constructed; safe to share across calls. The
/// validity window is fixed per builder, while the absolute expiry is
/// computed fresh on every `build`.
///
/// # Example
///
/// ```rust
/// use upcdn_core::signed_url::SecureUrlBuilder;
///
/// let builder = SecureUrlBuilder::new("cdn.yourdomain.com", "secret").unwrap();
/// let url = builder.build("52da3bfc-7cd8-4861-8b05-126fef7a6994");
/// assert!(url.starts_with("https://cdn.yourdomain.com/"));
/// assert!(url.contains("?token=exp="));
/// ```
#[derive(Debug, Clone)]
pub struct SecureUrlBuilder {
    cdn_host: String,
    secret_key: String,
    window_secs: u64,
    algorithm: SignAlgorithm,
}

impl SecureUrlBuilder {
    /// Create a builder with the default 300s window and SHA-1 digest.
    ///
    /// Fails fast on a missing secret: signing with an empty key would
    /// produce always-"valid"-looking signatures.
    pub fn new(cdn_host: impl Into<String>, secret_key: impl Into<String>) -> Result<Self, UpcdnError> {
        let secret_key = secret_key.into();
        if secret_key.is_empty() {
            return Err(UpcdnError::MissingSecretKey);
        }
        Ok(SecureUrlBuilder {
            cdn_host: cdn_host.into().trim_end_matches('/').to_string(),
            secret_key,
            window_secs: DEFAULT_WINDOW_SECS,
            algorithm: SignAlgorithm::Sha1,
        })
    }

    /// Set the validity window in seconds.
    pub fn with_window(mut self, secs: u64) -> Self {
        self.window_secs = secs;
        self
    }

    /// Select the signature digest.
    pub fn with_algorithm(mut self, algorithm: SignAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn window_secs(&self) -> u64 {
        self.window_secs
    }

    /// Sign a relative CDN path or bare file UUID.
    ///
    /// The ACL defaults to the exact normalized path, with leading and
    /// trailing slashes.
    pub fn build(&self, path_or_uuid: &str) -> String {
        self.build_at(path_or_uuid, None, unix_now())
    }

    /// Sign with an explicit ACL override, e.g. the wildcard `/*/`.
    pub fn build_with_acl(&self, path_or_uuid: &str, acl: &str) -> String {
        self.build_at(path_or_uuid, Some(acl), unix_now())
    }

    /// Sign at a fixed wall-clock instant. Deterministic for fixed inputs;
    /// `build` and `build_with_acl` delegate here with the current time.
    pub fn build_at(&self, path_or_uuid: &str, acl: Option<&str>, now: u64) -> String {
        let path = path_or_uuid.trim_matches('/');
        let expire = now + self.window_secs;
        let acl = match acl {
            Some(acl) => normalize_acl(acl),
            None => format!("/{}/", path),
        };
        let signature = self.hmac_hex(&format!("exp={}~acl={}", expire, acl));
        format!(
            "https://{}/{}/?token=exp={}~acl={}~hmac={}",
            self.cdn_host, path, expire, acl, signature
        )
    }

    fn hmac_hex(&self, message: &str) -> String {
        let key = self.secret_key.as_bytes();
        match self.algorithm {
            SignAlgorithm::Sha1 => {
                let mut mac =
                    Hmac::<Sha1>::new_from_slice(key).expect("HMAC accepts any key size");
                mac.update(message.as_bytes());
                hex::encode(mac.finalize().into_bytes())
            }
            SignAlgorithm::Sha256 => {
                let mut mac =
                    Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts any key size");
                mac.update(message.as_bytes());
                hex::encode(mac.finalize().into_bytes())
            }
            SignAlgorithm::Sha512 => {
                let mut mac =
                    Hmac::<Sha512>::new_from_slice(key).expect("HMAC accepts any key size");
                mac.update(message.as_bytes());
                hex::encode(mac.finalize().into_bytes())
            }
        }
    }
}

/// Ensure leading and trailing slashes without doubling them.
fn normalize_acl(acl: &str) -> String {
    format!("/{}/", acl.trim_matches('/'))
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UUID: &str = "52da3bfc-7cd8-4861-8b05-126fef7a6994";
    const HOST: &str = "cdn.yourdomain.com";
    const SECRET: &str = "secret";
    // now + 300s window = 1633997100
    const FROZEN_NOW: u64 = 1633996800;

    fn builder() -> SecureUrlBuilder {
        SecureUrlBuilder::new(HOST, SECRET).unwrap()
    }

    #[test]
    fn test_signed_url_known_vector() {
        let url = builder().build_at(UUID, None, FROZEN_NOW);
        assert_eq!(
            url,
            format!(
                "https://{host}/{uuid}/?token=exp=1633997100~acl=/{uuid}/~hmac=a33cfc66c3e3592e712cdd1f82bd79d51df93b06",
                host = HOST,
                uuid = UUID
            )
        );
    }

    #[test]
    fn test_signed_url_is_deterministic() {
        let b = builder();
        assert_eq!(b.build_at(UUID, None, FROZEN_NOW), b.build_at(UUID, None, FROZEN_NOW));
    }

    #[test]
    fn test_wildcard_acl_known_vector() {
        let url = builder().build_at(UUID, Some("/*/"), FROZEN_NOW);
        assert!(url.contains("~acl=/*/~"));
        assert!(url.ends_with("~hmac=722f6beb935d35b62427329dd591049afb498f77"));
    }

    #[test]
    fn test_acl_normalization() {
        let b = builder();
        // Missing slashes are added, doubled ones are not.
        let with_bare = b.build_at(UUID, Some("*"), FROZEN_NOW);
        let with_slashes = b.build_at(UUID, Some("/*/"), FROZEN_NOW);
        assert_eq!(with_bare, with_slashes);
    }

    #[test]
    fn test_path_normalization() {
        let b = builder();
        let padded = b.build_at(&format!("/{}/", UUID), None, FROZEN_NOW);
        let bare = b.build_at(UUID, None, FROZEN_NOW);
        assert_eq!(padded, bare);
    }

    #[test]
    fn test_signing_transformed_path() {
        let path = format!("{}/-/resize/440x/", UUID);
        let url = builder().build_at(&path, None, FROZEN_NOW);
        // ACL defaults to the exact path+transformation being signed.
        assert!(url.contains(&format!("~acl=/{}/-/resize/440x/~", UUID)));
        assert!(url.starts_with(&format!("https://{}/{}?token=", HOST, path)));
    }

    #[test]
    fn test_empty_secret_fails_fast() {
        let err = SecureUrlBuilder::new(HOST, "").unwrap_err();
        assert!(matches!(err, UpcdnError::MissingSecretKey));
    }

    #[test]
    fn test_window_fixed_at_construction() {
        let b = builder().with_window(3600);
        let url = b.build_at(UUID, None, FROZEN_NOW);
        assert!(url.contains("token=exp=1634000400~"));
    }

    #[test]
    fn test_stronger_algorithms_change_signature() {
        let sha1 = builder().build_at(UUID, None, FROZEN_NOW);
        let sha256 = builder()
            .with_algorithm(SignAlgorithm::Sha256)
            .build_at(UUID, None, FROZEN_NOW);
        let sha512 = builder()
            .with_algorithm(SignAlgorithm::Sha512)
            .build_at(UUID, None, FROZEN_NOW);
        assert_ne!(sha1, sha256);
        assert_ne!(sha256, sha512);
        // Digest widths: 20, 32, and 64 bytes hex-encoded.
        assert_eq!(sha1.split("~hmac=").nth(1).unwrap().len(), 40);
        assert_eq!(sha256.split("~hmac=").nth(1).unwrap().len(), 64);
        assert_eq!(sha512.split("~hmac=").nth(1).unwrap().len(), 128);
    }

    #[test]
    fn test_host_trailing_slash_trimmed() {
        let b = SecureUrlBuilder::new("cdn.yourdomain.com/", SECRET).unwrap();
        let url = b.build_at(UUID, None, FROZEN_NOW);
        assert!(url.starts_with("https://cdn.yourdomain.com/52da"));
    }
}
