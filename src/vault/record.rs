//! Per-record encryption and the persisted line format.
//!
//! Each vault entry is persisted as one newline-terminated text line:
//!
//! ```text
//! <service_name>:<base64(nonce || ciphertext || tag)>
//! ```
//!
//! The service name must not contain the `:` delimiter; that is
//! validated here at format time.  Parsing splits on the FIRST `:`,
//! so a ciphertext containing `:` after base64 encoding can never
//! confuse the split (base64 does not emit `:` anyway).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::crypto::{self, Key};
use crate::errors::{PwVaultError, Result};

/// Encrypt a plaintext password into a ciphertext blob.
///
/// Every call uses a fresh nonce, so sealing the same password twice
/// yields different blobs.
pub fn seal(key: &Key, password: &str) -> Result<Vec<u8>> {
    crypto::encrypt(key, password.as_bytes())
}

/// Decrypt a ciphertext blob back into the plaintext password.
///
/// Fails with `DecryptionFailed` on a wrong key, truncated data, or a
/// failed auth-tag check.  Plaintext that is not valid UTF-8 is also
/// treated as a decryption failure rather than surfaced as garbage.
pub fn open(key: &Key, ciphertext: &[u8]) -> Result<String> {
    let plaintext_bytes = crypto::decrypt(key, ciphertext)?;
    String::from_utf8(plaintext_bytes).map_err(|_| PwVaultError::DecryptionFailed)
}

/// Render one persisted record line (without the trailing newline).
///
/// Fails with `InvalidServiceName` if `service` is empty or contains
/// the `:` delimiter.
pub fn format_line(service: &str, ciphertext: &[u8]) -> Result<String> {
    if service.is_empty() || service.contains(':') {
        return Err(PwVaultError::InvalidServiceName(service.to_string()));
    }
    Ok(format!("{service}:{}", BASE64.encode(ciphertext)))
}

/// Parse one record line into the service name and ciphertext bytes.
///
/// Splits on the first `:`.  A line with no delimiter or with
/// undecodable base64 is `MalformedRecord`.
pub fn parse_line(line: &str) -> Result<(String, Vec<u8>)> {
    let (service, encoded) = line
        .split_once(':')
        .ok_or_else(|| PwVaultError::MalformedRecord(line.to_string()))?;

    let ciphertext = BASE64
        .decode(encoded)
        .map_err(|_| PwVaultError::MalformedRecord(line.to_string()))?;

    Ok((service.to_string(), ciphertext))
}
