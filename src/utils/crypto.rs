//! Cryptographic utilities for API signing

use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::{MwsError, MwsResult};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 서명 생성
pub fn hmac_sha256(secret: &str, message: &str) -> MwsResult<Vec<u8>> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| MwsError::Signing {
            message: e.to_string(),
        })?;
    mac.update(message.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// HMAC-SHA256 서명을 Base64 문자열로 반환
pub fn hmac_sha256_base64(secret: &str, message: &str) -> MwsResult<String> {
    hmac_sha256(secret, message).map(|digest| base64_encode(&digest))
}

/// Base64 of the MD5 digest, as sent in `Content-MD5`
pub fn md5_base64(data: &[u8]) -> String {
    base64_encode(&md5::compute(data).0)
}

/// Base64 인코딩
pub fn base64_encode(data: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(data)
}

/// Base64 디코딩
pub fn base64_decode(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    base64::engine::general_purpose::STANDARD.decode(data)
}
