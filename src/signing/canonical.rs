//! Canonical string construction shared by both signers

use crate::errors::MwsResult;
use crate::utils::crypto::hmac_sha256_base64;

/// Joins `key=value` pairs with `&`, in the order given.
///
/// Values are written as-is; callers decide which ones are escaped.
pub fn canonical_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out
}

/// `{method}\n{host}\n{path}\n{query}`
pub fn string_to_sign(method: &str, host: &str, path: &str, query: &str) -> String {
    format!("{method}\n{host}\n{path}\n{query}")
}

/// Base64(HMAC-SHA256(secret, string_to_sign))
pub fn compute_signature(secret: &str, string_to_sign: &str) -> MwsResult<String> {
    tracing::trace!(len = string_to_sign.len(), "computing HmacSHA256 signature");
    hmac_sha256_base64(secret, string_to_sign)
}
