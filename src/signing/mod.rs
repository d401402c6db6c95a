//! Signature Version 2 request signing
//!
//! Two entry points share the canonicalization core in [`canonical`]:
//! - [`sign_parameters`] signs a structured parameter set (the dispatch path)
//! - [`sign_query_url`] signs a URL whose query string is already built
//!
//! Both sort parameters by key, join them as `k=v&k=v`, prefix the method,
//! host and path, then HMAC-SHA256 and base64 the result.

pub mod canonical;

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use url::Url;

use crate::errors::{MwsError, MwsResult};
use crate::types::Parameters;
use crate::utils::encoding::{escape_commas_and_colons, query_escape};
use crate::utils::time::format_timestamp;
use canonical::{canonical_query, compute_signature, string_to_sign};

pub const TIMESTAMP_KEY: &str = "Timestamp";
pub const SIGNATURE_KEY: &str = "Signature";

/// Method used by the pre-built query signer
pub const QUERY_SIGNING_METHOD: &str = "GET";

/// Signs a parameter set and returns the base64 signature.
///
/// In the string-to-sign only the `Timestamp` value is query-escaped; every
/// other value goes in verbatim. The service rebuilds the same string, so
/// this must not be normalized to the wire encoding. A missing `Timestamp`
/// is signed as an empty `Timestamp=` pair. `params` is not modified; the
/// caller stores the result under `Signature`.
pub fn sign_parameters(
    method: &str,
    host: &str,
    path: &str,
    params: &Parameters,
    secret: &str,
) -> MwsResult<String> {
    let timestamp = query_escape(params.get(TIMESTAMP_KEY).unwrap_or_default());
    let mut pairs: BTreeMap<&str, &str> = params.iter().collect();
    pairs.insert(TIMESTAMP_KEY, &timestamp);

    let query = canonical_query(pairs);
    compute_signature(secret, &string_to_sign(method, host, path, &query))
}

/// Signs a URL that already carries its query string and returns the signed
/// URL.
///
/// Only `,` and `:` are escaped before the pairs are split and re-sorted.
/// Every pair keeps its slot, so a repeated key is written once per
/// occurrence, each time with the last value given for it. A value ends at
/// its next `=`. The method is always `GET`. The result keeps the sorted
/// query and appends `Signature={escaped signature}`.
pub fn sign_query_url(url: &Url, secret: &str) -> MwsResult<String> {
    let escaped = escape_commas_and_colons(url.query().unwrap_or(""));

    let mut keys = Vec::new();
    let mut values = BTreeMap::new();
    if !escaped.is_empty() {
        for pair in escaped.split('&') {
            let (key, rest) = pair.split_once('=').ok_or_else(|| {
                MwsError::url_resolution(url.as_str(), format!("query pair without '=': {pair}"))
            })?;
            let value = rest.split_once('=').map_or(rest, |(value, _)| value);
            values.insert(key, value);
            keys.push(key);
        }
    }
    keys.sort_unstable();

    let query = canonical_query(keys.iter().map(|key| (*key, values[key])));
    let host = request_authority(url)?;
    let signature = compute_signature(
        secret,
        &string_to_sign(QUERY_SIGNING_METHOD, &host, url.path(), &query),
    )?;

    let signed_query = if query.is_empty() {
        format!("{SIGNATURE_KEY}={}", query_escape(&signature))
    } else {
        format!("{query}&{SIGNATURE_KEY}={}", query_escape(&signature))
    };

    let mut signed = url.clone();
    signed.set_query(Some(&signed_query));
    Ok(signed.to_string())
}

/// Replaces the URL's `Timestamp` with `now` and re-encodes the query,
/// keys sorted.
pub fn set_timestamp(url: &mut Url, now: DateTime<Utc>) {
    let mut params: Parameters = url.query_pairs().into_owned().collect();
    params.insert(TIMESTAMP_KEY, format_timestamp(now));
    url.set_query(Some(&params.to_form_encoded()));
}

/// Host as it appears in the string-to-sign: host name plus a non-default port.
pub fn request_authority(url: &Url) -> MwsResult<String> {
    let host = url
        .host_str()
        .ok_or_else(|| MwsError::url_resolution(url.as_str(), "URL has no host"))?;
    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
