//! Query-string escaping used on the wire and in the string-to-sign

use std::borrow::Cow;

/// Query escaping for a single key or value.
///
/// Unreserved characters (`A-Z a-z 0-9 - _ . ~`) pass through, a space
/// becomes `+`, every other byte is written as uppercase `%XX`.
pub fn query_escape(value: &str) -> String {
    let encoded = urlencoding::encode(value);
    if encoded.contains("%20") {
        encoded.replace("%20", "+")
    } else {
        encoded.into_owned()
    }
}

/// Form-encodes pairs as `k=v&k=v`, escaping keys and values.
///
/// Pairs are written in iteration order; callers pass an ordered map to get
/// the key-sorted output the service expects.
pub fn form_encode<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", query_escape(k), query_escape(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Escaping applied by the legacy query signer: only `,` and `:` are touched.
pub fn escape_commas_and_colons(raw_query: &str) -> Cow<'_, str> {
    if raw_query.contains([',', ':']) {
        Cow::Owned(raw_query.replace(',', "%2C").replace(':', "%3A"))
    } else {
        Cow::Borrowed(raw_query)
    }
}
