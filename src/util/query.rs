//! Reading and rewriting single parameters of a URL query string.
//!
//! Operates on the raw `search` part of a location (with or without the
//! leading `?`) so the catalog can mirror its category facet into the URL
//! without losing unrelated parameters.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

fn pairs(search: &str) -> impl Iterator<Item = (&str, &str)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// First decoded value of `key`, if present.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    pairs(search)
        .find(|(name, _)| decode(name) == key)
        .map(|(_, value)| decode(value))
}

/// Rewrite `search` with `key` set to `value`, or removed when `value` is `None`.
///
/// Other parameters keep their order and encoding. The result has no leading `?`.
pub fn with_query_param(search: &str, key: &str, value: Option<&str>) -> String {
    let mut out: Vec<String> = pairs(search)
        .filter(|(name, _)| decode(name) != key)
        .map(|(name, raw)| if raw.is_empty() { name.to_owned() } else { format!("{name}={raw}") })
        .collect();
    if let Some(value) = value {
        out.push(format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)));
    }
    out.join("&")
}

/// `path` joined with `search`, omitting the `?` when there is no query.
pub fn href(path: &str, search: &str) -> String {
    if search.is_empty() { path.to_owned() } else { format!("{path}?{search}") }
}
