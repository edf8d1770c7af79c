//! Query string helpers shared by the endpoint builders and the router.

use url::form_urlencoded;

/// Form-urlencodes `pairs` in the given order (space becomes `+`).
pub fn encode_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        ser.append_pair(k, v);
    }
    ser.finish()
}

/// Decodes a query string (no leading `?`) into ordered key/value pairs.
/// Pairs with a blank key or value are dropped.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .filter(|(k, v)| !k.is_empty() && !v.is_empty())
        .collect()
}

/// Joins `base` and an encoded query with `?`, or `&` when `base` already has one.
pub fn with_query(base: &str, query: &str) -> String {
    if query.is_empty() {
        return base.to_string();
    }
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}{query}")
}

/// Replaces the value of every `key` parameter so URLs can be logged.
pub fn redact_key(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let redacted: Vec<&str> = query
        .split('&')
        .map(|pair| if pair.starts_with("key=") { "key=REDACTED" } else { pair })
        .collect();
    format!("{}?{}", base, redacted.join("&"))
}
