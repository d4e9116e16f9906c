//! Query-string parameter extraction.

use regex::Regex;

/// Value of the `name` parameter in a location search string.
///
/// Matches `[?&]name=value` where the value runs up to the next `&` or `#`.
/// `+` decodes to a space and percent-escapes are decoded; a value with a
/// malformed escape is returned with only the `+` substitution applied.
/// Returns an empty string when the parameter is absent.
pub fn parameter_by_name(search: &str, name: &str) -> String {
    let pattern = format!(r"[?&]{}=([^&#]*)", regex::escape(name));
    let Ok(regex) = Regex::new(&pattern) else {
        return String::new();
    };

    let Some(raw) = regex
        .captures(search)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace('+', " "))
    else {
        return String::new();
    };

    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

/// First non-empty value of `name` across an ordered list of search strings.
///
/// `contexts` is the current document first, then each enclosing frame
/// outwards. At most `max_ancestors` contexts beyond the first are consulted.
pub fn find_in_contexts<S: AsRef<str>>(
    contexts: &[S],
    name: &str,
    max_ancestors: usize,
) -> Option<String> {
    contexts
        .iter()
        .take(max_ancestors.saturating_add(1))
        .map(|search| parameter_by_name(search.as_ref(), name))
        .find(|value| !value.is_empty())
}
