//! Encoding of the form body posted to the response endpoint.
//!
//! Stack traces and logcat dumps are multi-line and full of `:`, `=` and
//! `/`, so every value goes through the same escaping as a browser posting
//! the form would apply.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Bytes escaped in entry keys and report values, space aside.
///
/// `'` is included so the text marker on quoted entries arrives as `%27`,
/// e.g. `entry.0.single=%2742`. Line breaks in stack traces fall under
/// `CONTROLS`.
pub(super) const FORM_ENCODE_SET_NO_SPACE: &AsciiSet = &CONTROLS
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'\'');

/// Encode one key or value, writing spaces as `+`.
pub(super) fn url_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut first = true;
    for chunk in s.split(' ') {
        if !first {
            result.push('+');
        }
        first = false;
        result.extend(utf8_percent_encode(chunk, FORM_ENCODE_SET_NO_SPACE));
    }
    result
}

/// Join `pairs` into a form body, encoding each key and value.
pub(super) fn encode_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut body = String::new();
    for (key, value) in pairs {
        if !body.is_empty() {
            body.push('&');
        }
        body.push_str(&url_encode(key.as_ref()));
        body.push('=');
        body.push_str(&url_encode(value.as_ref()));
    }
    body
}
