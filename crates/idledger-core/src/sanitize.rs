//! Text escaping helpers.
//!
//! Two distinct concerns live here and must not be conflated:
//!
//! * [`escape_html`] is output encoding. It is applied when a stored value
//!   is echoed back into a serialized response, so markup characters in
//!   user-supplied text can never be replayed into a rendered surface.
//! * [`escape_like`] is query-literal escaping. It is applied to substring
//!   filters before they are embedded in a `LIKE`/`ILIKE` pattern, so the
//!   SQL wildcards `%` and `_` match literally. The pattern itself still
//!   travels to the database as a bind parameter.

use std::borrow::Cow;

/// HTML-escape all markup-significant characters.
///
/// Returns the input unchanged (borrowed) when it contains no markup
/// characters, which is the common case for identifier values. Never
/// panics; the empty string maps to itself.
pub fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }

    let mut escaped = String::with_capacity(raw.len() + 8);
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Escape a user substring for literal use inside a `LIKE`/`ILIKE`
/// pattern with the default `\` escape character.
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' | '%' | '_' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}
