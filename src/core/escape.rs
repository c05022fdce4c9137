//! Context-specific escaping applied at every interpolation site of the
//! generated document.

use std::borrow::Cow;

fn escape_with(text: &str, replace: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    let Some(first) = text.find(|c| replace(c).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    for ch in text[first..].chars() {
        match replace(ch) {
            Some(entity) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Escape text placed in element content (`&`, `<`, `>`, `"`, `'`).
pub fn escape_html(text: &str) -> Cow<'_, str> {
    escape_with(text, |ch| match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    })
}

/// Escape text placed inside a double-quoted attribute value such as `href` or `src`.
///
/// Covers both quote characters and the markup characters, plus the backtick.
pub fn escape_attribute(text: &str) -> Cow<'_, str> {
    escape_with(text, |ch| match ch {
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '`' => Some("&#96;"),
        _ => None,
    })
}

/// Theme colours are opaque, but `<` must never reach a `<style>` element raw.
pub fn escape_css_value(text: &str) -> Cow<'_, str> {
    escape_with(text, |ch| match ch {
        '<' => Some("\\3c "),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_html("Ada Lovelace"), Cow::Borrowed(_)));
        assert!(matches!(escape_attribute("https://example.com/a?b=c"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_attribute_quotes() {
        assert_eq!(
            escape_attribute(r#"x" onmouseover="alert(1)"#),
            "x&quot; onmouseover=&quot;alert(1)"
        );
        assert_eq!(escape_attribute("it's `here`"), "it&#39;s &#96;here&#96;");
    }

    #[test]
    fn test_escape_attribute_keeps_data_uris_intact() {
        let uri = "data:image/png;base64,iVBORw0KGgo+/=";
        assert_eq!(escape_attribute(uri), uri);
    }

    #[test]
    fn test_escape_css_value() {
        assert_eq!(escape_css_value("#ff0000"), "#ff0000");
        assert_eq!(escape_css_value("red</style><script>"), "red\\3c /style>\\3c script>");
    }

    #[test]
    fn test_multibyte_text_survives() {
        assert_eq!(escape_html("Zoë <é>"), "Zoë &lt;é&gt;");
    }
}
