// src/formatting/html.rs
//! HTML escaping.

/// Escapes text for use between tags.
pub fn escape_text(text: &str) -> String {
    escape(text, false)
}

/// Escapes text for use inside a double- or single-quoted attribute.
pub fn escape_attr(text: &str) -> String {
    escape(text, true)
}

fn escape(text: &str, quotes: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' if quotes => out.push_str("&quot;"),
            '\'' if quotes => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text_leaves_quotes() {
        assert_eq!(escape_text(r#"<b>"Tom" & 'Jerry'</b>"#), r#"&lt;b&gt;"Tom" &amp; 'Jerry'&lt;/b&gt;"#);
    }

    #[test]
    fn test_escape_attr_escapes_quotes() {
        assert_eq!(
            escape_attr(r#"x" onload='y'"#),
            "x&quot; onload=&#39;y&#39;"
        );
    }

    #[test]
    fn test_non_ascii_untouched() {
        assert_eq!(escape_text("café ❌"), "café ❌");
    }
}
