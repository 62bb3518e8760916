/// Escape text for use in HTML element content or a quoted attribute value
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("Zażółć gęślą jaźń 42"), "Zażółć gęślą jaźń 42");
    }

    #[test]
    fn test_markup_is_neutralized() {
        assert_eq!(
            escape_html(r#"<td class="x">Tom & 'Jerry'</td>"#),
            "&lt;td class=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/td&gt;"
        );
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }
}
