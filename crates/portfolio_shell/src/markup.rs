//! Small HTML helpers for log markup.

/// Escapes user-typed text before it is embedded in markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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

/// Wraps trusted text in the dimmed comment style.
pub fn comment(text: &str) -> String {
    format!(r#"<span class="comment">{text}</span>"#)
}

/// Turns newline-separated plain text into `<br>`-separated markup.
pub fn line_breaks(text: &str) -> String {
    text.split('\n').collect::<Vec<_>>().join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b onclick="x">&'"#),
            "&lt;b onclick=&quot;x&quot;&gt;&amp;&#39;"
        );
        assert_eq!(escape_html("frobnicate"), "frobnicate");
    }

    #[test]
    fn line_breaks_join_with_br() {
        assert_eq!(line_breaks("a\nb"), "a<br>b");
        assert_eq!(line_breaks("single"), "single");
    }
}
