//! HTML fragment output for the campus web front end.
//!
//! Fragments are bare elements (`<p>`, `<ol>`, `<input>`), meant to be
//! dropped into an existing page. Every piece of interpolated text goes
//! through [`HtmlOutput::escape`].

/// HTML fragment builder
pub struct HtmlOutput;

impl HtmlOutput {
    /// Escape text for use in element content or a quoted attribute
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    /// `<p>` with escaped text
    pub fn paragraph(text: &str) -> String {
        format!("<p>{}</p>", Self::escape(text))
    }

    /// `<ol>` with one escaped `<li>` per item
    pub fn ordered_list<S: AsRef<str>>(items: &[S]) -> String {
        let mut html = String::from("<ol>");
        for item in items {
            html.push_str("<li>");
            html.push_str(&Self::escape(item.as_ref()));
            html.push_str("</li>");
        }
        html.push_str("</ol>");
        html
    }

    /// Single-line text input
    pub fn text_input(id: &str, placeholder: &str) -> String {
        format!(
            "<input type='text' id='{}' placeholder='{}'>",
            Self::escape(id),
            Self::escape(placeholder)
        )
    }

    pub fn button(id: &str, label: &str) -> String {
        format!(
            "<button id='{}'>{}</button>",
            Self::escape(id),
            Self::escape(label)
        )
    }

    /// `<pre>` block for content without a dedicated fragment
    pub fn preformatted(text: &str) -> String {
        format!("<pre>{}</pre>", Self::escape(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            HtmlOutput::escape(r#"<b>"A&B's"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(HtmlOutput::escape("Union South"), "Union South");
    }

    #[test]
    fn test_paragraph() {
        assert_eq!(
            HtmlOutput::paragraph("Total travel time: 289.0 seconds"),
            "<p>Total travel time: 289.0 seconds</p>"
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            HtmlOutput::ordered_list(&["Union South", "<script>"]),
            "<ol><li>Union South</li><li>&lt;script&gt;</li></ol>"
        );
        assert_eq!(HtmlOutput::ordered_list::<&str>(&[]), "<ol></ol>");
    }

    #[test]
    fn test_form_controls() {
        assert_eq!(
            HtmlOutput::text_input("start", "Enter the starting location:"),
            "<input type='text' id='start' placeholder='Enter the starting location:'>"
        );
        assert_eq!(
            HtmlOutput::button("findShortest", "Find Shortest Path"),
            "<button id='findShortest'>Find Shortest Path</button>"
        );
    }
}
