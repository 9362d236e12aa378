//! Minimal HTML element builder

/// Elements that never take a closing tag
const VOID_ELEMENTS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

/// An element under construction
#[derive(Debug, Clone, Default)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    content: String,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Add an attribute; the value is escaped
    pub fn attr(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
        self.attrs.push((name, Some(escape(value.as_ref()))));
        self
    }

    /// Add a boolean attribute (e.g. `checked`) when `on` is set
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.push((name, None));
        }
        self
    }

    pub fn class(self, classes: &str) -> Self {
        self.attr("class", classes)
    }

    /// Append already-rendered markup
    pub fn child(mut self, markup: impl AsRef<str>) -> Self {
        self.content.push_str(markup.as_ref());
        self
    }

    /// Append escaped text
    pub fn text(mut self, text: &str) -> Self {
        self.content.push_str(&escape(text));
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(16 + self.content.len());
        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(value);
                out.push('"');
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.name) {
            return out;
        }

        out.push_str(&self.content);
        out.push_str("</");
        out.push_str(self.name);
        out.push('>');
        out
    }
}

/// Escape text for use in HTML content and quoted attribute values
pub fn escape(input: &str) -> String {
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
    fn test_nested_elements() {
        let html = Element::new("div")
            .class("card")
            .child(Element::new("span").text("Axis Bank").render())
            .render();
        assert_eq!(html, r#"<div class="card"><span>Axis Bank</span></div>"#);
    }

    #[test]
    fn test_void_element_and_flags() {
        let checked = Element::new("input")
            .attr("type", "checkbox")
            .flag("checked", true)
            .render();
        assert_eq!(checked, r#"<input type="checkbox" checked>"#);

        let unchecked = Element::new("input").flag("checked", false).render();
        assert_eq!(unchecked, "<input>");
    }

    #[test]
    fn test_escaping() {
        let html = Element::new("span")
            .attr("title", r#"say "hi""#)
            .text("Fish & <Chips>")
            .render();
        assert_eq!(
            html,
            r#"<span title="say &quot;hi&quot;">Fish &amp; &lt;Chips&gt;</span>"#
        );
    }
}
