//! XML writer
//!
//! Builds a document into a `String`. Elements left without children are
//! written self-closing. With an indent width set, child elements go on their
//! own lines; text content is never reformatted.

/// XML document writer
pub struct XmlWriter {
    out: String,
    indent: Option<usize>,
    open: Vec<OpenElement>,
    start_tag_open: bool,
}

struct OpenElement {
    name: String,
    has_children: bool,
}

impl XmlWriter {
    /// Create a writer; `indent` is the number of spaces per level
    pub fn new(indent: Option<usize>) -> Self {
        XmlWriter {
            out: String::new(),
            indent,
            open: Vec::new(),
            start_tag_open: false,
        }
    }

    /// Write `<?xml version="1.0" encoding="utf-8"?>`
    pub fn write_declaration(&mut self) {
        self.out.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        if self.indent.is_some() {
            self.out.push('\n');
        }
    }

    /// Open an element
    ///
    /// `name` must be a valid XML name.
    pub fn start_element(&mut self, name: &str) {
        self.close_start_tag();
        if let Some(parent) = self.open.last_mut() {
            parent.has_children = true;
            self.newline(self.open.len());
        }

        self.out.push('<');
        self.out.push_str(name);
        self.open.push(OpenElement {
            name: name.to_string(),
            has_children: false,
        });
        self.start_tag_open = true;
    }

    /// Add an attribute to the element just opened
    ///
    /// Ignored once the start tag has been closed by content.
    pub fn write_attribute(&mut self, name: &str, value: &str) {
        if !self.start_tag_open {
            return;
        }
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        escape_into(&mut self.out, value, true);
        self.out.push('"');
    }

    /// Write escaped text into the current element
    pub fn write_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.close_start_tag();
        escape_into(&mut self.out, text, false);
    }

    /// Write `<name>text</name>`, or `<name/>` when `text` is empty
    pub fn write_text_element(&mut self, name: &str, text: &str) {
        self.start_element(name);
        self.write_text(text);
        self.end_element_inline();
    }

    /// Write `<name/>`
    pub fn write_empty_element(&mut self, name: &str) {
        self.start_element(name);
        self.end_element_inline();
    }

    /// Close the innermost open element
    pub fn end_element(&mut self) {
        let depth = self.open.len().saturating_sub(1);
        let Some(element) = self.open.pop() else {
            return;
        };

        if self.start_tag_open {
            self.out.push_str("/>");
            self.start_tag_open = false;
            return;
        }

        if element.has_children {
            self.newline(depth);
        }
        self.push_end_tag(&element.name);
    }

    /// Finish the document, closing any open elements
    pub fn into_string(mut self) -> String {
        while !self.open.is_empty() {
            self.end_element();
        }
        if self.indent.is_some() {
            self.out.push('\n');
        }
        self.out
    }

    fn end_element_inline(&mut self) {
        let Some(element) = self.open.pop() else {
            return;
        };
        if self.start_tag_open {
            self.out.push_str("/>");
            self.start_tag_open = false;
        } else {
            self.push_end_tag(&element.name);
        }
    }

    fn push_end_tag(&mut self, name: &str) {
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }

    fn close_start_tag(&mut self) {
        if self.start_tag_open {
            self.out.push('>');
            self.start_tag_open = false;
        }
    }

    fn newline(&mut self, depth: usize) {
        if let Some(width) = self.indent {
            self.out.push('\n');
            self.out.extend(std::iter::repeat(' ').take(width * depth));
        }
    }
}

/// Escape text for element content or a double-quoted attribute
///
/// `\r` and characters outside XML's `Char` production are written as
/// character references so any `String` survives a round trip.
fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\n' | '\t' if attribute => out.push_str(&format!("&#x{:X};", c as u32)),
            '\r' => out.push_str("&#xD;"),
            c if !is_xml_char(c) => out.push_str(&format!("&#x{:X};", c as u32)),
            c => out.push(c),
        }
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}
