//! Pull reader over an XML document
//!
//! A small, non-validating reader that covers what the codec consumes:
//! start/end element events, local names, the childless (`<a/>`) flag and
//! inner text. The whole document is held in memory.
//!
//! Supported: the XML declaration, comments, processing instructions,
//! CDATA sections, attributes (checked, then ignored), the five predefined
//! entities and character references. DOCTYPE declarations are rejected.

use super::error::XmlError;
use super::name::{is_name_char, is_name_start_char};

/// A reader event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent<'a> {
    /// Start tag, or a childless element
    Start(StartTag<'a>),

    /// End tag with its qualified name
    End(&'a str),

    /// Character data, unescaped
    Text(String),

    /// End of the document
    Eof,
}

/// A start tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartTag<'a> {
    name: &'a str,
    empty: bool,
}

impl<'a> StartTag<'a> {
    /// Qualified name as written
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Name without its namespace prefix
    pub fn local_name(&self) -> &'a str {
        match self.name.rfind(':') {
            Some(i) => &self.name[i + 1..],
            None => self.name,
        }
    }

    /// Check if the element was written childless (`<a/>`)
    pub fn is_empty(&self) -> bool {
        self.empty
    }
}

/// XML pull reader
pub struct XmlReader<'a> {
    input: &'a str,
    pos: usize,
    open: Vec<&'a str>,
    root_closed: bool,
}

impl<'a> XmlReader<'a> {
    /// Create a reader; a leading byte order mark is skipped
    pub fn new(input: &'a str) -> Self {
        let pos = if input.starts_with('\u{FEFF}') {
            '\u{FEFF}'.len_utf8()
        } else {
            0
        };

        XmlReader {
            input,
            pos,
            open: Vec::new(),
            root_closed: false,
        }
    }

    /// Current byte offset
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of open elements
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Skip the prolog and return the root start tag
    pub fn read_root(&mut self) -> Result<StartTag<'a>, XmlError> {
        loop {
            match self.next_event()? {
                XmlEvent::Start(tag) => return Ok(tag),
                XmlEvent::Eof => return Err(XmlError::MissingRoot),
                // Top-level text and end tags are rejected by next_event
                XmlEvent::Text(_) | XmlEvent::End(_) => continue,
            }
        }
    }

    /// Read the next event
    ///
    /// Comments and processing instructions are skipped. Whitespace between
    /// top-level constructs is skipped; any other top-level text is an error.
    pub fn next_event(&mut self) -> Result<XmlEvent<'a>, XmlError> {
        loop {
            if self.pos >= self.input.len() {
                if self.open.is_empty() {
                    return Ok(XmlEvent::Eof);
                }
                return Err(XmlError::UnexpectedEnd { offset: self.pos });
            }

            let start = self.pos;

            if self.starts_with("<!--") {
                self.pos += 4;
                self.skip_past("-->")?;
                continue;
            }
            if self.starts_with("<?") {
                self.pos += 2;
                self.skip_past("?>")?;
                continue;
            }
            if self.starts_with("<![CDATA[") {
                if self.open.is_empty() {
                    return Err(self.top_level_error('<', start));
                }
                self.pos += 9;
                let data = self.skip_past("]]>")?;
                return Ok(XmlEvent::Text(data.to_string()));
            }
            if self.starts_with("<!DOCTYPE") {
                return Err(XmlError::UnsupportedDoctype { offset: start });
            }
            if self.starts_with("<!") {
                return Err(XmlError::UnexpectedChar {
                    ch: '!',
                    offset: start + 1,
                });
            }
            if self.starts_with("</") {
                return self.read_end_tag();
            }
            if self.starts_with("<") {
                return self.read_start_tag();
            }

            let text = self.read_text()?;
            if !self.open.is_empty() {
                return Ok(XmlEvent::Text(text));
            }
            if let Some(ch) = text.chars().find(|c| !is_xml_whitespace(*c)) {
                return Err(self.top_level_error(ch, start));
            }
        }
    }

    /// Read the content of the element whose start tag was just returned
    ///
    /// Text-only content comes back unescaped. Content with child elements
    /// comes back as the raw inner markup. Consumes the matching end tag.
    pub fn read_element_text(&mut self, tag: StartTag<'a>) -> Result<String, XmlError> {
        if tag.is_empty() {
            return Ok(String::new());
        }

        let content_start = self.pos;
        let mut text = String::new();
        let mut nested = false;
        let mut depth = 0usize;

        loop {
            let before = self.pos;
            match self.next_event()? {
                XmlEvent::Text(t) => text.push_str(&t),
                XmlEvent::Start(child) => {
                    nested = true;
                    if !child.is_empty() {
                        depth += 1;
                    }
                }
                XmlEvent::End(_) if depth > 0 => depth -= 1,
                XmlEvent::End(_) => {
                    let input = self.input;
                    return Ok(if nested {
                        input[content_start..before].to_string()
                    } else {
                        text
                    });
                }
                XmlEvent::Eof => return Err(XmlError::UnexpectedEnd { offset: self.pos }),
            }
        }
    }

    /// Check that nothing but comments, PIs and whitespace follows the root
    pub fn finish(&mut self) -> Result<(), XmlError> {
        let offset = self.pos;
        match self.next_event()? {
            XmlEvent::Eof => Ok(()),
            _ => Err(XmlError::TrailingContent { offset }),
        }
    }

    // ========================================================================
    // Tags
    // ========================================================================

    fn read_start_tag(&mut self) -> Result<XmlEvent<'a>, XmlError> {
        let start = self.pos;
        if self.root_closed && self.open.is_empty() {
            return Err(XmlError::TrailingContent { offset: start });
        }

        self.advance(); // consume '<'
        let name = self.read_name()?;

        loop {
            let before_space = self.pos;
            self.skip_whitespace();

            match self.peek() {
                Some('>') => {
                    self.advance();
                    self.open.push(name);
                    return Ok(XmlEvent::Start(StartTag { name, empty: false }));
                }
                Some('/') => {
                    self.advance();
                    self.expect('>')?;
                    if self.open.is_empty() {
                        self.root_closed = true;
                    }
                    return Ok(XmlEvent::Start(StartTag { name, empty: true }));
                }
                Some(c) if self.pos == before_space => {
                    return Err(XmlError::UnexpectedChar {
                        ch: c,
                        offset: self.pos,
                    })
                }
                Some(_) => self.read_attribute()?,
                None => return Err(XmlError::UnexpectedEnd { offset: self.pos }),
            }
        }
    }

    fn read_end_tag(&mut self) -> Result<XmlEvent<'a>, XmlError> {
        let start = self.pos;
        self.pos += 2; // consume '</'
        let name = self.read_name()?;
        self.skip_whitespace();
        self.expect('>')?;

        match self.open.pop() {
            Some(expected) if expected == name => {
                if self.open.is_empty() {
                    self.root_closed = true;
                }
                Ok(XmlEvent::End(name))
            }
            Some(expected) => Err(XmlError::MismatchedTag {
                expected: expected.to_string(),
                found: name.to_string(),
                offset: start,
            }),
            None => Err(self.top_level_error('<', start)),
        }
    }

    /// Attribute values are checked for well-formedness and discarded
    fn read_attribute(&mut self) -> Result<(), XmlError> {
        self.read_name()?;
        self.skip_whitespace();
        self.expect('=')?;
        self.skip_whitespace();

        let quote = match self.peek() {
            Some(q @ ('"' | '\'')) => q,
            Some(c) => {
                return Err(XmlError::UnexpectedChar {
                    ch: c,
                    offset: self.pos,
                })
            }
            None => return Err(XmlError::UnexpectedEnd { offset: self.pos }),
        };
        self.advance();

        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    self.advance();
                    return Ok(());
                }
                Some('<') => {
                    return Err(XmlError::UnexpectedChar {
                        ch: '<',
                        offset: self.pos,
                    })
                }
                Some('&') => {
                    self.read_reference()?;
                }
                Some(_) => self.advance(),
                None => return Err(XmlError::UnexpectedEnd { offset: self.pos }),
            }
        }
    }

    fn read_name(&mut self) -> Result<&'a str, XmlError> {
        let start = self.pos;
        match self.peek() {
            Some(c) if is_name_start_char(c) => self.advance(),
            Some(c) => return Err(XmlError::UnexpectedChar { ch: c, offset: start }),
            None => return Err(XmlError::UnexpectedEnd { offset: start }),
        }

        while let Some(c) = self.peek() {
            if is_name_char(c) {
                self.advance();
            } else {
                break;
            }
        }

        let input = self.input;
        Ok(&input[start..self.pos])
    }

    // ========================================================================
    // Character data
    // ========================================================================

    fn read_text(&mut self) -> Result<String, XmlError> {
        let mut text = String::new();

        while let Some(c) = self.peek() {
            match c {
                '<' => break,
                '&' => text.push(self.read_reference()?),
                '\r' => {
                    // Line ends normalize to \n
                    self.advance();
                    if self.peek() == Some('\n') {
                        self.advance();
                    }
                    text.push('\n');
                }
                c => {
                    text.push(c);
                    self.advance();
                }
            }
        }

        Ok(text)
    }

    fn read_reference(&mut self) -> Result<char, XmlError> {
        let start = self.pos;
        self.advance(); // consume '&'

        let name_start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '#' {
                self.advance();
            } else {
                break;
            }
        }
        let input = self.input;
        let name = &input[name_start..self.pos];
        self.expect(';')?;

        if let Some(reference) = name.strip_prefix('#') {
            let code = match reference.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16),
                None => reference.parse::<u32>(),
            };
            return code
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| XmlError::InvalidCharRef {
                    reference: reference.to_string(),
                    offset: start,
                });
        }

        match name {
            "lt" => Ok('<'),
            "gt" => Ok('>'),
            "amp" => Ok('&'),
            "quot" => Ok('"'),
            "apos" => Ok('\''),
            _ => Err(XmlError::UnknownEntity {
                name: name.to_string(),
                offset: start,
            }),
        }
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn starts_with(&self, s: &str) -> bool {
        self.input[self.pos..].starts_with(s)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if is_xml_whitespace(c) {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), XmlError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            Some(c) => Err(XmlError::UnexpectedChar {
                ch: c,
                offset: self.pos,
            }),
            None => Err(XmlError::UnexpectedEnd { offset: self.pos }),
        }
    }

    /// Advance past `terminator`, returning the text before it
    fn skip_past(&mut self, terminator: &str) -> Result<&'a str, XmlError> {
        let input = self.input;
        match input[self.pos..].find(terminator) {
            Some(i) => {
                let content = &input[self.pos..self.pos + i];
                self.pos += i + terminator.len();
                Ok(content)
            }
            None => Err(XmlError::UnexpectedEnd {
                offset: input.len(),
            }),
        }
    }

    fn top_level_error(&self, ch: char, offset: usize) -> XmlError {
        if self.root_closed {
            XmlError::TrailingContent { offset }
        } else {
            XmlError::UnexpectedChar { ch, offset }
        }
    }
}

fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
