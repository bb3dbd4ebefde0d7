//! XML decoding for problem records
//!
//! A single forward pass over the root's children:
//!
//! - childless root: every field absent, no extensions
//! - child named like a well-known field: parsed into the typed field
//! - any other child: text stored as an extension, sentinel name as `""`
//!
//! Repeated names are applied in document order, so the last one wins.
//! Unknown or repeated elements are never errors; a malformed `status` is.

use super::error::{DecodeError, XmlError};
use super::name::decode_key;
use super::options::CheckedOptions;
use super::reader::{XmlEvent, XmlReader};
use problemdoc_core::{ExtensionValue, ProblemRecord, WellKnownField};
use tracing::{debug, trace};

/// Decode an XML document string to a record
pub fn decode_problem(
    document: &str,
    options: &CheckedOptions,
) -> Result<ProblemRecord, DecodeError> {
    let mut reader = XmlReader::new(document);
    let record = read_problem(&mut reader, options)?;
    reader.finish()?;
    Ok(record)
}

/// Decode XML document bytes to a record
///
/// The bytes must be UTF-8.
pub fn decode_problem_bytes(
    document: &[u8],
    options: &CheckedOptions,
) -> Result<ProblemRecord, DecodeError> {
    let text = std::str::from_utf8(document).map_err(|e| XmlError::InvalidUtf8 {
        offset: e.valid_up_to(),
    })?;
    decode_problem(text, options)
}

/// Read one problem element from `reader`
///
/// Consumes the root start tag through its end tag.
pub fn read_problem(
    reader: &mut XmlReader<'_>,
    options: &CheckedOptions,
) -> Result<ProblemRecord, DecodeError> {
    let root = reader.read_root()?;
    if options.require_root_name && root.local_name() != options.root_name {
        return Err(DecodeError::UnexpectedRoot {
            expected: options.root_name.clone(),
            found: root.local_name().to_string(),
        });
    }

    let mut record = ProblemRecord::new();
    if root.is_empty() {
        return Ok(record);
    }

    loop {
        match reader.next_event()? {
            XmlEvent::Start(child) => {
                let text = reader.read_element_text(child)?;
                let key = decode_key(child.local_name(), &options.empty_key_sentinel);
                apply_child(&mut record, key, text)?;
            }
            XmlEvent::Text(text) => {
                if !text.trim().is_empty() {
                    debug!(len = text.len(), "Ignoring text directly under the root element");
                }
            }
            XmlEvent::End(_) => return Ok(record),
            XmlEvent::Eof => {
                return Err(XmlError::UnexpectedEnd {
                    offset: reader.position(),
                }
                .into())
            }
        }
    }
}

fn apply_child(record: &mut ProblemRecord, key: String, text: String) -> Result<(), DecodeError> {
    match WellKnownField::lookup(&key) {
        Some(field) => {
            if field.is_present(record) {
                debug!(field = field.name(), "Repeated well-known field, last value wins");
            }
            trace!(field = field.name(), "Decoded well-known field");
            field.apply(record, text)?;
        }
        None => {
            trace!(key = %key, "Decoded extension");
            record.extensions.insert(key, ExtensionValue::Text(text))?;
        }
    }
    Ok(())
}
