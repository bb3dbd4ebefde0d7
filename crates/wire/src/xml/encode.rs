//! XML encoding for problem records
//!
//! Writes present well-known fields in table order, then every extension in
//! insertion order. Encoding is total: any record produces a document.

use super::name::encode_key;
use super::options::CheckedOptions;
use super::writer::XmlWriter;
use problemdoc_core::{ProblemRecord, WELL_KNOWN_FIELDS};

/// Encode a record to an XML document string
pub fn encode_problem(record: &ProblemRecord, options: &CheckedOptions) -> String {
    let mut writer = XmlWriter::new(options.indent);
    if options.xml_declaration {
        writer.write_declaration();
    }
    write_problem(&mut writer, record, options);
    writer.into_string()
}

/// Write a record as one root element
pub fn write_problem(writer: &mut XmlWriter, record: &ProblemRecord, options: &CheckedOptions) {
    writer.start_element(&options.root_name);
    if let Some(namespace) = &options.namespace {
        writer.write_attribute("xmlns", namespace);
    }

    for field in WELL_KNOWN_FIELDS.iter() {
        if let Some(text) = field.format(record) {
            writer.write_text_element(field.name(), &text);
        }
    }

    for (key, value) in record.extensions.iter() {
        let name = encode_key(key, &options.empty_key_sentinel);
        match value.to_wire_text() {
            Some(text) => writer.write_text_element(&name, &text),
            None => writer.write_empty_element(&name),
        }
    }

    writer.end_element();
}
