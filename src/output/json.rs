//! JSON dictionary sink
//!
//! The dictionary is written as one pretty-printed object mapping each
//! headword to `{"parts_of_speech": [...], "definition": "..."}`.

use crate::dictionary::Dictionary;
use crate::PersistError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Indentation of the written document
const INDENT: &[u8] = b"    ";

/// Formats a dictionary as indented JSON
pub fn format_dictionary(dictionary: &Dictionary) -> Result<String, PersistError> {
    let mut buffer = Vec::new();
    write_json(dictionary, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| {
        PersistError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Writes the dictionary to `output_path`, creating parent directories
///
/// # Errors
///
/// Any failure is returned as a `PersistError`; callers treat it as fatal,
/// since the dictionary only exists in memory until this succeeds.
pub fn write_dictionary(dictionary: &Dictionary, output_path: &Path) -> Result<(), PersistError> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(output_path)?);
    write_json(dictionary, &mut writer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::info!(
        "Wrote {} entries to {}",
        dictionary.len(),
        output_path.display()
    );
    Ok(())
}

/// Reads a dictionary previously written by [`write_dictionary`]
pub fn load_dictionary(path: &Path) -> Result<Dictionary, PersistError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(PersistError::Deserialize)
}

fn write_json<W: Write>(dictionary: &Dictionary, writer: W) -> Result<(), PersistError> {
    let mut serializer =
        serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    dictionary
        .serialize(&mut serializer)
        .map_err(PersistError::Serialize)
}
