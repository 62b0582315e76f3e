//! JSON sink for the report
//!
//! The output file is only replaced once the whole document has been
//! rendered; a failed run leaves any previous file untouched. Output is
//! pure ASCII: anything outside printable ASCII in a string is written as a
//! `\uXXXX` escape, surrogate pairs above the BMP.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use tempfile::NamedTempFile;
use tracing::debug;

use super::model::Report;
use crate::errors::{IntentionsError, Result};
use crate::shared::constants::report::INDENT;

/// Pretty formatter that escapes every non-printable-ASCII character
struct AsciiPrettyFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiPrettyFormatter<'_> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if matches!(ch, ' '..='~') {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.0.end_object_value(writer)
    }
}

/// Render the report as pretty-printed JSON (four-space indent, trailing newline)
pub fn render_report(report: &Report) -> Result<String> {
    let mut buffer = Vec::new();
    write_report(report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| {
        IntentionsError::Serialization(serde_json::Error::io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e,
        )))
    })
}

/// Write the report into any writer
pub fn write_report<W: Write>(report: &Report, mut writer: W) -> Result<()> {
    {
        let formatter = AsciiPrettyFormatter(PrettyFormatter::with_indent(INDENT));
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        report.serialize(&mut serializer)?;
    }
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    writer.flush().map_err(serde_json::Error::io)?;
    Ok(())
}

/// Atomically write the report to `path`, creating parent directories
pub fn write_report_file(report: &Report, path: &Path) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(directory).map_err(|e| IntentionsError::io(directory, e))?;

    let mut staged = NamedTempFile::new_in(directory).map_err(|e| IntentionsError::io(directory, e))?;
    write_report(report, staged.as_file_mut())?;
    staged
        .persist(path)
        .map_err(|e| IntentionsError::io(path, e.error))?;

    debug!("report written to {}", path.display());
    Ok(())
}
