//! Reading and writing event files (pretty-printed JSON)

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use super::document::EventDocument;
use crate::core::error::{PisteError, Result};
use crate::entity::event::Event;

/// How to treat an existing file when saving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Refuse to replace an existing file ("save as")
    CreateNew,
    /// Truncate and replace ("save")
    Overwrite,
}

/// Parse an event from JSON text.
///
/// Integrity violations come back as [`PisteError::Validation`] with every
/// message, malformed JSON as [`PisteError::SerdeError`].
pub fn from_json(content: &str) -> Result<Event> {
    let doc: EventDocument = serde_json::from_str(content)?;
    Ok(Event::try_from(doc)?)
}

pub fn to_json(event: &Event) -> Result<String> {
    Ok(serde_json::to_string_pretty(event)?)
}

/// Load an event file
pub fn read_event(path: &Path) -> Result<Event> {
    let reader = BufReader::new(File::open(path)?);
    let doc: EventDocument = serde_json::from_reader(reader)?;
    let event = Event::try_from(doc).map_err(|errors| {
        tracing::warn!("Rejected event file {}: {}", path.display(), errors);
        PisteError::from(errors)
    })?;

    tracing::info!(
        "Read event '{}' from {} ({} competitors)",
        event.name(),
        path.display(),
        event.competitors().len()
    );
    Ok(event)
}

/// Save an event file
pub fn write_event(path: &Path, event: &Event, mode: WriteMode) -> Result<()> {
    let file = match mode {
        WriteMode::CreateNew => OpenOptions::new().write(true).create_new(true).open(path),
        WriteMode::Overwrite => File::create(path),
    }
    .map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => PisteError::AlreadyExists(path.display().to_string()),
        _ => PisteError::from(e),
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, event)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::info!("Wrote event '{}' to {}", event.name(), path.display());
    Ok(())
}
