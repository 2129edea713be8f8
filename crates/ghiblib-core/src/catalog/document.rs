//! JSON document persistence for a [`Catalog`].
//!
//! The document is a top-level array of film objects. Import parses the whole
//! document before touching the catalog, so a failed import leaves the
//! existing collection as it was.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::Catalog;
use crate::error::{Error, Result};
use crate::model::Work;

const INDENT: &[u8] = b"    ";

impl Catalog {
    /// Write every film to `path` as a pretty-printed JSON array.
    pub fn export_to_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        // Writes past the buffer happen mid-serialization.
        self.serialize_into(&mut writer).map_err(|e| {
            if e.is_io() {
                io_error(e.into())
            } else {
                Error::Serialization(e)
            }
        })?;
        writer.flush().map_err(io_error)?;

        log::info!("Exported {} films to {}", self.len(), path.display());
        Ok(())
    }

    /// Replace the catalog with the films stored at `path`.
    ///
    /// Returns the number of films loaded.
    pub fn import_from_json(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let works = read_document(path).inspect_err(|e| {
            log::warn!("Import from {} failed: {}", path.display(), e);
        })?;

        self.works = works;
        log::info!("Imported {} films from {}", self.len(), path.display());
        Ok(self.len())
    }

    /// Serialize the catalog document into any writer.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        self.serialize_into(writer)?;
        Ok(())
    }

    fn serialize_into<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
        self.works.serialize(&mut serializer)
    }
}

fn read_document(path: &Path) -> Result<Vec<Work>> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound(path.to_path_buf())
        } else {
            Error::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&contents).map_err(|source| Error::MalformedDocument {
        path: path.to_path_buf(),
        source,
    })
}
