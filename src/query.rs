//! Pocket query documents and queries over their caches
//!
//! A pocket query is the GPX export produced by the geocaching site for a
//! saved search. Loading one materializes the full document in memory and
//! builds the cache collection; queries over it never touch the file again.

use crate::cache::Cache;
use crate::error::{PocketQueryError, Result};
use crate::xml::{required_child_text, GPX_NS};
use log::debug;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Maximum accepted document size in bytes
///
/// Pocket query exports top out at a few megabytes; anything near this limit
/// is not a pocket query.
pub const MAX_DOCUMENT_SIZE: u64 = 64 * 1024 * 1024;

/// One parsed pocket query document
///
/// Constructed with the geocaching account name whose finds [`my_finds`]
/// filters for, then loaded from a file path or an in-memory buffer.
/// Each instance owns its cache collection exclusively; a reload replaces
/// the collection, and a failed load leaves previously loaded data intact.
///
/// [`my_finds`]: PocketQuery::my_finds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PocketQuery {
    owner_name: String,
    exported_on: Option<String>,
    caches: Vec<Cache>,
}

impl PocketQuery {
    /// Create an empty, unloaded pocket query
    ///
    /// # Errors
    ///
    /// Returns `PocketQueryError::Config` if the owner name is empty.
    pub fn new(owner_name: impl Into<String>) -> Result<Self> {
        let owner_name = owner_name.into();
        if owner_name.is_empty() {
            return Err(PocketQueryError::Config(
                "query owner name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            owner_name,
            exported_on: None,
            caches: Vec::new(),
        })
    }

    /// Load and parse a pocket query GPX file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path does not reference an existing regular file
    ///   (`PocketQueryError::NotFound`)
    /// - The file exceeds [`MAX_DOCUMENT_SIZE`] (`PocketQueryError::TooLarge`)
    /// - The file cannot be read (`PocketQueryError::Io`)
    /// - The content fails to parse (see [`PocketQuery::load_from_bytes`])
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PocketQueryError::NotFound(path.to_path_buf()));
        }

        let size = fs::metadata(path)?.len();
        if size > MAX_DOCUMENT_SIZE {
            return Err(PocketQueryError::TooLarge {
                size,
                limit: MAX_DOCUMENT_SIZE,
            });
        }

        let content = fs::read_to_string(path)?;
        self.parse_document(&content)
    }

    /// Load and parse a pocket query from an in-memory byte buffer
    ///
    /// Takes raw bytes rather than a string so the XML declaration's encoding
    /// attribute cannot silently disagree with a host-decoded string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The buffer exceeds [`MAX_DOCUMENT_SIZE`] (`PocketQueryError::TooLarge`)
    /// - The buffer is not valid UTF-8 (`PocketQueryError::Encoding`)
    /// - The content is not well-formed XML (`PocketQueryError::Xml`)
    /// - The document lacks the root `<time>` element, or any waypoint lacks
    ///   a required field (`PocketQueryError::MissingElement` and friends)
    pub fn load_from_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let size = bytes.len() as u64;
        if size > MAX_DOCUMENT_SIZE {
            return Err(PocketQueryError::TooLarge {
                size,
                limit: MAX_DOCUMENT_SIZE,
            });
        }

        let content = std::str::from_utf8(bytes)?;
        self.parse_document(content)
    }

    /// Shared parse routine behind both load entry points
    ///
    /// Builds the new collection off to the side and commits it only on full
    /// success; any per-cache error aborts the whole load.
    fn parse_document(&mut self, content: &str) -> Result<()> {
        let doc = roxmltree::Document::parse(content)?;
        let root = doc.root_element();

        let exported_on = required_child_text(root, GPX_NS, "time")?;

        let mut caches = Vec::new();
        for waypoint in root
            .children()
            .filter(|n| n.is_element() && n.has_tag_name((GPX_NS, "wpt")))
        {
            caches.push(Cache::from_node(waypoint)?);
        }

        debug!(
            "loaded pocket query exported on {exported_on} with {} caches",
            caches.len()
        );

        self.exported_on = Some(exported_on);
        self.caches = caches;
        Ok(())
    }

    /// All caches in document order
    pub fn all_caches(&self) -> &[Cache] {
        &self.caches
    }

    /// Caches whose most recent log was written by the query owner
    ///
    /// This mirrors the pocket-query "my finds" convention: the export puts
    /// the owner's log first on each cache it contains. It is a heuristic,
    /// not an identity check; [`finds_by`](PocketQuery::finds_by) scans the
    /// whole logbook instead.
    pub fn my_finds(&self) -> Vec<&Cache> {
        self.caches
            .iter()
            .filter(|cache| {
                cache
                    .logs()
                    .first()
                    .is_some_and(|log| log.found_by() == self.owner_name)
            })
            .collect()
    }

    /// Caches with a "Found it" log by the given finder anywhere in the logbook
    pub fn finds_by(&self, finder: &str) -> Vec<&Cache> {
        self.caches
            .iter()
            .filter(|cache| {
                cache
                    .logs()
                    .iter()
                    .any(|log| log.is_find() && log.found_by() == finder)
            })
            .collect()
    }

    /// The configured query-owner name
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Export timestamp from the document header, once loaded
    pub fn exported_on(&self) -> Option<&str> {
        self.exported_on.as_deref()
    }

    /// Whether a document has been successfully loaded
    pub fn is_loaded(&self) -> bool {
        self.exported_on.is_some()
    }
}

impl fmt::Display for PocketQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.exported_on {
            Some(exported_on) => write!(f, "Exported on {exported_on}"),
            None => write!(f, "not loaded"),
        }
    }
}
