//! Geocache waypoints and their groundspeak metadata
//!
//! A `<wpt>` element in a pocket query carries the geographic point
//! (lat/lon attributes, url, waypoint code) plus a nested
//! `<groundspeak:cache>` block with the cache metadata and its logbook.

use crate::error::{PocketQueryError, Result};
use crate::log_entry::LogEntry;
use crate::xml::{child, parse_number, required_attribute, required_child_text, GPX_NS, GROUNDSPEAK_NS};
use log::debug;
use serde::Serialize;
use std::fmt;

/// One geocache extracted from a `<wpt>` element
///
/// Immutable once constructed. Owns its log entries in document order;
/// index 0 is the most recent log. Owned exclusively by its parent
/// [`PocketQuery`](crate::PocketQuery).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cache {
    id: String,
    name: String,
    cache_type: String,
    url: String,
    difficulty: f32,
    terrain: f32,
    country: String,
    latitude: f64,
    longitude: f64,
    owner: String,
    container_size: String,
    short_description: String,
    long_description: String,
    logs: Vec<LogEntry>,
}

impl Cache {
    /// Parse a cache from serialized XML
    ///
    /// The text must be a standalone document whose root is a waypoint
    /// element with both the topografix and groundspeak namespaces declared.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not well-formed XML
    /// (`PocketQueryError::Xml`) or any required field is absent or invalid
    /// (see [`Cache::from_node`]).
    pub fn from_text(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        Self::from_node(doc.root_element())
    }

    /// Parse a cache from an already-parsed waypoint node
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `lat`/`lon` attributes are absent (`PocketQueryError::MissingAttribute`)
    ///   or do not parse as decimal degrees (`PocketQueryError::InvalidValue`)
    /// - The `url` or `name` child, the nested `<groundspeak:cache>` block, or
    ///   any required metadata field inside it is absent
    ///   (`PocketQueryError::MissingElement`)
    /// - The difficulty or terrain rating is not numeric
    ///   (`PocketQueryError::InvalidValue`)
    /// - Any nested log entry is missing a required field
    pub fn from_node(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        // Negative latitude = South, negative longitude = West (GPX convention).
        let latitude: f64 = parse_number("lat", &required_attribute(node, "lat")?)?;
        let longitude: f64 = parse_number("lon", &required_attribute(node, "lon")?)?;

        let url = required_child_text(node, GPX_NS, "url")?;
        let id = required_child_text(node, GPX_NS, "name")?;

        let metadata = child(node, GROUNDSPEAK_NS, "cache").ok_or_else(|| {
            PocketQueryError::MissingElement(format!("<cache> under <{}>", node.tag_name().name()))
        })?;

        let cache_type = required_child_text(metadata, GROUNDSPEAK_NS, "type")?;
        let difficulty: f32 =
            parse_number("difficulty", &required_child_text(metadata, GROUNDSPEAK_NS, "difficulty")?)?;
        let terrain: f32 =
            parse_number("terrain", &required_child_text(metadata, GROUNDSPEAK_NS, "terrain")?)?;
        let country = required_child_text(metadata, GROUNDSPEAK_NS, "country")?;
        let owner = required_child_text(metadata, GROUNDSPEAK_NS, "owner")?;
        let name = required_child_text(metadata, GROUNDSPEAK_NS, "name")?;
        let short_description = required_child_text(metadata, GROUNDSPEAK_NS, "short_description")?;
        let long_description = required_child_text(metadata, GROUNDSPEAK_NS, "long_description")?;
        let container_size = required_child_text(metadata, GROUNDSPEAK_NS, "container")?;

        // A waypoint without a <logs> block is a cache nobody has visited yet,
        // not a malformed document.
        let mut logs = Vec::new();
        if let Some(logs_node) = child(metadata, GROUNDSPEAK_NS, "logs") {
            for log_node in logs_node
                .children()
                .filter(|n| n.is_element() && n.has_tag_name((GROUNDSPEAK_NS, "log")))
            {
                logs.push(LogEntry::from_node(log_node)?);
            }
        }

        debug!("parsed cache {id} with {} logs", logs.len());

        Ok(Self {
            id,
            name,
            cache_type,
            url,
            difficulty,
            terrain,
            country,
            latitude,
            longitude,
            owner,
            container_size,
            short_description,
            long_description,
            logs,
        })
    }

    /// Site-assigned waypoint code, e.g. "GC7XKWF"
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Cache name as listed on the site
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cache type label, e.g. "Traditional Cache"
    pub fn cache_type(&self) -> &str {
        &self.cache_type
    }

    /// Cache listing URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Difficulty rating (1.0–5.0 in 0.5 steps)
    pub fn difficulty(&self) -> f32 {
        self.difficulty
    }

    /// Terrain rating (1.0–5.0 in 0.5 steps)
    pub fn terrain(&self) -> f32 {
        self.terrain
    }

    /// Country the cache is placed in
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Latitude in decimal degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude/longitude pair in decimal degrees
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Name of the cache owner
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Container size label, e.g. "Micro"
    pub fn container_size(&self) -> &str {
        &self.container_size
    }

    /// Short description, may contain markup
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// Long description, may contain markup
    pub fn long_description(&self) -> &str {
        &self.long_description
    }

    /// Log entries in document order; index 0 is the most recent
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }
}

impl fmt::Display for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{} (T{}/D{})", self.owner, self.terrain, self.difficulty)
        } else {
            write!(
                f,
                "{}    by   {} (T{}/D{})",
                self.name, self.owner, self.terrain, self.difficulty
            )
        }
    }
}
