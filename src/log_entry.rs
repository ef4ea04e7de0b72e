//! Logbook entries attached to a geocache
//!
//! Each `<groundspeak:log>` element records one visit to a cache: who was
//! there, when, what kind of visit it was, and the free-text comment they
//! left behind.

use crate::error::Result;
use crate::xml::{required_child_text, GROUNDSPEAK_NS};
use serde::Serialize;
use std::fmt;

/// Groundspeak log type marking a successful find
const FOUND_IT: &str = "Found it";

/// One logbook entry extracted from a `<groundspeak:log>` element
///
/// Immutable once constructed; all fields are exposed through read-only
/// accessors. Owned exclusively by its parent [`Cache`](crate::Cache).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    found_date: String,
    found_by: String,
    comment: String,
    log_type: String,
}

impl LogEntry {
    /// Parse a log entry from serialized XML
    ///
    /// The text must be a standalone document whose root is a log element
    /// with the groundspeak namespace declared.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not well-formed XML
    /// (`PocketQueryError::Xml`) or a required child element is absent
    /// (`PocketQueryError::MissingElement`).
    pub fn from_text(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        Self::from_node(doc.root_element())
    }

    /// Parse a log entry from an already-parsed log node
    ///
    /// # Errors
    ///
    /// Returns `PocketQueryError::MissingElement` if any of the required
    /// children (`date`, `finder`, `text`, `type`) is absent. The `text`
    /// element must exist but may be empty.
    pub fn from_node(node: roxmltree::Node<'_, '_>) -> Result<Self> {
        Ok(Self {
            found_date: required_child_text(node, GROUNDSPEAK_NS, "date")?,
            found_by: required_child_text(node, GROUNDSPEAK_NS, "finder")?,
            comment: required_child_text(node, GROUNDSPEAK_NS, "text")?,
            log_type: required_child_text(node, GROUNDSPEAK_NS, "type")?,
        })
    }

    /// Timestamp of the visit, as given by the source (not reparsed)
    pub fn found_date(&self) -> &str {
        &self.found_date
    }

    /// Name of the visitor who wrote the log
    pub fn found_by(&self) -> &str {
        &self.found_by
    }

    /// Free-text comment, possibly empty
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Log type label, e.g. "Found it" or "Write note"
    pub fn log_type(&self) -> &str {
        &self.log_type
    }

    /// Whether this entry records a successful find
    pub fn is_find(&self) -> bool {
        self.log_type == FOUND_IT
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} found the cache on {}", self.found_by, self.found_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PocketQueryError;

    const NS: &str = "http://www.groundspeak.com/cache/1/0";

    fn log_xml(date: &str, finder: &str, text: &str, log_type: &str) -> String {
        format!(
            r#"<groundspeak:log xmlns:groundspeak="{NS}" id="1">
  <groundspeak:date>{date}</groundspeak:date>
  <groundspeak:type>{log_type}</groundspeak:type>
  <groundspeak:finder id="42">{finder}</groundspeak:finder>
  <groundspeak:text encoded="False">{text}</groundspeak:text>
</groundspeak:log>"#
        )
    }

    #[test]
    fn test_round_trip_all_fields() {
        let xml = log_xml("2019-06-23T00:00:00Z", "Bob", "Nice hide, TFTC!", "Found it");
        let entry = LogEntry::from_text(&xml).unwrap();

        assert_eq!(entry.found_date(), "2019-06-23T00:00:00Z");
        assert_eq!(entry.found_by(), "Bob");
        assert_eq!(entry.comment(), "Nice hide, TFTC!");
        assert_eq!(entry.log_type(), "Found it");
        assert!(entry.is_find());
    }

    #[test]
    fn test_empty_comment_is_allowed() {
        let xml = log_xml("2019-06-23T00:00:00Z", "Bob", "", "Write note");
        let entry = LogEntry::from_text(&xml).unwrap();

        assert_eq!(entry.comment(), "");
        assert!(!entry.is_find());
    }

    #[test]
    fn test_missing_finder_fails() {
        let xml = format!(
            r#"<groundspeak:log xmlns:groundspeak="{NS}">
  <groundspeak:date>2019-06-23T00:00:00Z</groundspeak:date>
  <groundspeak:type>Found it</groundspeak:type>
  <groundspeak:text>hello</groundspeak:text>
</groundspeak:log>"#
        );
        let result = LogEntry::from_text(&xml);

        match result {
            Err(PocketQueryError::MissingElement(msg)) => assert!(msg.contains("finder")),
            other => panic!("expected MissingElement, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_xml_fails() {
        let result = LogEntry::from_text("<groundspeak:log>");
        assert!(matches!(result, Err(PocketQueryError::Xml(_))));
    }

    #[test]
    fn test_display() {
        let xml = log_xml("2019-06-23T00:00:00Z", "Bob", "", "Found it");
        let entry = LogEntry::from_text(&xml).unwrap();

        assert_eq!(
            entry.to_string(),
            "Bob found the cache on 2019-06-23T00:00:00Z"
        );
    }
}
