//! # pocket-query
//!
//! Parser for Groundspeak pocket query exports: GPX 1.0 documents whose
//! waypoints carry the geocaching cache extension, including the logbook of
//! visits attached to each cache.
//!
//! ## Supported input
//!
//! | Namespace | URI | Carries |
//! |-----------|-----|---------|
//! | topografix GPX 1.0 | `http://www.topografix.com/GPX/1/0` | Root, `time`, `wpt`, `url`, waypoint code |
//! | groundspeak cache 1.0 | `http://www.groundspeak.com/cache/1/0` | Cache metadata, `logs` collection |
//!
//! This is not a general XML toolkit: exactly these two namespaces are
//! understood, and conformance is checked only as far as required elements
//! being present.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pocket_query::PocketQuery;
//!
//! let mut query = PocketQuery::new("discordia23")?;
//! query.load_from_path("1489306.gpx")?;
//!
//! println!("{query}"); // "Exported on <timestamp>"
//!
//! for cache in query.all_caches() {
//!     println!("{cache}");
//!     println!("  at ({:.6}, {:.6})", cache.latitude(), cache.longitude());
//!     for log in cache.logs() {
//!         println!("  {log}");
//!     }
//! }
//!
//! // Caches whose most recent log is the query owner's
//! for cache in query.my_finds() {
//!     println!("found: {}", cache.name());
//! }
//! # Ok::<(), pocket_query::PocketQueryError>(())
//! ```
//!
//! ## Structure
//!
//! | Type | Extracted from | Owns |
//! |------|----------------|------|
//! | [`PocketQuery`] | document root | ordered `Vec<Cache>` |
//! | [`Cache`] | one `<wpt>` | ordered `Vec<LogEntry>` |
//! | [`LogEntry`] | one `<groundspeak:log>` | — |
//!
//! All ownership is exclusive and top-down; everything is immutable after a
//! load completes. Loading replaces the previous collection, and a failed
//! load leaves it untouched.
//!
//! ## Error Handling
//!
//! ```no_run
//! use pocket_query::{PocketQuery, PocketQueryError};
//!
//! let mut query = PocketQuery::new("discordia23")?;
//! match query.load_from_path("1489306.gpx") {
//!     Ok(()) => println!("parsed {} caches", query.all_caches().len()),
//!     Err(PocketQueryError::NotFound(path)) => println!("no such file: {}", path.display()),
//!     Err(PocketQueryError::Xml(e)) => println!("not well-formed: {e}"),
//!     Err(e) => println!("error: {e}"),
//! }
//! # Ok::<(), pocket_query::PocketQueryError>(())
//! ```
//!
//! Errors are fail-fast: a missing field in one log aborts its cache, which
//! aborts the whole load. No silent defaults are substituted for required
//! data. The one deliberate leniency: a cache without a `<logs>` block
//! parses with an empty logbook.
//!
//! ## Security
//!
//! Documents are parsed with DTDs disabled (no external entity expansion)
//! and rejected above a size limit, so untrusted pocket query files are safe
//! to load. See [`query::MAX_DOCUMENT_SIZE`].

pub mod cache;
pub mod error;
pub mod log_entry;
pub mod query;

mod xml;

pub use cache::Cache;
pub use error::{PocketQueryError, Result};
pub use log_entry::LogEntry;
pub use query::{PocketQuery, MAX_DOCUMENT_SIZE};
