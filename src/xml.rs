//! Namespace constants and node helpers shared by the parsing modules

use crate::error::{PocketQueryError, Result};
use roxmltree::Node;

/// Topografix GPX 1.0 namespace (waypoint-level elements)
pub(crate) const GPX_NS: &str = "http://www.topografix.com/GPX/1/0";

/// Groundspeak cache 1.0 namespace (geocaching extension elements)
pub(crate) const GROUNDSPEAK_NS: &str = "http://www.groundspeak.com/cache/1/0";

/// Find a direct child element by expanded name
pub(crate) fn child<'a, 'd>(node: Node<'a, 'd>, ns: &str, name: &str) -> Option<Node<'a, 'd>> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name((ns, name)))
}

/// Text content of a required direct child element
///
/// The element must be present; its text may legitimately be empty
/// (e.g. a log with no comment), in which case an empty string is returned.
pub(crate) fn required_child_text(node: Node, ns: &str, name: &str) -> Result<String> {
    let found = child(node, ns, name).ok_or_else(|| {
        PocketQueryError::MissingElement(format!(
            "<{name}> under <{}>",
            node.tag_name().name()
        ))
    })?;
    Ok(found.text().unwrap_or_default().to_string())
}

/// Value of a required attribute on the node itself
pub(crate) fn required_attribute(node: Node, name: &'static str) -> Result<String> {
    node.attribute(name)
        .map(str::to_string)
        .ok_or_else(|| {
            PocketQueryError::MissingAttribute(format!(
                "{name} on <{}>",
                node.tag_name().name()
            ))
        })
}

/// Parse attribute or element text as a number, reporting the raw text on failure
pub(crate) fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| PocketQueryError::InvalidValue {
        field,
        value: value.to_string(),
    })
}
