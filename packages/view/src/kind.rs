//! # Kind Checks
//!
//! Every view item answers `is(query, name)` so callers can narrow a
//! handle before using kind-specific operations. Queries are the kind
//! names below, optionally prefixed with `view:`.
//!
//! ```text
//! node
//! ├── element
//! │   ├── containerElement
//! │   │   └── editableElement
//! │   │       └── rootElement
//! │   ├── attributeElement
//! │   ├── emptyElement
//! │   ├── uiElement
//! │   └── rawElement
//! └── text
//! textProxy
//! documentFragment
//! position
//! range
//! ```

use std::fmt;

const VIEW_PREFIX: &str = "view:";

/// Closed set of view kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Node,
    Element,
    ContainerElement,
    AttributeElement,
    EmptyElement,
    UiElement,
    RawElement,
    EditableElement,
    RootElement,
    Text,
    TextProxy,
    DocumentFragment,
    Position,
    Range,
}

impl Kind {
    pub const ALL: [Kind; 14] = [
        Kind::Node,
        Kind::Element,
        Kind::ContainerElement,
        Kind::AttributeElement,
        Kind::EmptyElement,
        Kind::UiElement,
        Kind::RawElement,
        Kind::EditableElement,
        Kind::RootElement,
        Kind::Text,
        Kind::TextProxy,
        Kind::DocumentFragment,
        Kind::Position,
        Kind::Range,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Node => "node",
            Kind::Element => "element",
            Kind::ContainerElement => "containerElement",
            Kind::AttributeElement => "attributeElement",
            Kind::EmptyElement => "emptyElement",
            Kind::UiElement => "uiElement",
            Kind::RawElement => "rawElement",
            Kind::EditableElement => "editableElement",
            Kind::RootElement => "rootElement",
            Kind::Text => "text",
            Kind::TextProxy => "textProxy",
            Kind::DocumentFragment => "documentFragment",
            Kind::Position => "position",
            Kind::Range => "range",
        }
    }

    /// Resolve a query such as `"element"` or `"view:documentFragment"`
    pub fn parse(query: &str) -> Option<Kind> {
        let bare = bare_query(query);
        Kind::ALL.into_iter().find(|kind| kind.as_str() == bare)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind discrimination shared by every view item
pub trait Is {
    /// Whether this item belongs to the kind named by `query`.
    ///
    /// `name` narrows the check for items that carry a name (elements);
    /// items without one ignore it.
    fn is(&self, query: &str, name: Option<&str>) -> bool;
}

/// Strip the `view:` prefix from a query
pub(crate) fn bare_query(query: &str) -> &str {
    query.strip_prefix(VIEW_PREFIX).unwrap_or(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_prefix() {
        assert_eq!(Kind::parse("documentFragment"), Some(Kind::DocumentFragment));
        assert_eq!(Kind::parse("view:documentFragment"), Some(Kind::DocumentFragment));
        assert_eq!(Kind::parse("view:rootElement"), Some(Kind::RootElement));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Kind::parse("p"), None);
        assert_eq!(Kind::parse("model:element"), None);
        assert_eq!(Kind::parse("DocumentFragment"), None);
    }

    #[test]
    fn test_names_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(Kind::parse(kind.as_str()), Some(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
