//! # Insertable Items
//!
//! Children operations accept anything that converts into an [`Item`]:
//! a node handle, a string, a text proxy, or a sequence of those.
//! [`normalize`] resolves an item into concrete node handles, creating
//! text nodes for strings and proxies along the way.

use crate::document::ViewDocument;
use crate::errors::{ViewError, ViewResult};
use crate::node::NodeId;
use crate::text_proxy::TextProxy;

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Existing node, inserted as is
    Node(NodeId),

    /// Literal text, becomes a new text node
    Text(String),

    /// Slice of an existing text node, copied into a new text node
    Proxy(TextProxy),

    /// Ordered sequence, flattened in place
    Many(Vec<Item>),
}

impl Item {
    pub fn empty() -> Self {
        Item::Many(Vec::new())
    }
}

impl From<NodeId> for Item {
    fn from(node: NodeId) -> Self {
        Item::Node(node)
    }
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Item::Text(text.to_string())
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Item::Text(text)
    }
}

impl From<TextProxy> for Item {
    fn from(proxy: TextProxy) -> Self {
        Item::Proxy(proxy)
    }
}

impl<T: Into<Item>> From<Vec<T>> for Item {
    fn from(items: Vec<T>) -> Self {
        Item::Many(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Item>, const N: usize> From<[T; N]> for Item {
    fn from(items: [T; N]) -> Self {
        Item::Many(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Item>> FromIterator<T> for Item {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Item::Many(iter.into_iter().map(Into::into).collect())
    }
}

/// Check every node in `item` can move under `container`.
///
/// Runs before [`normalize`] so a rejected insert creates no text nodes.
pub(crate) fn check_insertable(doc: &ViewDocument, container: NodeId, item: &Item) -> ViewResult<()> {
    match item {
        Item::Node(node) => {
            if doc.node(*node)?.is_fragment() {
                return Err(ViewError::FragmentNotInsertable(*node));
            }
            if doc.is_inclusive_ancestor(*node, container) {
                return Err(ViewError::CycleDetected);
            }
            Ok(())
        }
        Item::Text(_) | Item::Proxy(_) => Ok(()),
        Item::Many(items) => items
            .iter()
            .try_for_each(|item| check_insertable(doc, container, item)),
    }
}

/// Resolve `item` into node handles, in order
pub(crate) fn normalize(doc: &mut ViewDocument, item: Item) -> Vec<NodeId> {
    let mut nodes = Vec::new();
    collect(doc, item, &mut nodes);
    nodes
}

fn collect(doc: &mut ViewDocument, item: Item, nodes: &mut Vec<NodeId>) {
    match item {
        Item::Node(node) => nodes.push(node),
        Item::Text(text) => nodes.push(doc.create_text(text)),
        Item::Proxy(proxy) => nodes.push(doc.create_text(proxy.into_data())),
        Item::Many(items) => {
            for item in items {
                collect(doc, item, nodes);
            }
        }
    }
}
