//! # Document Fragment
//!
//! An ordered list of sibling view nodes with no element above them.
//!
//! A fragment is its own root and never has a parent: the document
//! refuses to insert one into another container. Structural mutations go
//! through [`ViewDocument`](crate::ViewDocument), which keeps each child's
//! parent back-reference pointing at the fragment and fires a
//! `change:children` event on it before the child list is touched.
//!
//! ```rust,ignore
//! let mut doc = ViewDocument::new();
//! let fragment = doc.create_fragment_with(vec![Item::from("foo"), Item::from(bold)])?;
//!
//! doc.fragment_mut(fragment)?.on(ChangeType::Children, |event| {
//!     println!("{} changed", event.node);
//! });
//!
//! doc.append_children(fragment, "bar")?;
//! let removed = doc.remove_children(fragment, 0, 1)?;
//! ```

use crate::emitter::{ChangeEvent, ChangeType, Emitter, ListenerId};
use crate::kind::{Is, Kind};
use crate::node::NodeId;
use serde_json::Value;
use std::collections::HashMap;
use std::iter::Copied;
use std::slice;

#[derive(Debug)]
pub struct DocumentFragment {
    id: NodeId,
    pub(crate) children: Vec<NodeId>,
    pub(crate) emitter: Emitter,
    custom_properties: HashMap<String, Value>,
}

impl DocumentFragment {
    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            children: Vec::new(),
            emitter: Emitter::new(),
            custom_properties: HashMap::new(),
        }
    }

    /// The fragment itself, fragments are the root of their own tree
    pub fn root(&self) -> NodeId {
        self.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        None
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Independent iterator over the current children, in order
    pub fn children(&self) -> Copied<slice::Iter<'_, NodeId>> {
        self.children.iter().copied()
    }

    pub fn child_ids(&self) -> &[NodeId] {
        &self.children
    }

    pub fn child_at(&self, index: usize) -> Option<NodeId> {
        self.children.get(index).copied()
    }

    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.children.iter().position(|&child| child == node)
    }

    pub fn custom_property(&self, key: &str) -> Option<&Value> {
        self.custom_properties.get(key)
    }

    pub fn set_custom_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.custom_properties.insert(key.into(), value.into());
    }

    pub fn remove_custom_property(&mut self, key: &str) -> bool {
        self.custom_properties.remove(key).is_some()
    }

    pub fn custom_properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.custom_properties
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Subscribe to changes of this fragment and of every node beneath it
    pub fn on<F>(&mut self, change: ChangeType, listener: F) -> ListenerId
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        self.emitter.on(change, listener)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.off(id)
    }
}

impl<'a> IntoIterator for &'a DocumentFragment {
    type Item = NodeId;
    type IntoIter = Copied<slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.children()
    }
}

impl Is for DocumentFragment {
    fn is(&self, query: &str, _name: Option<&str>) -> bool {
        Kind::parse(query) == Some(Kind::DocumentFragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fragment_with(children: &[usize]) -> DocumentFragment {
        let mut fragment = DocumentFragment::new(NodeId::from_index(0));
        fragment.children = children.iter().map(|&i| NodeId::from_index(i)).collect();
        fragment
    }

    #[test]
    fn test_empty_fragment() {
        let fragment = fragment_with(&[]);
        assert!(fragment.is_empty());
        assert_eq!(fragment.child_count(), 0);
        assert_eq!(fragment.root(), NodeId::from_index(0));
        assert_eq!(fragment.parent(), None);
        assert_eq!(fragment.children().next(), None);
    }

    #[test]
    fn test_lookup() {
        let fragment = fragment_with(&[3, 5, 7]);
        assert_eq!(fragment.child_at(1), Some(NodeId::from_index(5)));
        assert_eq!(fragment.child_at(3), None);
        assert_eq!(fragment.index_of(NodeId::from_index(7)), Some(2));
        assert_eq!(fragment.index_of(NodeId::from_index(4)), None);

        for (index, child) in fragment.children().enumerate() {
            assert_eq!(fragment.index_of(child), Some(index));
        }
    }

    #[test]
    fn test_iteration_is_restartable() {
        let fragment = fragment_with(&[1, 2]);
        let first: Vec<_> = fragment.children().collect();
        let second: Vec<_> = (&fragment).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_is() {
        let fragment = fragment_with(&[]);
        assert!(fragment.is("documentFragment", None));
        assert!(fragment.is("view:documentFragment", None));
        assert!(fragment.is("documentFragment", Some("ignored")));
        assert!(!fragment.is("element", None));
        assert!(!fragment.is("node", None));
        assert!(!fragment.is("view:node", None));
        assert!(!fragment.is("text", None));
        assert!(!fragment.is("rootElement", None));
        assert!(!fragment.is("position", None));
        assert!(!fragment.is("range", None));
    }

    #[test]
    fn test_custom_properties() {
        let mut fragment = fragment_with(&[]);
        fragment.set_custom_property("source", "clipboard");
        fragment.set_custom_property("meta", json!({ "pasted": true }));

        assert_eq!(fragment.custom_property("source"), Some(&json!("clipboard")));
        assert_eq!(fragment.custom_properties().count(), 2);
        assert!(fragment.remove_custom_property("source"));
        assert!(!fragment.remove_custom_property("source"));
        assert_eq!(fragment.custom_property("source"), None);
    }
}
