//! # View Nodes
//!
//! All nodes live in the [`ViewDocument`](crate::ViewDocument) arena and are
//! addressed by [`NodeId`]. Containers hold the ids of their children; each
//! node holds a non-owning back-reference to its current parent.

use crate::element::Element;
use crate::emitter::{ChangeEvent, ChangeType, Emitter, ListenerId};
use crate::fragment::DocumentFragment;
use crate::kind::Is;
use crate::text::Text;
use std::fmt;

/// Arena slot index plus the generation of the slot when the node was created.
///
/// Freeing a node bumps its slot generation, so stale handles never
/// resolve to a node that later reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        Self::new(index, 0)
    }

    pub(crate) fn index(self) -> usize {
        self.index
    }

    pub(crate) fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

#[derive(Debug)]
pub enum NodeData {
    Element(Element),
    Text(Text),
    Fragment(DocumentFragment),
}

/// Node payload plus its parent back-reference
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) data: NodeData,
}

impl Node {
    pub(crate) fn new(id: NodeId, data: NodeData) -> Self {
        Self {
            id,
            parent: None,
            data,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Current container, always `None` for fragments
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    pub fn as_element(&self) -> Option<&Element> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match &self.data {
            NodeData::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&DocumentFragment> {
        match &self.data {
            NodeData::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }

    pub(crate) fn as_element_mut(&mut self) -> Option<&mut Element> {
        match &mut self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn as_text_mut(&mut self) -> Option<&mut Text> {
        match &mut self.data {
            NodeData::Text(text) => Some(text),
            _ => None,
        }
    }

    pub(crate) fn as_fragment_mut(&mut self) -> Option<&mut DocumentFragment> {
        match &mut self.data {
            NodeData::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }

    /// Children of a container node, `None` for leaves
    pub fn children(&self) -> Option<&[NodeId]> {
        match &self.data {
            NodeData::Element(element) if element.accepts_children() => Some(element.child_ids()),
            NodeData::Fragment(fragment) => Some(fragment.child_ids()),
            _ => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match &mut self.data {
            NodeData::Element(element) if element.accepts_children() => Some(&mut element.children),
            NodeData::Fragment(fragment) => Some(&mut fragment.children),
            _ => None,
        }
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self.data, NodeData::Fragment(_))
    }

    fn emitter(&self) -> &Emitter {
        match &self.data {
            NodeData::Element(element) => &element.emitter,
            NodeData::Text(text) => &text.emitter,
            NodeData::Fragment(fragment) => &fragment.emitter,
        }
    }

    fn emitter_mut(&mut self) -> &mut Emitter {
        match &mut self.data {
            NodeData::Element(element) => &mut element.emitter,
            NodeData::Text(text) => &mut text.emitter,
            NodeData::Fragment(fragment) => &mut fragment.emitter,
        }
    }

    /// Subscribe to changes on this node and its descendants
    pub fn on<F>(&mut self, change: ChangeType, listener: F) -> ListenerId
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        self.emitter_mut().on(change, listener)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter_mut().off(id)
    }

    pub fn listener_count(&self) -> usize {
        self.emitter().listener_count()
    }

    pub(crate) fn emit(&mut self, event: &ChangeEvent) -> usize {
        self.emitter_mut().emit(event)
    }
}

impl Is for Node {
    fn is(&self, query: &str, name: Option<&str>) -> bool {
        match &self.data {
            NodeData::Element(element) => element.is(query, name),
            NodeData::Text(text) => text.is(query, name),
            NodeData::Fragment(fragment) => fragment.is(query, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_not_truncated() {
        let far = NodeId::new(u32::MAX as usize + 1, 0);
        assert_eq!(far.index(), u32::MAX as usize + 1);
        assert_ne!(far, NodeId::new(0, 0));
    }

    #[test]
    fn test_generation_distinguishes_handles() {
        assert_ne!(NodeId::new(3, 0), NodeId::new(3, 1));
        assert_eq!(NodeId::new(3, 1).to_string(), "#3.1");
    }
}
