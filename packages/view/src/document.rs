//! # View Document
//!
//! Arena owning every node of a view tree.
//!
//! ## Ownership
//!
//! ```text
//! ViewDocument.slots: [ Slot, Slot, Slot, ... ]      free: [ index, ... ]
//!                        │
//!                        ├── generation: u32
//!                        └── node: Option<Node>
//!                                   ├── data: Element | Text | DocumentFragment
//!                                   └── parent: Option<NodeId>   (non-owning)
//! ```
//!
//! Containers (elements and fragments) list their children by [`NodeId`].
//! Every children operation goes through the document so that the child
//! list and each child's parent back-reference change together:
//!
//! 1. A node is listed by at most one container
//! 2. A listed node's parent is that container
//! 3. Fragments never have a parent
//!
//! Handles are only meaningful for the document that created them.
//! [`ViewDocument::destroy`] frees a detached subtree; its slots go on the
//! free list and their generation is bumped, so old handles report
//! [`ViewError::UnknownNode`] instead of reaching the slot's next node.

use crate::element::{Element, ElementVariant};
use crate::emitter::{ChangeEvent, ChangeType};
use crate::errors::{ViewError, ViewResult};
use crate::fragment::DocumentFragment;
use crate::item::{check_insertable, normalize, Item};
use crate::kind::Is;
use crate::node::{Node, NodeData, NodeId};
use crate::options::{RangePolicy, ViewOptions};
use crate::text::Text;
use crate::text_proxy::TextProxy;
use tracing::{debug, instrument, trace, warn};

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug, Default)]
pub struct ViewDocument {
    slots: Vec<Slot>,
    free: Vec<usize>,
    live: usize,
    options: ViewOptions,
}

impl ViewDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ViewOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Number of live nodes, destroyed ones excluded
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn node(&self, id: NodeId) -> ViewResult<&Node> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
            .ok_or(ViewError::UnknownNode(id))
    }

    /// Mutable access for subscribing to a node's changes
    pub fn node_mut(&mut self, id: NodeId) -> ViewResult<&mut Node> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
            .ok_or(ViewError::UnknownNode(id))
    }

    pub fn element(&self, id: NodeId) -> ViewResult<&Element> {
        self.node(id)?.as_element().ok_or(ViewError::NotAnElement(id))
    }

    pub fn element_mut(&mut self, id: NodeId) -> ViewResult<&mut Element> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(ViewError::NotAnElement(id))
    }

    pub fn text(&self, id: NodeId) -> ViewResult<&Text> {
        self.node(id)?.as_text().ok_or(ViewError::NotText(id))
    }

    pub fn fragment(&self, id: NodeId) -> ViewResult<&DocumentFragment> {
        self.node(id)?.as_fragment().ok_or(ViewError::NotAFragment(id))
    }

    pub fn fragment_mut(&mut self, id: NodeId) -> ViewResult<&mut DocumentFragment> {
        self.node_mut(id)?
            .as_fragment_mut()
            .ok_or(ViewError::NotAFragment(id))
    }

    /// Kind check by handle, false for handles this document does not own
    pub fn is(&self, id: NodeId, query: &str, name: Option<&str>) -> bool {
        self.node(id)
            .map(|node| node.is(query, name))
            .unwrap_or(false)
    }

    fn push(&mut self, build: impl FnOnce(NodeId) -> NodeData) -> NodeId {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot::default());
                self.slots.len() - 1
            }
        };
        let slot = &mut self.slots[index];
        let id = NodeId::new(index, slot.generation);
        slot.node = Some(Node::new(id, build(id)));
        self.live += 1;
        id
    }

    pub fn create_text(&mut self, data: impl Into<String>) -> NodeId {
        let data = data.into();
        self.push(|_| NodeData::Text(Text::new(data)))
    }

    pub fn create_element(&mut self, name: impl Into<String>) -> NodeId {
        self.create_element_with(name, ElementVariant::Generic)
    }

    pub fn create_element_with(&mut self, name: impl Into<String>, variant: ElementVariant) -> NodeId {
        let element = Element::new(name, variant);
        self.push(|_| NodeData::Element(element))
    }

    /// Create an empty fragment
    pub fn create_fragment(&mut self) -> NodeId {
        self.push(|id| NodeData::Fragment(DocumentFragment::new(id)))
    }

    /// Create a fragment and insert `children` at its start
    pub fn create_fragment_with(&mut self, children: impl Into<Item>) -> ViewResult<NodeId> {
        let fragment = self.create_fragment();
        self.insert_children(fragment, 0, children)?;
        Ok(fragment)
    }

    /// Capture `length` characters of `text` starting at `offset`.
    ///
    /// The proxy keeps its own copy of the characters, so editing `text`
    /// afterwards changes neither the proxy nor what inserting it creates.
    pub fn create_text_proxy(&self, text: NodeId, offset: usize, length: usize) -> ViewResult<TextProxy> {
        let source = self.text(text)?;
        let len = source.char_len();
        let data = source
            .slice(offset, length)
            .ok_or(ViewError::InvalidTextProxy { offset, length, len })?;
        Ok(TextProxy::new(text, offset, data, len))
    }

    fn children_of(&self, container: NodeId) -> ViewResult<&[NodeId]> {
        self.node(container)?
            .children()
            .ok_or(ViewError::NotAContainer(container))
    }

    fn children_of_mut(&mut self, container: NodeId) -> ViewResult<&mut Vec<NodeId>> {
        self.node_mut(container)?
            .children_mut()
            .ok_or(ViewError::NotAContainer(container))
    }

    pub fn child_count(&self, container: NodeId) -> ViewResult<usize> {
        Ok(self.children_of(container)?.len())
    }

    /// Insert `items` into `container` starting at `index`.
    ///
    /// Strings and text proxies become new text nodes. Nodes that already
    /// have a parent are detached from it first. One `change:children`
    /// event fires on `container` before anything moves.
    ///
    /// Returns the number of inserted nodes.
    #[instrument(level = "debug", skip(self, items))]
    pub fn insert_children(
        &mut self,
        container: NodeId,
        index: usize,
        items: impl Into<Item>,
    ) -> ViewResult<usize> {
        let len = self.children_of(container)?.len();
        let index = if index > len {
            match self.options.range_policy {
                RangePolicy::Strict => return Err(ViewError::IndexOutOfBounds { index, len }),
                RangePolicy::Clip => {
                    warn!(index, len, "Insertion index past the end, appending");
                    len
                }
            }
        } else {
            index
        };

        let items = items.into();
        check_insertable(self, container, &items)?;
        let nodes = normalize(self, items);

        self.fire_change(ChangeType::Children, container);

        let mut position = index;
        for &node in &nodes {
            let parent = self.node(node)?.parent;
            match parent {
                // Already announced above, move without a second event.
                // `position` counts in the list with the node taken out.
                Some(parent) if parent == container => {
                    let children = self.children_of_mut(container)?;
                    if let Some(current) = children.iter().position(|&child| child == node) {
                        children.remove(current);
                    }
                }
                Some(_) => {
                    self.detach(node)?;
                }
                None => {}
            }

            self.node_mut(node)?.parent = Some(container);
            let children = self.children_of_mut(container)?;
            children.insert(position.min(children.len()), node);
            position += 1;
        }

        debug!(container = %container, index, count = nodes.len(), "Inserted children");
        Ok(nodes.len())
    }

    /// Insert `items` after the last child of `container`
    pub fn append_children(&mut self, container: NodeId, items: impl Into<Item>) -> ViewResult<usize> {
        let len = self.child_count(container)?;
        self.insert_children(container, len, items)
    }

    /// Remove `count` children of `container` starting at `index`.
    ///
    /// Fires `change:children` on `container` first. Removed nodes lose
    /// their parent and are returned in their original order. Under the
    /// default range policy a run past the end is clipped.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_children(
        &mut self,
        container: NodeId,
        index: usize,
        count: usize,
    ) -> ViewResult<Vec<NodeId>> {
        let len = self.children_of(container)?.len();
        let end = index.saturating_add(count);
        if end > len {
            match self.options.range_policy {
                RangePolicy::Strict => {
                    return Err(ViewError::RangeOutOfBounds { index, count, len });
                }
                RangePolicy::Clip => warn!(index, count, len, "Removal range past the end, clipping"),
            }
        }
        let range = index.min(len)..end.min(len);

        self.fire_change(ChangeType::Children, container);

        let removed: Vec<NodeId> = self.children_of_mut(container)?.drain(range).collect();
        for &node in &removed {
            self.node_mut(node)?.parent = None;
        }

        debug!(container = %container, index, count = removed.len(), "Removed children");
        Ok(removed)
    }

    /// Remove the single child at `index`, if any
    pub fn remove_child(&mut self, container: NodeId, index: usize) -> ViewResult<Option<NodeId>> {
        Ok(self.remove_children(container, index, 1)?.into_iter().next())
    }

    /// Detach `node` from its parent, returns false if it had none
    pub fn detach(&mut self, node: NodeId) -> ViewResult<bool> {
        let Some(parent) = self.node(node)?.parent() else {
            return Ok(false);
        };
        let index = self
            .children_of(parent)?
            .iter()
            .position(|&child| child == node)
            .ok_or(ViewError::UnknownNode(node))?;

        debug!(node = %node, parent = %parent, index, "Detaching node");
        self.remove_children(parent, index, 1)?;
        Ok(true)
    }

    /// Detach `node` and free it together with all of its descendants.
    ///
    /// `change:children` fires on the old parent as for [`detach`](Self::detach);
    /// freed nodes fire nothing and drop their listeners. Handles to freed
    /// nodes return [`ViewError::UnknownNode`] from then on.
    ///
    /// Returns the number of freed nodes.
    #[instrument(level = "debug", skip(self))]
    pub fn destroy(&mut self, node: NodeId) -> ViewResult<usize> {
        self.detach(node)?;

        let mut pending = vec![node];
        let mut freed = 0;
        while let Some(id) = pending.pop() {
            let Some(slot) = self
                .slots
                .get_mut(id.index())
                .filter(|slot| slot.generation == id.generation())
            else {
                continue;
            };
            let Some(removed) = slot.node.take() else {
                continue;
            };
            if let Some(children) = removed.children() {
                pending.extend_from_slice(children);
            }
            // A slot whose generation is exhausted is retired, never reused
            if let Some(generation) = slot.generation.checked_add(1) {
                slot.generation = generation;
                self.free.push(id.index());
            }
            self.live -= 1;
            freed += 1;
        }

        debug!(node = %node, freed, "Destroyed subtree");
        Ok(freed)
    }

    /// Replace the data of a text node, firing `change:text` first
    pub fn set_text_data(&mut self, text: NodeId, data: impl Into<String>) -> ViewResult<()> {
        self.text(text)?;
        self.fire_change(ChangeType::Text, text);
        if let Some(text) = self.node_mut(text)?.as_text_mut() {
            text.set_data(data.into());
        }
        Ok(())
    }

    /// Set an attribute, firing `change:attributes` first. Returns the previous value.
    pub fn set_attribute(
        &mut self,
        element: NodeId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ViewResult<Option<String>> {
        self.element(element)?;
        self.fire_change(ChangeType::Attributes, element);
        Ok(self
            .element_mut(element)?
            .set_attribute(key.into(), value.into()))
    }

    pub fn remove_attribute(&mut self, element: NodeId, key: &str) -> ViewResult<Option<String>> {
        if !self.element(element)?.has_attribute(key) {
            return Ok(None);
        }
        self.fire_change(ChangeType::Attributes, element);
        Ok(self.element_mut(element)?.remove_attribute(key))
    }

    pub fn parent(&self, node: NodeId) -> ViewResult<Option<NodeId>> {
        Ok(self.node(node)?.parent())
    }

    /// Topmost ancestor of `node`, or `node` itself when detached
    pub fn root(&self, node: NodeId) -> ViewResult<NodeId> {
        let mut current = node;
        while let Some(parent) = self.node(current)?.parent() {
            current = parent;
        }
        Ok(current)
    }

    /// Ancestors of `node`, root first
    pub fn ancestors(&self, node: NodeId) -> ViewResult<Vec<NodeId>> {
        let mut ancestors = Vec::new();
        let mut current = self.node(node)?.parent();
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.node(parent)?.parent();
        }
        ancestors.reverse();
        Ok(ancestors)
    }

    pub fn index_in_parent(&self, node: NodeId) -> ViewResult<Option<usize>> {
        let Some(parent) = self.node(node)?.parent() else {
            return Ok(None);
        };
        Ok(self
            .children_of(parent)?
            .iter()
            .position(|&child| child == node))
    }

    pub fn next_sibling(&self, node: NodeId) -> ViewResult<Option<NodeId>> {
        self.sibling(node, |index| index.checked_add(1))
    }

    pub fn previous_sibling(&self, node: NodeId) -> ViewResult<Option<NodeId>> {
        self.sibling(node, |index| index.checked_sub(1))
    }

    fn sibling(&self, node: NodeId, step: impl Fn(usize) -> Option<usize>) -> ViewResult<Option<NodeId>> {
        let (Some(parent), Some(index)) = (self.parent(node)?, self.index_in_parent(node)?) else {
            return Ok(None);
        };
        let children = self.children_of(parent)?;
        Ok(step(index).and_then(|index| children.get(index).copied()))
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    pub(crate) fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).ok().and_then(Node::parent);
        }
        false
    }

    /// Deliver a change on `node` to it and then to each ancestor
    fn fire_change(&mut self, change: ChangeType, node: NodeId) {
        let event = ChangeEvent { change, node };
        let mut current = Some(node);
        while let Some(id) = current {
            let Ok(target) = self.node_mut(id) else {
                break;
            };
            let listeners = target.emit(&event);
            trace!(event = change.event_name(), node = %node, target = %id, listeners, "Dispatched change");
            current = target.parent;
        }
    }
}
