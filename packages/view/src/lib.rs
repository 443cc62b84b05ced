//! # Quire View
//!
//! View tree for the Quire editing engine: a virtual representation of
//! rendered document structure.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ ViewDocument: arena owning every node       │
//! │  - children operations (insert / remove)    │
//! │  - parent back-references                   │
//! │  - change bubbling                          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ Node: Element | Text | DocumentFragment     │
//! │  - Is: kind checks shared by every item     │
//! │  - Emitter: change:children / attributes /  │
//! │    text listeners                           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quire_view::{ChangeType, Is, Item, ViewDocument};
//!
//! let mut doc = ViewDocument::new();
//! let source = doc.create_text("abc");
//! let proxy = doc.create_text_proxy(source, 1, 2)?;
//!
//! // Strings and proxies become new text nodes
//! let fragment = doc.create_fragment_with(vec![Item::from("a"), Item::from(proxy)])?;
//! assert!(doc.fragment(fragment)?.is("documentFragment", None));
//!
//! doc.fragment_mut(fragment)?.on(ChangeType::Children, |event| {
//!     tracing::info!(node = %event.node, "children changed");
//! });
//! doc.append_children(fragment, "d")?;
//! ```

mod document;
mod element;
mod emitter;
mod errors;
mod fragment;
mod item;
mod kind;
mod node;
mod options;
mod text;
mod text_proxy;

pub use document::ViewDocument;
pub use element::{Element, ElementVariant};
pub use emitter::{ChangeEvent, ChangeType, Emitter, Listener, ListenerId};
pub use errors::{ViewError, ViewResult};
pub use fragment::DocumentFragment;
pub use item::Item;
pub use kind::{Is, Kind};
pub use node::{Node, NodeData, NodeId};
pub use options::{RangePolicy, ViewOptions};
pub use text::Text;
pub use text_proxy::TextProxy;
