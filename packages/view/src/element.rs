use crate::emitter::{ChangeEvent, ChangeType, Emitter, ListenerId};
use crate::kind::{bare_query, Is, Kind};
use crate::node::NodeId;
use std::collections::HashMap;

/// Element flavours of the view tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ElementVariant {
    #[default]
    Generic,
    Container,
    Attribute,
    Empty,
    Ui,
    Raw,
    Editable,
    Root,
}

impl ElementVariant {
    /// Kinds this variant answers to beyond `element` and `node`
    pub fn kinds(self) -> &'static [Kind] {
        match self {
            ElementVariant::Generic => &[],
            ElementVariant::Container => &[Kind::ContainerElement],
            ElementVariant::Attribute => &[Kind::AttributeElement],
            ElementVariant::Empty => &[Kind::EmptyElement],
            ElementVariant::Ui => &[Kind::UiElement],
            ElementVariant::Raw => &[Kind::RawElement],
            ElementVariant::Editable => &[Kind::ContainerElement, Kind::EditableElement],
            ElementVariant::Root => &[
                Kind::ContainerElement,
                Kind::EditableElement,
                Kind::RootElement,
            ],
        }
    }

    /// Empty, UI and raw elements never hold view children
    pub fn accepts_children(self) -> bool {
        !matches!(
            self,
            ElementVariant::Empty | ElementVariant::Ui | ElementVariant::Raw
        )
    }
}

/// Named view element
#[derive(Debug)]
pub struct Element {
    name: String,
    variant: ElementVariant,
    attributes: HashMap<String, String>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) emitter: Emitter,
}

impl Element {
    pub(crate) fn new(name: impl Into<String>, variant: ElementVariant) -> Self {
        Self {
            name: name.into(),
            variant,
            attributes: HashMap::new(),
            children: Vec::new(),
            emitter: Emitter::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variant(&self) -> ElementVariant {
        self.variant
    }

    pub fn accepts_children(&self) -> bool {
        self.variant.accepts_children()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn child_ids(&self) -> &[NodeId] {
        &self.children
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub(crate) fn set_attribute(&mut self, key: String, value: String) -> Option<String> {
        self.attributes.insert(key, value)
    }

    pub(crate) fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }

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

impl Is for Element {
    fn is(&self, query: &str, name: Option<&str>) -> bool {
        let kind = Kind::parse(query);

        match name {
            None => match kind {
                Some(Kind::Element | Kind::Node) => true,
                Some(kind) => self.variant.kinds().contains(&kind),
                // `is("p")` checks the element name
                None => bare_query(query) == self.name,
            },
            Some(name) => {
                name == self.name
                    && match kind {
                        Some(Kind::Element) => true,
                        Some(kind) => self.variant.kinds().contains(&kind),
                        None => false,
                    }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_element_is() {
        let element = Element::new("p", ElementVariant::Generic);
        assert!(element.is("element", None));
        assert!(element.is("view:element", None));
        assert!(element.is("node", None));
        assert!(element.is("p", None));
        assert!(element.is("view:p", None));
        assert!(element.is("element", Some("p")));
        assert!(!element.is("element", Some("div")));
        assert!(!element.is("node", Some("p")));
        assert!(!element.is("containerElement", None));
        assert!(!element.is("documentFragment", None));
        assert!(!element.is("text", None));
    }

    #[test]
    fn test_variant_chain() {
        let root = Element::new("main", ElementVariant::Root);
        assert!(root.is("rootElement", None));
        assert!(root.is("editableElement", None));
        assert!(root.is("containerElement", Some("main")));
        assert!(!root.is("attributeElement", None));

        let bold = Element::new("b", ElementVariant::Attribute);
        assert!(bold.is("attributeElement", Some("b")));
        assert!(!bold.is("containerElement", None));
    }

    #[test]
    fn test_leaf_variants_reject_children() {
        assert!(!ElementVariant::Empty.accepts_children());
        assert!(!ElementVariant::Ui.accepts_children());
        assert!(!ElementVariant::Raw.accepts_children());
        assert!(ElementVariant::Generic.accepts_children());
        assert!(ElementVariant::Root.accepts_children());
    }

    #[test]
    fn test_attributes() {
        let mut element = Element::new("a", ElementVariant::Attribute);
        assert_eq!(element.set_attribute("href".into(), "/x".into()), None);
        assert_eq!(element.attribute("href"), Some("/x"));
        assert!(element.has_attribute("href"));
        assert_eq!(element.attributes().count(), 1);
        assert_eq!(element.remove_attribute("href").as_deref(), Some("/x"));
        assert!(!element.has_attribute("href"));
    }
}
