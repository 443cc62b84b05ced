use crate::kind::{Is, Kind};
use crate::node::NodeId;

/// Character run of a text node, captured when the proxy is created.
///
/// Later edits of the source node do not reach the proxy. Inserting a
/// proxy into a container materializes a new independent text node
/// holding the captured characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextProxy {
    text_node: NodeId,
    offset_in_text: usize,
    offset_size: usize,
    data: String,
    partial: bool,
}

impl TextProxy {
    pub(crate) fn new(
        text_node: NodeId,
        offset_in_text: usize,
        data: String,
        text_len: usize,
    ) -> Self {
        let offset_size = data.chars().count();
        Self {
            text_node,
            offset_in_text,
            offset_size,
            data,
            partial: offset_size != text_len,
        }
    }

    pub fn text_node(&self) -> NodeId {
        self.text_node
    }

    pub fn offset_in_text(&self) -> usize {
        self.offset_in_text
    }

    /// Number of characters covered
    pub fn offset_size(&self) -> usize {
        self.offset_size
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    /// Whether the proxy covered less than the whole text node
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    pub(crate) fn into_data(self) -> String {
        self.data
    }
}

impl Is for TextProxy {
    fn is(&self, query: &str, _name: Option<&str>) -> bool {
        Kind::parse(query) == Some(Kind::TextProxy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_run() {
        let proxy = TextProxy::new(NodeId::new(0, 0), 1, "ół".to_string(), 4);
        assert_eq!(proxy.data(), "ół");
        assert_eq!(proxy.offset_in_text(), 1);
        assert_eq!(proxy.offset_size(), 2);
        assert!(proxy.is_partial());
        assert!(!TextProxy::new(NodeId::new(0, 0), 0, "ab".to_string(), 2).is_partial());
    }

    #[test]
    fn test_is() {
        let proxy = TextProxy::new(NodeId::new(0, 0), 0, "a".to_string(), 1);
        assert!(proxy.is("textProxy", None));
        assert!(proxy.is("view:textProxy", None));
        assert!(!proxy.is("text", None));
        assert!(!proxy.is("node", None));
    }
}
