use crate::emitter::{ChangeEvent, ChangeType, Emitter, ListenerId};
use crate::kind::{Is, Kind};

/// Literal text content
#[derive(Debug, Default)]
pub struct Text {
    data: String,
    pub(crate) emitter: Emitter,
}

impl Text {
    pub(crate) fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            emitter: Emitter::new(),
        }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    /// Length in characters, the unit text proxies are measured in
    pub fn char_len(&self) -> usize {
        self.data.chars().count()
    }

    pub(crate) fn set_data(&mut self, data: String) {
        self.data = data;
    }

    /// Characters `[offset, offset + length)`, `None` if the run leaves the text
    pub(crate) fn slice(&self, offset: usize, length: usize) -> Option<String> {
        if offset.checked_add(length)? > self.char_len() {
            return None;
        }
        Some(self.data.chars().skip(offset).take(length).collect())
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

impl Is for Text {
    fn is(&self, query: &str, _name: Option<&str>) -> bool {
        matches!(Kind::parse(query), Some(Kind::Text | Kind::Node))
    }
}
