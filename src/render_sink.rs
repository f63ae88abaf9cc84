use std::sync::Arc;

use parking_lot::Mutex;

/// A display surface an observer renders into.
pub trait RenderSink: Send + Sync {
    /// Clears the surface and replaces its contents with `text`.
    fn set_text(&self, text: &str) -> anyhow::Result<()>;

    fn append(&self, text: &str) -> anyhow::Result<()>;
}

/// In-memory, read-only text pane.
///
/// Clones share the same buffer, so the pane handed to an observer and the
/// one kept by whoever draws the screen always agree.
#[derive(Clone, Default, Debug)]
pub struct TextArea {
    buffer: Arc<Mutex<String>>,
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl RenderSink for TextArea {
    fn set_text(&self, text: &str) -> anyhow::Result<()> {
        let mut buffer = self.buffer.lock();
        buffer.clear();
        buffer.push_str(text);
        Ok(())
    }

    fn append(&self, text: &str) -> anyhow::Result<()> {
        self.buffer.lock().push_str(text);
        Ok(())
    }
}

impl<T: RenderSink + ?Sized> RenderSink for Arc<T> {
    fn set_text(&self, text: &str) -> anyhow::Result<()> {
        (**self).set_text(text)
    }

    fn append(&self, text: &str) -> anyhow::Result<()> {
        (**self).append(text)
    }
}
