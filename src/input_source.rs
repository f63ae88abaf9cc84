use std::sync::Arc;

use parking_lot::Mutex;

/// An input control the form reads its values from.
pub trait InputSource: Send + Sync {
    fn text(&self) -> String;
}

/// In-memory single-line text field. Clones share the same value.
#[derive(Clone, Default, Debug)]
pub struct TextField {
    value: Arc<Mutex<String>>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(text.into())),
        }
    }

    pub fn set_text(&self, text: impl Into<String>) {
        *self.value.lock() = text.into();
    }
}

impl InputSource for TextField {
    fn text(&self) -> String {
        self.value.lock().clone()
    }
}

impl<T: InputSource + ?Sized> InputSource for Arc<T> {
    fn text(&self) -> String {
        (**self).text()
    }
}
