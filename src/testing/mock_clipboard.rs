use std::cell::{Cell, RefCell};

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Mock clipboard for testing.
pub struct MockClipboard {
    pub written_text: RefCell<Option<String>>,
    pub should_fail: Cell<bool>,
    pub available: Cell<bool>,
    pub attempts: Cell<usize>,
}

impl Default for MockClipboard {
    fn default() -> Self {
        Self {
            written_text: RefCell::new(None),
            should_fail: Cell::new(false),
            available: Cell::new(true),
            attempts: Cell::new(0),
        }
    }
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.set(fail);
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    pub fn get_written_text(&self) -> Option<String> {
        self.written_text.borrow().clone()
    }

    pub fn write_attempts(&self) -> usize {
        self.attempts.get()
    }
}

impl ClipboardWriter for MockClipboard {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn is_available(&self) -> bool {
        self.available.get()
    }

    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.attempts.set(self.attempts.get() + 1);
        if self.should_fail.get() {
            return Err(AppError::ClipboardError("Mock clipboard error".to_string()));
        }
        *self.written_text.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
