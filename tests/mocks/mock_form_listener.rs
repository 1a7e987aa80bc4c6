use portfolio_contact::domain::FieldErrors;
use portfolio_contact::form::{FormListener, Notice};
use std::sync::Mutex;

/// Records every side effect the form fires.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockFormListener {
    pub field_errors: Mutex<Vec<FieldErrors>>,
    pub notices: Mutex<Vec<Notice>>,
    pub cleared: Mutex<usize>,
}

#[allow(dead_code)]
impl MockFormListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cleared_count(&self) -> usize {
        *self.cleared.lock().unwrap()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last_field_errors(&self) -> Option<FieldErrors> {
        self.field_errors.lock().unwrap().last().cloned()
    }
}

impl FormListener for MockFormListener {
    fn on_field_errors(&self, errors: &FieldErrors) {
        self.field_errors.lock().unwrap().push(errors.clone());
    }

    fn on_notice(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    fn on_cleared(&self) {
        *self.cleared.lock().unwrap() += 1;
    }
}
