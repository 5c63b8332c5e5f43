use std::sync::Arc;

use hindo_core::VocabularyTable;

/// Shared handle to the table loaded at startup
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<VocabularyTable>,
}

impl AppState {
    pub fn new(table: VocabularyTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}
