//! Assist provider test utilities

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use assist_lsp::assist::{AssistError, AssistProvider, AssistRequest, SourceChange, SourceEdit};

/// Provider that answers every request with one assist describing the
/// request, and counts how often it was queried
#[derive(Default)]
pub struct CountingProvider {
    calls: AtomicUsize,
    fail: bool,
}

#[allow(dead_code)]
impl CountingProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AssistProvider for CountingProvider {
    fn get_assists(&self, request: &AssistRequest) -> Result<Vec<SourceChange>, AssistError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(AssistError::Backend("analysis server is not running".to_string()));
        }

        Ok(vec![SourceChange::new(
            format!("Assist #{call} at {}+{}", request.offset, request.length),
            vec![SourceEdit {
                offset: request.offset,
                length: request.length,
                replacement: "replaced".to_string(),
            }],
        )])
    }
}
