//! Canned `LlmBackend` for tests. Never touches the network.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{LlmBackend, LlmError};

/// Replies with a fixed resume or JD payload depending on which extraction
/// prompt it receives.
pub struct StubLlm {
    resume_reply: String,
    jd_reply: String,
    calls: AtomicUsize,
}

impl StubLlm {
    pub fn new(resume_reply: impl Into<String>, jd_reply: impl Into<String>) -> Self {
        Self {
            resume_reply: resume_reply.into(),
            jd_reply: jd_reply.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmBackend for StubLlm {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if prompt.contains("Resume Text:") {
            Ok(self.resume_reply.clone())
        } else {
            Ok(self.jd_reply.clone())
        }
    }
}

/// Fails every call the way an upstream outage would.
pub struct FailingLlm;

#[async_trait]
impl LlmBackend for FailingLlm {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        })
    }
}
