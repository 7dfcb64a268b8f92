use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crosscheck_core::impl_comparable;
use crosscheck_core::{Backend, InvocationFailure};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[allow(dead_code)]
pub struct LookupRequest {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct Party {
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
pub struct Root {
    pub name: Option<String>,
    pub note: Option<String>,
    #[serde(default)]
    pub parties: Vec<Party>,
}

impl_comparable!(Party { scalar name, scalar role });
impl_comparable!(Root { scalar name, scalar note, records parties });

/// Backend replaying canned replies in order
pub struct ScriptedBackend {
    label: String,
    replies: Mutex<VecDeque<Result<Option<serde_json::Value>, InvocationFailure>>>,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl ScriptedBackend {
    pub fn new(
        label: &str,
        replies: Vec<Result<Option<serde_json::Value>, InvocationFailure>>,
    ) -> Self {
        Self {
            label: label.to_string(),
            replies: Mutex::new(replies.into()),
            calls: Arc::default(),
        }
    }

    /// Shared count of `send` calls, readable after the backend is boxed
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

impl Backend for ScriptedBackend {
    fn label(&self) -> &str {
        &self.label
    }

    fn send(
        &self,
        _operation: &str,
        _request: &serde_json::Value,
    ) -> Result<Option<serde_json::Value>, InvocationFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(None))
    }
}
