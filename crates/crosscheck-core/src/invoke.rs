//! Dual backend invocation.
//!
//! A [`DualInvoker`] sends one request to both backends, left first, and
//! always attempts the second call even when the first one failed. After
//! both attempts it sleeps for the configured throttling delay.

use std::thread;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::InvocationFailure;
use crate::{log_op_end, log_op_error, log_op_start};

/// Default pause after each pair of calls
pub const DEFAULT_DELAY: Duration = Duration::from_millis(5000);

/// A service that can answer an operation request.
///
/// Implementations return `Ok(None)` for an absent response (a null or
/// empty body) and an [`InvocationFailure`] when no usable response came
/// back. They must not panic on transport problems.
pub trait Backend {
    /// Short label used in report headers and failure messages
    fn label(&self) -> &str;

    /// Send `request` for `operation` and return the raw JSON response
    fn send(
        &self,
        operation: &str,
        request: &serde_json::Value,
    ) -> Result<Option<serde_json::Value>, InvocationFailure>;
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn send(
        &self,
        operation: &str,
        request: &serde_json::Value,
    ) -> Result<Option<serde_json::Value>, InvocationFailure> {
        (**self).send(operation, request)
    }
}

/// Both sides of one invocation.
#[derive(Debug)]
pub struct DualResponse<R> {
    pub left: Option<R>,
    pub right: Option<R>,
    /// Failures in invocation order (left before right)
    pub failures: Vec<InvocationFailure>,
}

impl<R> DualResponse<R> {
    /// Neither side produced a usable response
    pub fn both_absent(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Sends the same request to a left and a right backend.
pub struct DualInvoker {
    left: Box<dyn Backend>,
    right: Box<dyn Backend>,
    delay: Duration,
}

impl DualInvoker {
    pub fn new(left: Box<dyn Backend>, right: Box<dyn Backend>) -> Self {
        Self {
            left,
            right,
            delay: DEFAULT_DELAY,
        }
    }

    /// Override the post-call delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn left_label(&self) -> &str {
        self.left.label()
    }

    pub fn right_label(&self) -> &str {
        self.right.label()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Invoke both backends with `request` and decode each response as `R`.
    pub fn invoke<Q, R>(&self, operation: &str, request: &Q) -> DualResponse<R>
    where
        Q: Serialize,
        R: DeserializeOwned,
    {
        let start = Instant::now();
        log_op_start!("dual_invoke", operation = operation);

        let response = match serde_json::to_value(request) {
            Ok(payload) => {
                tracing::info!(operation = operation, request = %payload, "sending request");
                let mut failures = Vec::new();
                let left = call(self.left.as_ref(), operation, &payload, &mut failures);
                let right = call(self.right.as_ref(), operation, &payload, &mut failures);
                DualResponse {
                    left,
                    right,
                    failures,
                }
            }
            Err(err) => DualResponse {
                left: None,
                right: None,
                failures: [self.left.label(), self.right.label()]
                    .iter()
                    .map(|backend| InvocationFailure::Serialization {
                        backend: backend.to_string(),
                        message: err.to_string(),
                    })
                    .collect(),
            },
        };

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        log_op_end!(
            "dual_invoke",
            duration_ms = start.elapsed().as_millis() as u64,
            operation = operation,
            failure_count = response.failures.len()
        );
        response
    }
}

fn call<R: DeserializeOwned>(
    backend: &dyn Backend,
    operation: &str,
    payload: &serde_json::Value,
    failures: &mut Vec<InvocationFailure>,
) -> Option<R> {
    let start = Instant::now();
    log_op_start!("backend_send", backend = backend.label(), operation = operation);

    let decoded = backend.send(operation, payload).and_then(|body| match body {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => serde_json::from_value::<R>(value).map(Some).map_err(|e| {
            InvocationFailure::Malformed {
                backend: backend.label().to_string(),
                message: e.to_string(),
            }
        }),
    });

    let elapsed = start.elapsed().as_millis() as u64;
    match decoded {
        Ok(value) => {
            log_op_end!(
                "backend_send",
                duration_ms = elapsed,
                backend = backend.label(),
                absent = value.is_none()
            );
            value
        }
        Err(failure) => {
            log_op_error!(
                "backend_send",
                failure.clone(),
                duration_ms = elapsed,
                backend = backend.label()
            );
            failures.push(failure);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Canned {
        label: &'static str,
        reply: Result<Option<serde_json::Value>, InvocationFailure>,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl Backend for Canned {
        fn label(&self) -> &str {
            self.label
        }

        fn send(
            &self,
            operation: &str,
            _request: &serde_json::Value,
        ) -> Result<Option<serde_json::Value>, InvocationFailure> {
            self.calls
                .borrow_mut()
                .push(format!("{}:{}", self.label, operation));
            self.reply.clone()
        }
    }

    #[derive(Serialize)]
    struct Request {
        id: u32,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Reply {
        name: String,
    }

    fn invoker(
        left: Result<Option<serde_json::Value>, InvocationFailure>,
        right: Result<Option<serde_json::Value>, InvocationFailure>,
    ) -> (DualInvoker, Rc<RefCell<Vec<String>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let invoker = DualInvoker::new(
            Box::new(Canned {
                label: "API",
                reply: left,
                calls: calls.clone(),
            }),
            Box::new(Canned {
                label: "WM",
                reply: right,
                calls: calls.clone(),
            }),
        )
        .with_delay(Duration::ZERO);
        (invoker, calls)
    }

    #[test]
    fn test_both_sides_decoded_in_order() {
        let (invoker, calls) = invoker(
            Ok(Some(json!({"name": "alpha"}))),
            Ok(Some(json!({"name": "beta"}))),
        );
        let response: DualResponse<Reply> = invoker.invoke("CodeValues", &Request { id: 1 });

        assert_eq!(response.left.map(|r| r.name), Some("alpha".to_string()));
        assert_eq!(response.right.map(|r| r.name), Some("beta".to_string()));
        assert!(response.failures.is_empty());
        assert_eq!(*calls.borrow(), vec!["API:CodeValues", "WM:CodeValues"]);
    }

    #[test]
    fn test_left_failure_still_calls_right() {
        let (invoker, calls) = invoker(
            Err(InvocationFailure::Timeout {
                backend: "API".into(),
                message: "30s elapsed".into(),
            }),
            Ok(Some(json!({"name": "beta"}))),
        );
        let response: DualResponse<Reply> = invoker.invoke("CourtList", &Request { id: 2 });

        assert!(response.left.is_none());
        assert!(response.right.is_some());
        assert_eq!(response.failures.len(), 1);
        assert_eq!(response.failures[0].backend(), "API");
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_null_body_is_absent_not_failure() {
        let (invoker, _) = invoker(Ok(Some(serde_json::Value::Null)), Ok(None));
        let response: DualResponse<Reply> = invoker.invoke("GetDocument", &Request { id: 3 });

        assert!(response.both_absent());
        assert!(response.failures.is_empty());
    }

    #[test]
    fn test_undecodable_body_is_malformed() {
        let (invoker, _) = invoker(Ok(Some(json!({"unexpected": 1}))), Ok(None));
        let response: DualResponse<Reply> = invoker.invoke("GetDocument", &Request { id: 4 });

        assert_eq!(response.failures.len(), 1);
        assert!(matches!(
            response.failures[0],
            InvocationFailure::Malformed { ref backend, .. } if backend == "API"
        ));
    }

    #[test]
    fn test_default_delay_is_five_seconds() {
        let (invoker, _) = invoker(Ok(None), Ok(None));
        let invoker = invoker.with_delay(DEFAULT_DELAY);
        assert_eq!(invoker.delay(), Duration::from_secs(5));
    }
}
