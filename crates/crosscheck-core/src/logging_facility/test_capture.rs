//! In-memory event capture for logging assertions
//!
//! Records every event so tests can check which operations started, ended
//! or failed, and for which category and backend.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::types::schema::{FIELD_CATEGORY, FIELD_EVENT, FIELD_OP};

/// One recorded event.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub op: Option<String>,
    pub event: Option<String>,
    pub category: Option<String>,
    /// Every field by name, `message` included
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn from_fields(level: Level, fields: HashMap<String, String>) -> Self {
        Self {
            level,
            op: fields.get(FIELD_OP).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            category: fields.get(FIELD_CATEGORY).cloned(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Strings are kept unquoted; everything else uses its `Debug` form.
#[derive(Default)]
struct Fields(HashMap<String, String>);

impl Visit for Fields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

type Buffer = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer(Buffer);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);
        let captured = CapturedEvent::from_fields(*event.metadata().level(), fields.0);
        if let Ok(mut events) = self.0.lock() {
            events.push(captured);
        }
    }
}

/// Shared handle onto the captured events
#[derive(Clone)]
pub struct TestCapture {
    events: Buffer,
}

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.filtered(|e| e.op.as_deref() == Some(op))
    }

    pub fn events_for_category(&self, category: &str) -> Vec<CapturedEvent> {
        self.filtered(|e| e.category.as_deref() == Some(category))
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.filtered(predicate).len()
    }

    /// # Panics
    ///
    /// Panics when no event carries both `op` and `event`
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let matching = self.count_events(|e| {
            e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event)
        });
        assert!(
            matching > 0,
            "no {}/{} event among {} captured",
            op,
            event,
            self.events().len()
        );
    }

    fn filtered<F>(&self, predicate: F) -> Vec<CapturedEvent>
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().into_iter().filter(|e| predicate(e)).collect()
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (once per process)
/// and return the shared handle.
///
/// Tests in one binary share the buffer, so filter on a unique op or
/// category name.
///
/// ```
/// use crosscheck_core::logging_facility::test_capture::init_test_capture;
/// use crosscheck_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_capture_op", category = "CodeValues");
/// capture.assert_event_exists("doc_capture_op", "start");
/// assert_eq!(capture.events_for_category("CodeValues").len(), 1);
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let events = Buffer::default();
            tracing_subscriber::registry()
                .with(CaptureLayer(events.clone()))
                .init();
            TestCapture { events }
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_fields_are_lifted() {
        let fields: HashMap<String, String> = [
            ("op", "run_category"),
            ("event", "end"),
            ("category", "CodeValues"),
            ("diff_count", "3"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let event = CapturedEvent::from_fields(Level::INFO, fields);
        assert_eq!(event.op.as_deref(), Some("run_category"));
        assert_eq!(event.category.as_deref(), Some("CodeValues"));
        assert_eq!(event.field("diff_count"), Some("3"));
        assert_eq!(event.field("backend"), None);
    }
}
