//! In-memory event capture for log assertions in tests.
//!
//! One capture is installed as the global subscriber per test binary and
//! shared by every test in it, so assertions should filter on values unique
//! to the test (an op name, an input path).

use fpdiff_core_types::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event. Every field value is kept in its rendered form.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn from_event(event: &Event<'_>) -> Self {
        let mut fields = HashMap::new();
        event.record(&mut FieldRecorder(&mut fields));
        Self {
            level: *event.metadata().level(),
            component: fields.get(FIELD_COMPONENT).cloned(),
            op: fields.get(FIELD_OP).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            fields,
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

// Integers and bools fall through to `record_debug`, whose output matches `Display`.
struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldRecorder<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}

/// Shared handle onto the captured events.
#[derive(Clone, Default)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// A capture and the layer that feeds it.
    pub fn new() -> (Self, CaptureLayer) {
        let capture = Self::default();
        let layer = CaptureLayer {
            capture: capture.clone(),
        };
        (capture, layer)
    }

    // A test that panicked while holding the lock must not hide events from the rest.
    fn lock(&self) -> MutexGuard<'_, Vec<CapturedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        self.lock().clone()
    }

    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.lock()
            .iter()
            .filter(|e| e.op.as_deref() == Some(op))
            .cloned()
            .collect()
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.lock().iter().filter(|e| predicate(e)).count()
    }

    /// # Panics
    ///
    /// If no captured event has this `op` and `event`.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.lock();
        let found = events
            .iter()
            .any(|e| e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event));
        assert!(
            found,
            "Expected event op={op} event={event} not found in {} captured events",
            events.len()
        );
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

/// Layer that appends every event it sees to a [`TestCapture`].
pub struct CaptureLayer {
    capture: TestCapture,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.capture.lock().push(CapturedEvent::from_event(event));
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture as the global subscriber on first call and return it.
///
/// ```
/// use fpdiff_core::log_op_start;
/// use fpdiff_core::logging_facility::test_capture::init_test_capture;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// capture.assert_event_exists("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (capture, layer) = TestCapture::new();
            // Loses to a subscriber installed earlier in the same process.
            let _ = tracing_subscriber::registry().with(layer).try_init();
            capture
        })
        .clone()
}
