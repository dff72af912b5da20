//! A capturing layer for asserting on spans and events in tests.
//!
//! Install [`CaptureLayer`] on a registry with
//! `tracing::subscriber::with_default` and inspect the snapshots afterwards.
//! Field values are stored as strings: `Debug` output for most values,
//! the raw text for string fields, and the formatted message under
//! `"message"` for events.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Field name → rendered value.
pub type Fields = BTreeMap<String, String>;

/// A closed span and the fields recorded against it over its lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from the callsite metadata.
    pub name: String,
    /// Fields set at creation or later through `Span::record`.
    pub fields: Fields,
}

impl SpanRecord {
    /// Returns the rendered value of `field`, if it was recorded.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// An emitted event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRecord {
    /// Event level.
    pub level: Level,
    /// Event target, normally the emitting module path.
    pub target: String,
    /// Event fields, including `"message"`.
    pub fields: Fields,
}

impl EventRecord {
    /// Returns the event message, if it had one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }

    /// Returns the rendered value of `field`, if it was recorded.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

#[derive(Default)]
struct Captured {
    spans: Vec<SpanRecord>,
    events: Vec<EventRecord>,
}

/// Layer that records closed spans and every event into shared storage.
///
/// Clones share storage, so keep one clone for assertions and hand another
/// to the subscriber.
///
/// # Examples
/// ```
/// use arbor_test_support::tracing::CaptureLayer;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let layer = CaptureLayer::default();
/// let subscriber = tracing_subscriber::registry().with(layer.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     let _span = tracing::info_span!("demo.span", answer = 42).entered();
///     tracing::info!(kind = "greeting", "hello");
/// });
///
/// let span = layer.span("demo.span").expect("span closed");
/// assert_eq!(span.field("answer"), Some("42"));
/// assert_eq!(layer.events()[0].message(), Some("hello"));
/// ```
#[derive(Clone, Default)]
pub struct CaptureLayer {
    captured: Arc<Mutex<Captured>>,
}

impl CaptureLayer {
    // A panicking assertion inside a test must not hide later captures.
    fn lock(&self) -> MutexGuard<'_, Captured> {
        self.captured.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the closed spans in closing order.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.lock().spans.clone()
    }

    /// Returns the first closed span called `name`.
    #[must_use]
    pub fn span(&self, name: &str) -> Option<SpanRecord> {
        self.lock()
            .spans
            .iter()
            .find(|span| span.name == name)
            .cloned()
    }

    /// Returns the events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.lock().events.clone()
    }

    /// Returns the events whose message equals `message`.
    #[must_use]
    pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
        self.lock()
            .events
            .iter()
            .filter(|event| event.message() == Some(message))
            .cloned()
            .collect()
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut record = SpanRecord {
            name: attrs.metadata().name().to_owned(),
            fields: Fields::new(),
        };
        attrs.record(&mut FieldWriter(&mut record.fields));
        span.extensions_mut().insert(record);
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(record) = span.extensions_mut().get_mut::<SpanRecord>() {
            values.record(&mut FieldWriter(&mut record.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let Some(record) = span.extensions_mut().remove::<SpanRecord>() else {
            return;
        };
        self.lock().spans.push(record);
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::new();
        event.record(&mut FieldWriter(&mut fields));
        let metadata = event.metadata();
        self.lock().events.push(EventRecord {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            fields,
        });
    }
}

struct FieldWriter<'a>(&'a mut Fields);

impl Visit for FieldWriter<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}
