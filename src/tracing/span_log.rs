// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{collections::HashMap, fmt::Debug, io::Write, sync::Mutex, time::SystemTime};

use derive_more::From;
use serde::{Deserialize, Serialize};
use tracing::{
    field::{Field, Visit},
    span::Attributes,
    Event, Id, Subscriber,
};
use tracing_subscriber::{layer::Context, registry::LookupSpan, Layer};

use crate::tracing::constants;

#[derive(Debug, Serialize, Deserialize)]
pub struct SpanEvent {
    pub timestamp: SystemTime,
    pub kind: SpanEventKind,
}

#[derive(Debug, Serialize, Deserialize, From)]
pub enum SpanEventKind {
    Start(StartEvent),
    Complete(CompleteEvent),
    Failed(FailedEvent),
    End(EndEvent),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StartEvent {
    pub id: u64,
    pub rank: String,
    pub origin: String,
    pub color: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompleteEvent {
    pub size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FailedEvent {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EndEvent {
    pub id: u64,
}

/// The SpanLogLayer is a Layer that understands the instrumentation in `Rank::compute_span` and writes one JSON
/// line per computation event to its destination. Nothing is analyzed here; the log is meant to be read later.
pub struct SpanLogLayer {
    writer: Box<Mutex<dyn Write + Send + Sync>>,
}

impl SpanLogLayer {
    pub fn new<W: Write + 'static + Send + Sync>(dest: W) -> SpanLogLayer {
        SpanLogLayer {
            writer: Box::new(Mutex::new(dest)),
        }
    }

    fn record_event<T: Into<SpanEventKind>>(&self, kind: T) {
        let event = SpanEvent {
            timestamp: SystemTime::now(),
            kind: kind.into(),
        };

        // A broken log must never take span computation down with it.
        if let Ok(mut writer) = self.writer.lock() {
            if serde_json::to_writer(&mut *writer, &event).is_ok() {
                let _ = writeln!(&mut *writer);
            }
        }
    }

    fn on_compute_span_enter(&self, attrs: &Attributes<'_>, id: &Id) {
        let mut attrs = attrs.extract_fields();
        let mut take = |key: &str| attrs.remove(key).unwrap_or_default();
        self.record_event(StartEvent {
            id: id.into_u64(),
            rank: take("rank"),
            origin: take("origin"),
            color: take("color"),
        });
    }

    fn on_compute_span_exit(&self, id: &Id) {
        self.record_event(EndEvent { id: id.into_u64() });
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }

    fn on_span_complete(&self, event: &Event<'_>) {
        let attrs = event.extract_fields();
        self.record_event(CompleteEvent {
            size: attrs
                .get("size")
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        });
    }

    fn on_span_failed(&self, event: &Event<'_>) {
        let mut attrs = event.extract_fields();
        self.record_event(FailedEvent {
            error: attrs.remove("error").unwrap_or_default(),
        });
    }
}

impl<S: Subscriber> Layer<S> for SpanLogLayer
where
    S: for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            if span.name() == constants::COMPUTE_SPAN {
                self.on_compute_span_enter(attrs, id);
            }
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(&id) {
            if span.name() == constants::COMPUTE_SPAN {
                self.on_compute_span_exit(&id);
            }
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let attrs = event.extract_fields();
        // Not all events have `event` keys (e.g. mundane logs from other modules).
        // Ignore the ones we don't care about.
        if let Some(event_str) = attrs.get("event") {
            match event_str.as_ref() {
                constants::SPAN_COMPLETE => self.on_span_complete(event),
                constants::SPAN_FAILED => self.on_span_failed(event),
                _ => {}
            }
        }
    }
}

trait HasExtractableFields {
    fn extract_fields(&self) -> HashMap<String, String>;
}

impl HasExtractableFields for Attributes<'_> {
    fn extract_fields(&self) -> HashMap<String, String> {
        let mut extractor = HashMapExtractor(HashMap::new());
        self.record(&mut extractor);
        extractor.0
    }
}

impl HasExtractableFields for Event<'_> {
    fn extract_fields(&self) -> HashMap<String, String> {
        let mut extractor = HashMapExtractor(HashMap::new());
        self.record(&mut extractor);
        extractor.0
    }
}

struct HashMapExtractor(HashMap<String, String>);

impl Visit for HashMapExtractor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.0
            .insert(field.name().to_owned(), format!("{:?}", value));
    }
}
