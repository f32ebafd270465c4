//! Test helpers shared by the unit tests.

use std::{
  collections::HashMap,
  fmt,
  sync::{Arc, Mutex},
};

use tracing::{
  Event, Level, Metadata, Subscriber,
  field::{Field, Visit},
  span::{Attributes, Id, Record},
};

/// Subscriber that keeps every event it sees.
#[derive(Clone, Default)]
pub(crate) struct RecordingSubscriber {
  events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl RecordingSubscriber {
  pub(crate) fn events(&self) -> Vec<CapturedEvent> {
    self.events.lock().expect("lock").clone()
  }

  pub(crate) fn closing_event(&self, primitive: &str) -> Option<CapturedEvent> {
    self.events().into_iter().find(|event| event.primitive.as_deref() == Some(primitive))
  }
}

impl Subscriber for RecordingSubscriber {
  fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
    true
  }

  fn new_span(&self, _: &Attributes<'_>) -> Id {
    Id::from_u64(1)
  }

  fn record(&self, _: &Id, _: &Record<'_>) {}

  fn record_follows_from(&self, _: &Id, _: &Id) {}

  fn event(&self, event: &Event<'_>) {
    let metadata = event.metadata();
    let mut captured = CapturedEvent {
      target: metadata.target().to_owned(),
      level: Some(*metadata.level()),
      ..CapturedEvent::default()
    };
    event.record(&mut captured);
    self.events.lock().expect("lock").push(captured);
  }

  fn enter(&self, _: &Id) {}

  fn exit(&self, _: &Id) {}
}

/// Target, level, primitive name and numeric fields of one event.
#[derive(Clone, Debug, Default)]
pub(crate) struct CapturedEvent {
  pub(crate) target:    String,
  pub(crate) level:     Option<Level>,
  pub(crate) primitive: Option<String>,
  counters:             HashMap<String, u64>,
}

impl CapturedEvent {
  pub(crate) fn counter(&self, name: &str) -> Option<u64> {
    self.counters.get(name).copied()
  }
}

impl Visit for CapturedEvent {
  fn record_str(&mut self, field: &Field, value: &str) {
    if field.name() == "primitive" {
      self.primitive = Some(value.to_owned());
    }
  }

  fn record_u64(&mut self, field: &Field, value: u64) {
    self.counters.insert(field.name().to_owned(), value);
  }

  fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}
