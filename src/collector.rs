//! SAX Collector
//!
//! Terminal sink that records an owned copy of every event it
//! receives, for inspecting what actually came out of a pipeline.
//! It never re-emits: collected events are read back with
//! [`events`](SaxCollector::events) or drained with
//! [`take_events`](SaxCollector::take_events).

use crate::error::SaxError;
use crate::events::{SaxEvent, SaxEventKind};
use crate::handler::SaxHandler;

/// Sink that collects events as they arrive
pub struct SaxCollector {
    /// Collected events, in delivery order
    events: Vec<SaxEvent<'static>>,
}

impl SaxCollector {
    /// Create a new collector
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(256),
        }
    }

    /// Create with estimated capacity
    pub fn with_capacity(events: usize) -> Self {
        Self {
            events: Vec::with_capacity(events),
        }
    }

    /// Get the collected events as a slice
    pub fn events(&self) -> &[SaxEvent<'static>] {
        &self.events
    }

    /// Take the collected events, leaving the collector empty
    pub fn take_events(&mut self) -> Vec<SaxEvent<'static>> {
        std::mem::take(&mut self.events)
    }

    /// Get number of collected events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Get the kind sequence of the collected events
    pub fn kinds(&self) -> Vec<SaxEventKind> {
        self.events.iter().map(SaxEvent::kind).collect()
    }
}

impl Default for SaxCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl SaxHandler for SaxCollector {
    fn event(&mut self, event: SaxEvent<'_>) -> Result<(), SaxError> {
        self.events.push(event.into_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EndElement, StartElement};
    use crate::handler::send_all;

    #[test]
    fn test_collects_in_order() {
        let mut collector = SaxCollector::new();
        send_all(
            vec![
                SaxEvent::StartElement(StartElement::new("a", vec![])),
                SaxEvent::Characters("hello".into()),
                SaxEvent::EndElement(EndElement::new("a")),
            ],
            &mut collector,
        )
        .unwrap();

        assert_eq!(collector.event_count(), 3);
        assert_eq!(
            collector.kinds(),
            vec![
                SaxEventKind::StartElement,
                SaxEventKind::Characters,
                SaxEventKind::EndElement,
            ]
        );
        assert_eq!(collector.events()[1].as_text(), Some("hello"));
    }

    #[test]
    fn test_take_events_drains() {
        let mut collector = SaxCollector::with_capacity(4);
        collector.event(SaxEvent::Comment("c".into())).unwrap();

        let taken = collector.take_events();
        assert_eq!(taken, vec![SaxEvent::Comment("c".into())]);
        assert_eq!(collector.event_count(), 0);
        assert!(collector.events().is_empty());
    }

    #[test]
    fn test_collected_events_outlive_source() {
        let collected = {
            let text = String::from("transient");
            let mut collector = SaxCollector::new();
            collector
                .event(SaxEvent::Characters(text.as_str().into()))
                .unwrap();
            collector.take_events()
        };
        assert_eq!(collected[0].as_text(), Some("transient"));
    }
}
