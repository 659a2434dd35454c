//! Handler Contract
//!
//! The synchronous visit contract every pipeline stage implements.
//!
//! A handler receives one [`SaxEvent`] per call and returns before the
//! producer delivers the next event. Selective behavior (filters,
//! sinks) is expressed as explicit per-kind match arms over the event
//! enum, not as overridable per-event methods.

use crate::error::SaxError;
use crate::events::SaxEvent;

/// Trait for receiving SAX pipeline events
///
/// Implement this trait to consume an event stream. The producer calls
/// [`event`](Self::event) once per notification, in document order, on
/// a single thread; the call returns before the next event is
/// delivered.
///
/// # Errors
///
/// A handler that cannot process an event returns a [`SaxError`].
/// Intermediate stages propagate downstream errors unchanged, so a
/// failure surfaces to the producer out of the delivery call that
/// triggered it.
pub trait SaxHandler {
    /// Handle a single event
    fn event(&mut self, event: SaxEvent<'_>) -> Result<(), SaxError>;
}

impl<H: SaxHandler + ?Sized> SaxHandler for &mut H {
    fn event(&mut self, event: SaxEvent<'_>) -> Result<(), SaxError> {
        (**self).event(event)
    }
}

impl<H: SaxHandler + ?Sized> SaxHandler for Box<H> {
    fn event(&mut self, event: SaxEvent<'_>) -> Result<(), SaxError> {
        (**self).event(event)
    }
}

/// Terminal sink that accepts and discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHandler;

impl SaxHandler for NullHandler {
    fn event(&mut self, _event: SaxEvent<'_>) -> Result<(), SaxError> {
        Ok(())
    }
}

/// Deliver a sequence of events to a handler
///
/// Stops at the first failing event and returns its error; later
/// events are not delivered.
pub fn send_all<'a, I, H>(events: I, handler: &mut H) -> Result<(), SaxError>
where
    I: IntoIterator<Item = SaxEvent<'a>>,
    H: SaxHandler,
{
    for event in events {
        handler.event(event)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EndElement, StartElement};

    struct Counter {
        seen: usize,
        fail_at: Option<usize>,
    }

    impl Counter {
        fn new(fail_at: Option<usize>) -> Self {
            Counter { seen: 0, fail_at }
        }
    }

    impl SaxHandler for Counter {
        fn event(&mut self, _event: SaxEvent<'_>) -> Result<(), SaxError> {
            if self.fail_at == Some(self.seen) {
                return Err(SaxError::new("counter limit"));
            }
            self.seen += 1;
            Ok(())
        }
    }

    fn sample_events() -> Vec<SaxEvent<'static>> {
        vec![
            SaxEvent::StartElement(StartElement::new("a", vec![])),
            SaxEvent::Characters("x".into()),
            SaxEvent::EndElement(EndElement::new("a")),
        ]
    }

    #[test]
    fn test_null_handler_accepts_everything() {
        let mut sink = NullHandler;
        assert!(send_all(sample_events(), &mut sink).is_ok());
    }

    #[test]
    fn test_send_all_delivers_in_order() {
        let mut counter = Counter::new(None);
        send_all(sample_events(), &mut counter).unwrap();
        assert_eq!(counter.seen, 3);
    }

    #[test]
    fn test_send_all_stops_at_first_error() {
        let mut counter = Counter::new(Some(1));
        let err = send_all(sample_events(), &mut counter).unwrap_err();
        assert_eq!(err.message(), "counter limit");
        // Only the event before the failure was processed.
        assert_eq!(counter.seen, 1);
    }

    #[test]
    fn test_borrowed_handler_retains_ownership() {
        let mut counter = Counter::new(None);
        {
            let mut borrowed = &mut counter;
            send_all(sample_events(), &mut borrowed).unwrap();
        }
        // Caller still owns the handler after the borrow ends.
        assert_eq!(counter.seen, 3);
    }

    #[test]
    fn test_boxed_dyn_handler() {
        let mut sink: Box<dyn SaxHandler> = Box::new(Counter::new(None));
        assert!(sink.event(SaxEvent::Characters("x".into())).is_ok());
    }
}
