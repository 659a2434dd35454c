//! Embedded Stream Filter
//!
//! Pass-through filter for embedding a complete document's event
//! stream into an existing stream of events.
//!
//! ## Architecture
//!
//! ```text
//! producer ---> EmbeddedFilter ---> downstream SaxHandler
//!                    |
//!                    x  StartDocument / EndDocument
//!                    x  StartDtd / EndDtd
//!                    x  Comment while inside the internal subset
//! ```
//!
//! Everything not on the suppression list is forwarded unchanged and in
//! order, so splicing the filtered stream into an enclosing document
//! never produces a nested document boundary or a stray DOCTYPE.

use crate::error::SaxError;
use crate::events::SaxEvent;
use crate::handler::SaxHandler;

/// Position relative to the DOCTYPE internal subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DtdState {
    /// Not inside a StartDtd..EndDtd bracket
    Outside,
    /// Between StartDtd and the matching EndDtd
    Inside,
}

/// Pass-through filter that strips document and DTD boundaries
///
/// Sits between an event producer and a downstream handler. All
/// structural and content events pass through unchanged except:
///
/// - `StartDocument` / `EndDocument`: suppressed, no state change
/// - `StartDtd` / `EndDtd`: suppressed, toggling the subset state
/// - `Comment`: suppressed only while inside the internal subset
///
/// The filter holds exactly one piece of state, the two-state subset
/// position, and raises no errors of its own: a downstream failure on a
/// forwarded event propagates unchanged out of the same [`event`]
/// delivery, as if the filter were absent.
///
/// The downstream handler is supplied at construction and fixed for the
/// filter's lifetime. Pass `&mut handler` to keep ownership at the call
/// site, or move a handler in and recover it with
/// [`into_inner`](Self::into_inner).
///
/// [`event`]: SaxHandler::event
pub struct EmbeddedFilter<H> {
    downstream: H,
    dtd: DtdState,
}

impl<H: SaxHandler> EmbeddedFilter<H> {
    /// Create a filter forwarding into the given downstream handler
    pub fn new(downstream: H) -> Self {
        EmbeddedFilter {
            downstream,
            dtd: DtdState::Outside,
        }
    }

    /// Check if the filter is currently inside the internal subset
    ///
    /// False before the first `StartDtd`, true until the matching
    /// `EndDtd`, false after it. A stream that ends without `EndDtd`
    /// leaves this permanently true, and comment suppression stays
    /// active for the rest of the stream.
    pub fn is_in_dtd(&self) -> bool {
        self.dtd == DtdState::Inside
    }

    /// Get a reference to the downstream handler
    pub fn get_ref(&self) -> &H {
        &self.downstream
    }

    /// Get a mutable reference to the downstream handler
    pub fn get_mut(&mut self) -> &mut H {
        &mut self.downstream
    }

    /// Consume the filter, returning the downstream handler
    pub fn into_inner(self) -> H {
        self.downstream
    }
}

impl<H: SaxHandler> SaxHandler for EmbeddedFilter<H> {
    fn event(&mut self, event: SaxEvent<'_>) -> Result<(), SaxError> {
        match event {
            // Boundaries of the embedded document never reach the
            // enclosing stream.
            SaxEvent::StartDocument | SaxEvent::EndDocument => Ok(()),
            SaxEvent::StartDtd { .. } => {
                self.dtd = DtdState::Inside;
                Ok(())
            }
            SaxEvent::EndDtd => {
                self.dtd = DtdState::Outside;
                Ok(())
            }
            SaxEvent::Comment(_) if self.dtd == DtdState::Inside => Ok(()),
            other => self.downstream.event(other),
        }
    }
}
