//! rustysax - SAX event pipeline components
//!
//! Handler-level building blocks for event-based XML processing:
//! the event types, a synchronous handler contract, and a pass-through
//! filter for embedding one document's event stream inside another.
//!
//! ## Architecture
//!
//! ```text
//! event producer ---> EmbeddedFilter ---> SaxHandler (downstream)
//!                          |
//!                          x  StartDocument / EndDocument
//!                          x  StartDtd / EndDtd
//!                          x  Comment inside the internal subset
//! ```
//!
//! A producer (a parser front end or a recorded test stream) delivers
//! [`SaxEvent`]s one at a time to a [`SaxHandler`]. The
//! [`EmbeddedFilter`] forwards every structural and content event
//! unchanged to its downstream handler, but strips the document and
//! DOCTYPE boundary events, so the surviving sequence can be spliced
//! into an enclosing stream without nesting a document inside a
//! document.
//!
//! ## Event Types
//!
//! - `StartDocument` / `EndDocument` - document boundaries
//! - `StartElement` / `EndElement` - element tags with attributes
//! - `Characters` / `IgnorableWhitespace` / `CData` - character data
//! - `Comment` - comment content
//! - `ProcessingInstruction` - PI target and data
//! - `StartPrefixMapping` / `EndPrefixMapping` - prefix scopes
//! - `StartDtd` / `EndDtd` - DOCTYPE internal subset brackets
//!
//! ## Error Model
//!
//! Handlers return `Result<(), SaxError>`. Filters raise no errors of
//! their own; a downstream failure propagates unchanged out of the
//! delivery call that triggered it.

mod collector;
mod embed;
mod error;
mod events;
mod handler;

pub use collector::SaxCollector;
pub use embed::EmbeddedFilter;
pub use error::SaxError;
pub use events::{Attribute, EndElement, SaxEvent, SaxEventKind, StartElement};
pub use handler::{send_all, NullHandler, SaxHandler};
