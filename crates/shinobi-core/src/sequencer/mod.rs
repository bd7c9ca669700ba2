//! Infinite-scroll pagination: a pure state machine plus an async driver.

mod paginator;
mod session;

pub use paginator::{Completion, PageRequest, Paginator, SequencerState, FIRST_PAGE};
pub use session::{ListingSession, SessionHandle};
