//! Character catalog core: normalizes the upstream character API, pages
//! through it for an infinite-scroll consumer, and filters and formats the
//! results for display.

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod sequencer;
pub mod view;

pub use error::ApiError;
