//! State objects driving the two pipeline stages
//!
//! # Components
//!
//! - `CrawlWindow`: the calendar date range one index traversal covers
//! - `PageCursor`: pagination position and termination rules for a traversal
//! - `FetchAttempt`: retry budget for resolving one article URL

mod attempt;
mod window;

// Re-export main types
pub use attempt::FetchAttempt;
pub use window::{CrawlWindow, PageCursor};
