//! Post documents and how their fields are displayed.

pub mod format;
mod models;

pub use format::{
    display_quantity, excerpt, format_date, format_date_time, timeline, Iteration,
    IterationDuration,
};
pub use models::{PostDetail, PostSummary, Thought, Timestamp, ValidationError};
