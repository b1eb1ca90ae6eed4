//! Message formatting module - CTRF report to Teams payloads.
//!
//! Every function here is pure: it borrows the report and returns a freshly
//! built document. Delivery lives in the `teams` module.
//!
//! # Module Organization
//!
//! - `types` - Card types (MessageCard, Section, Fact) and the status style table
//! - `helpers` - Environment resolution, duration and result text
//! - `message_card` - Run summary, flaky digest and AI summary cards
//! - `adaptive` - Adaptive card with donut chart
//! - `plain` - Plain-text failed test listing

mod adaptive;
mod helpers;
mod message_card;
mod plain;
pub mod types;

// Re-export the document type handed to delivery
pub use types::Notification;

// Re-export builders
pub use adaptive::format_results_adaptive_card;
pub use message_card::{format_ai_summary_for_test, format_flaky_tests_message, format_results_message};
pub use plain::format_failed_tests_message;
