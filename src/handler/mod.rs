//! Request handler module
//!
//! Request dispatch and the static file responder. Every request is
//! handled independently; there is no shared mutable state.

pub mod listing;
pub mod resolve;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
