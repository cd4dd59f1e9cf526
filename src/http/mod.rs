//! HTTP protocol layer
//!
//! Protocol-level building blocks shared by the handlers: MIME detection,
//! Range parsing, conditional requests, and response builders.

pub mod conditional;
pub mod mime;
pub mod range;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_403_response, build_404_response, build_405_response,
    build_416_response, build_500_response, build_options_response, build_redirect_response,
};
