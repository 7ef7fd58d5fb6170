//! Backend Error Module
//!
//! Every failure a handler can produce is an `ApiError`. The error knows its
//! HTTP status and its public message, and `IntoResponse` turns it into the
//! JSON envelope. There is no other error path to the wire.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and extractor rejection conversions
//! ```
//!
//! # Response Format
//!
//! ```json
//! { "msg": "Bad username or password", "status": 401 }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
