//! Plain data objects and a JSON serialization bridge for the quokka toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Shapes** - plain data values with computed accessors ([`Rectangle`])
//! - **JSON bridge** - canonical serialization to text and typed
//!   reconstruction from text ([`to_json`], [`from_json`])
//!
//! Everything is synchronous and allocation-light; there is no I/O here,
//! only conversions.

/// Typed value to JSON text conversions.
pub mod json;
/// Plain geometric value types.
pub mod shapes;

// Re-exports for convenience
pub use json::{JsonError, from_json, to_json};
pub use shapes::Rectangle;
