//! Validated construction of CSS selector strings for the quokka toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector builder** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - The six simple-selector part kinds: type, ID, class, attribute,
//!     pseudo-class, pseudo-element
//!   - Compound-selector syntax order enforcement
//!   - Single-occurrence enforcement for type, ID, and pseudo-element parts
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, subsequent-sibling
//!
//! # Not implemented
//!
//! - Parsing of selector text (construction only)
//! - Matching selectors against a document tree
//! - Validation of part values — the builder inserts them verbatim
//!
//! # Example
//!
//! ```
//! use quokka_selectors::{Combinator, combine, element, id};
//!
//! let left = id("main").class("container")?;
//! let right = element("span");
//! let selector = combine(left, Combinator::Child, right);
//! assert_eq!(selector.render(), "#main.container > span");
//! # Ok::<(), quokka_selectors::SelectorError>(())
//! ```

/// Incremental selector construction per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod builder;

// Re-exports for convenience
pub use builder::{
    Combinator, PartKind, Selector, SelectorError, attribute, class, combine, element, id,
    pseudo_class, pseudo_element,
};
