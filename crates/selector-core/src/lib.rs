//! # selector-core
//!
//! Data model and chainable builder for CSS complex selectors.
//!
//! A selector is assembled part by part. Parts belong to one of six
//! categories that must appear in a fixed order:
//!
//! ```text
//! element  #id  .class  [attribute]  :pseudo-class  ::pseudo-element
//! ```
//!
//! Adding a part of an earlier category after a later one, or repeating one of
//! the single-occurrence categories (element, id, pseudo-element), is refused
//! with a [`SelectorError`] and leaves the selector untouched.
//!
//! ## Quick Start
//!
//! ```rust
//! use selector_core::SelectorBuilder;
//!
//! let mut link = SelectorBuilder::new();
//! link.element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//!
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//! # Ok::<(), selector_core::SelectorError>(())
//! ```
//!
//! ## Combinators
//!
//! Selectors are joined with a [`Combinator`]. The rendered form always puts a
//! single space on each side of the symbol, so the descendant combinator
//! (itself a space) shows up as three spaces.
//!
//! ## Modules
//!
//! - [`builder`]: the chainable [`SelectorBuilder`]
//! - [`selector`]: compound and complex selector structures, specificity
//! - [`category`]: part categories and their ordering
//! - [`combinator`]: combinators and symbol parsing
//! - [`error`]: error types

pub mod builder;
pub mod category;
pub mod combinator;
pub mod error;
pub mod selector;

pub use builder::SelectorBuilder;
pub use category::{Categories, Category};
pub use combinator::Combinator;
pub use error::{Result, SelectorError};
pub use selector::{ComplexSelector, CompoundSelector, Specificity};
