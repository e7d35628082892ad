//! Error types for selector building.
//!
//! Every error here is a contract violation by the caller: the offending call
//! is refused and the builder keeps the state it had before the call.

use thiserror::Error;

use crate::category::Category;

/// Errors that can occur while composing a selector.
///
/// # Examples
///
/// ```rust
/// use selector_core::{SelectorBuilder, SelectorError, Category};
///
/// let mut builder = SelectorBuilder::new();
/// builder.element("div").unwrap();
///
/// let err = builder.element("span").unwrap_err();
/// assert_eq!(err, SelectorError::DuplicatePart(Category::Element));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A category that allows a single occurrence (element, id or
    /// pseudo-element) was targeted a second time on the same selector.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector (duplicate {0})"
    )]
    DuplicatePart(Category),

    /// A category was targeted after a strictly later category had already
    /// been populated on the same selector.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({attempted} after {reached})"
    )]
    OrderViolation {
        /// The category the rejected call targeted.
        attempted: Category,
        /// The highest category already present.
        reached: Category,
    },

    /// A combinator symbol outside of `' '`, `>`, `+` and `~`.
    #[error("Invalid combinator: {0:?}")]
    InvalidCombinator(String),
}

pub type Result<T> = std::result::Result<T, SelectorError>;
