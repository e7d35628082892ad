//! # selector-builder
//!
//! Fluent construction of CSS selectors.
//!
//! Each entry point starts a fresh [`SelectorBuilder`] holding one part, so a
//! chain can begin from any kind of selector:
//!
//! ```rust
//! use selector_builder as css;
//!
//! let text = css::id("main").class("container")?.class("editable")?.stringify();
//! assert_eq!(text, "#main.container.editable");
//!
//! let mut list = css::element("ul");
//! list.class("menu")?;
//! let item = css::element("li");
//! assert_eq!(css::combine(list, ">", item)?.stringify(), "ul.menu > li");
//! # Ok::<(), css::SelectorError>(())
//! ```
//!
//! The builder types live in `selector-core` and are re-exported here.

pub use selector_core::{
    Categories, Category, Combinator, ComplexSelector, CompoundSelector, Result, SelectorBuilder,
    SelectorError, Specificity,
};

/// Starts a selector with an element (type) name, e.g. `div`.
pub fn element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Element, value)
}

/// Starts a selector with `#value`.
pub fn id(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Id, value)
}

/// Starts a selector with `.value`.
pub fn class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Class, value)
}

/// Starts a selector with `[value]`.
pub fn attr(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Attribute, value)
}

/// Starts a selector with `:value`.
pub fn pseudo_class(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::PseudoClass, value)
}

/// Starts a selector with `::value`.
pub fn pseudo_element(value: impl Into<String>) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::PseudoElement, value)
}

/// Joins `right` onto `left` with the combinator written as `symbol` and
/// returns `left`.
///
/// `symbol` must be one of `" "`, `">"`, `"+"` or `"~"`; anything else is an
/// [`SelectorError::InvalidCombinator`].
pub fn combine(
    mut left: SelectorBuilder,
    symbol: &str,
    right: SelectorBuilder,
) -> Result<SelectorBuilder> {
    let combinator: Combinator = symbol.parse()?;
    left.combine(combinator, right);
    Ok(left)
}
