//! Chainable selector builder.

use std::fmt;

use crate::category::Category;
use crate::combinator::Combinator;
use crate::error::Result;
use crate::selector::{ComplexSelector, CompoundSelector, Specificity};

/// Accumulates selector parts and combinations, then renders them.
///
/// Part methods return `&mut Self` so calls chain with `?`. They always act
/// on the left-most compound selector, even after [`combine`](Self::combine)
/// has attached a right-hand side.
///
/// ```rust
/// use selector_core::{Combinator, SelectorBuilder};
///
/// let mut list = SelectorBuilder::new();
/// list.element("ul")?.class("menu")?;
///
/// let mut item = SelectorBuilder::new();
/// item.element("li")?.pseudo_class("first-child")?;
///
/// list.combine(Combinator::Child, item);
/// assert_eq!(list.stringify(), "ul.menu > li:first-child");
/// # Ok::<(), selector_core::SelectorError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    selector: ComplexSelector,
}

impl SelectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder already holding one part.
    ///
    /// A single part on an empty selector is always valid.
    pub fn starting_with(category: Category, value: impl Into<String>) -> Self {
        Self {
            selector: CompoundSelector::with_part(category, value).into(),
        }
    }

    pub fn element(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        self.push(Category::Element, value)
    }

    pub fn id(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        self.push(Category::Id, value)
    }

    pub fn class(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        self.push(Category::Class, value)
    }

    /// Adds a raw attribute fragment such as `href$=".png"`; the brackets are
    /// added when rendering.
    pub fn attr(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        self.push(Category::Attribute, value)
    }

    pub fn pseudo_class(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        self.push(Category::PseudoClass, value)
    }

    pub fn pseudo_element(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        self.push(Category::PseudoElement, value)
    }

    /// Adds a part of the given category to the left-most compound selector.
    pub fn push(&mut self, category: Category, value: impl Into<String>) -> Result<&mut Self> {
        self.selector.head_mut().push(category, value)?;
        Ok(self)
    }

    /// Takes ownership of `right` and joins it with `combinator`.
    ///
    /// Combining an already combined builder continues the chain at its
    /// right end: `a + b` combined with `~ c` gives `a + b ~ c`.
    pub fn combine(&mut self, combinator: Combinator, right: SelectorBuilder) -> &mut Self {
        log::trace!("combining `{}` {combinator:?} `{right}`", self);
        self.selector.append(combinator, right.selector);
        self
    }

    /// Renders the selector text. Has no side effects.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    pub fn selector(&self) -> &ComplexSelector {
        &self.selector
    }

    /// Returns a copy of the selector built so far.
    pub fn build(&self) -> ComplexSelector {
        self.selector.clone()
    }

    pub fn into_selector(self) -> ComplexSelector {
        self.selector
    }

    pub fn specificity(&self) -> Specificity {
        self.selector.specificity()
    }
}

impl From<CompoundSelector> for SelectorBuilder {
    fn from(compound: CompoundSelector) -> Self {
        Self {
            selector: compound.into(),
        }
    }
}

impl From<ComplexSelector> for SelectorBuilder {
    fn from(selector: ComplexSelector) -> Self {
        Self { selector }
    }
}

impl From<SelectorBuilder> for ComplexSelector {
    fn from(builder: SelectorBuilder) -> Self {
        builder.selector
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.selector, f)
    }
}
