//! Selector data structures.
//!
//! - [`CompoundSelector`]: the parts of one simple selector, validated
//!   against the category ordering as they are added
//! - [`ComplexSelector`]: compound selectors chained by [`Combinator`]s
//! - [`Specificity`]: the usual `(ids, classes, types)` weight

use std::fmt;

use crate::category::{Categories, Category};
use crate::combinator::Combinator;
use crate::error::{Result, SelectorError};

/// CSS specificity for determining rule precedence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

/// The parts of a single (non-combined) selector.
///
/// Parts must be added in category order. The highest category reached so
/// far is tracked, and adding anything below it is refused; singleton
/// categories are refused the second time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    highest: Option<Category>,
    filled: Categories,
}

impl CompoundSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compound selector holding a single part.
    pub fn with_part(category: Category, value: impl Into<String>) -> Self {
        let mut compound = Self::default();
        compound.insert(category, value.into());
        compound
    }

    /// Adds a part, enforcing the ordering and singleton rules.
    ///
    /// On error the selector is left untouched.
    pub fn push(&mut self, category: Category, value: impl Into<String>) -> Result<()> {
        if let Err(err) = self.check(category) {
            log::debug!("rejected {category} part on `{}`: {err}", self);
            return Err(err);
        }
        self.insert(category, value.into());
        Ok(())
    }

    fn check(&self, category: Category) -> Result<()> {
        if category.is_singleton() && self.filled.contains(category.flag()) {
            return Err(SelectorError::DuplicatePart(category));
        }
        match self.highest {
            Some(reached) if category < reached => Err(SelectorError::OrderViolation {
                attempted: category,
                reached,
            }),
            _ => Ok(()),
        }
    }

    fn insert(&mut self, category: Category, value: String) {
        log::trace!("adding {category} part {value:?}");
        match category {
            Category::Element => self.element = Some(value),
            Category::Id => self.id = Some(value),
            Category::Class => self.classes.push(value),
            Category::Attribute => self.attributes.push(value),
            Category::PseudoClass => self.pseudo_classes.push(value),
            Category::PseudoElement => self.pseudo_element = Some(value),
        }
        self.filled |= category.flag();
        self.highest = self.highest.max(Some(category));
    }

    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Raw attribute fragments, without the surrounding brackets.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    pub fn pseudo_element(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// The highest category added so far, if any.
    pub fn highest(&self) -> Option<Category> {
        self.highest
    }

    /// The set of categories holding at least one part.
    pub fn filled(&self) -> Categories {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled.is_empty()
    }

    pub fn specificity(&self) -> Specificity {
        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        Specificity {
            ids: u32::from(self.id.is_some()),
            // Attributes have the same specificity as classes and pseudo-classes
            classes: count(self.classes.len())
                .saturating_add(count(self.attributes.len()))
                .saturating_add(count(self.pseudo_classes.len())),
            types: u32::from(self.element.is_some()) + u32::from(self.pseudo_element.is_some()),
        }
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        if !self.classes.is_empty() {
            write!(f, ".{}", self.classes.join("."))?;
        }
        for attribute in &self.attributes {
            write!(f, "[{attribute}]")?;
        }
        if !self.pseudo_classes.is_empty() {
            write!(f, ":{}", self.pseudo_classes.join(":"))?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{pseudo_element}")?;
        }
        Ok(())
    }
}

/// A chain of compound selectors joined by combinators.
///
/// The chain is an owned tree: a `Combined` node owns everything to its
/// right, so a selector can never contain itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComplexSelector {
    Compound(CompoundSelector),
    Combined {
        head: CompoundSelector,
        combinator: Combinator,
        tail: Box<ComplexSelector>,
    },
}

impl Default for ComplexSelector {
    fn default() -> Self {
        Self::Compound(CompoundSelector::default())
    }
}

impl ComplexSelector {
    /// The left-most compound selector.
    pub fn head(&self) -> &CompoundSelector {
        match self {
            Self::Compound(head) | Self::Combined { head, .. } => head,
        }
    }

    pub fn head_mut(&mut self) -> &mut CompoundSelector {
        match self {
            Self::Compound(head) | Self::Combined { head, .. } => head,
        }
    }

    /// Everything to the right of the first combinator, if combined.
    pub fn tail(&self) -> Option<&ComplexSelector> {
        match self {
            Self::Compound(_) => None,
            Self::Combined { tail, .. } => Some(&**tail),
        }
    }

    pub fn is_combined(&self) -> bool {
        matches!(self, Self::Combined { .. })
    }

    /// Joins `right` onto the far right end of this chain.
    pub fn append(&mut self, combinator: Combinator, right: ComplexSelector) {
        match self {
            Self::Combined { tail, .. } => tail.append(combinator, right),
            Self::Compound(head) => {
                let head = std::mem::take(head);
                *self = Self::Combined {
                    head,
                    combinator,
                    tail: Box::new(right),
                };
            }
        }
    }

    /// Compound selectors from left to right.
    pub fn compounds(&self) -> impl Iterator<Item = &CompoundSelector> {
        std::iter::successors(Some(self), |s| s.tail()).map(ComplexSelector::head)
    }

    /// Combinators from left to right.
    pub fn combinators(&self) -> impl Iterator<Item = Combinator> {
        std::iter::successors(Some(self), |s| s.tail()).filter_map(|s| match s {
            Self::Combined { combinator, .. } => Some(*combinator),
            Self::Compound(_) => None,
        })
    }

    pub fn specificity(&self) -> Specificity {
        self.compounds().map(CompoundSelector::specificity).fold(
            Specificity::default(),
            |acc, x| Specificity {
                ids: acc.ids.saturating_add(x.ids),
                classes: acc.classes.saturating_add(x.classes),
                types: acc.types.saturating_add(x.types),
            },
        )
    }
}

impl From<CompoundSelector> for ComplexSelector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(head) => write!(f, "{head}"),
            Self::Combined {
                head,
                combinator,
                tail,
            } => write!(f, "{head} {combinator} {tail}"),
        }
    }
}
