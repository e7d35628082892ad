//! Selector part categories and their fixed ordering.
//!
//! A compound selector is written as
//! `element#id.class[attribute]:pseudo-class::pseudo-element`. The
//! declaration order of [`Category`] is that order, so `Ord` on the enum is
//! the ordering rule.

use bitflags::bitflags;

/// One of the six kinds of selector part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Type selector, e.g. `div`.
    Element,
    /// `#id`
    Id,
    /// `.class`
    Class,
    /// `[attribute]`
    Attribute,
    /// `:pseudo-class`
    PseudoClass,
    /// `::pseudo-element`
    PseudoElement,
}

impl Category {
    /// All categories in selector order.
    pub const ALL: [Category; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Whether the category may appear at most once in a compound selector.
    pub fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// The flag for this category in a [`Categories`] set.
    pub fn flag(self) -> Categories {
        match self {
            Self::Element => Categories::ELEMENT,
            Self::Id => Categories::ID,
            Self::Class => Categories::CLASS,
            Self::Attribute => Categories::ATTRIBUTE,
            Self::PseudoClass => Categories::PSEUDO_CLASS,
            Self::PseudoElement => Categories::PSEUDO_ELEMENT,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element => write!(f, "element"),
            Self::Id => write!(f, "id"),
            Self::Class => write!(f, "class"),
            Self::Attribute => write!(f, "attribute"),
            Self::PseudoClass => write!(f, "pseudo-class"),
            Self::PseudoElement => write!(f, "pseudo-element"),
        }
    }
}

bitflags! {
    /// Set of categories populated on a compound selector.
    ///
    /// # Example
    ///
    /// ```
    /// use selector_core::{Categories, Category};
    ///
    /// let mut filled = Categories::empty();
    /// filled |= Category::Id.flag();
    ///
    /// assert!(filled.contains(Categories::ID));
    /// assert!(!filled.contains(Categories::ELEMENT));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Categories: u8 {
        const ELEMENT        = 0b0000_0001;
        const ID             = 0b0000_0010;
        const CLASS          = 0b0000_0100;
        const ATTRIBUTE      = 0b0000_1000;
        const PSEUDO_CLASS   = 0b0001_0000;
        const PSEUDO_ELEMENT = 0b0010_0000;
    }
}

impl From<Category> for Categories {
    fn from(category: Category) -> Self {
        category.flag()
    }
}
