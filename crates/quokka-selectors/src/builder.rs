//! Incremental CSS selector construction with order/repetition validation.
//!
//! Selectors are assembled left to right from simple-selector parts per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/). The builder
//! enforces compound-selector syntax order (element, id, class, attribute,
//! pseudo-class, pseudo-element) and rejects repeats of the parts that may
//! appear at most once. Part values are inserted verbatim; nothing here
//! parses or validates the value text itself.

use std::fmt;

use thiserror::Error;

/// The kind of a simple-selector part, in compound-selector syntax order.
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator" — and within that sequence the grammar fixes
/// the order: type selector first, pseudo-element last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// Rendered verbatim: `div`, `p`, `span`.
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value." Rendered as `#value`.
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier." Rendered as `.value`.
    Class,

    /// [§ 6.4 Attribute selector](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// Rendered as `[value]`; the bracketed condition (`href`, `type=text`,
    /// `src$=".png"`) is taken as-is.
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// Rendered as `:value` (`:hover`, `:nth-of-type(even)`).
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// Rendered as `::value` (`::before`, `::after`).
    PseudoElement,
}

impl PartKind {
    /// Position of this kind in compound-selector syntax order, 1 through 6.
    const fn rank(self) -> u8 {
        match self {
            Self::Element => 1,
            Self::Id => 2,
            Self::Class => 3,
            Self::Attribute => 4,
            Self::PseudoClass => 5,
            Self::PseudoElement => 6,
        }
    }

    /// Whether this kind may appear more than once in a single compound
    /// selector. Element, id, and pseudo-element are single-occurrence;
    /// class, attribute, and pseudo-class repeat freely.
    const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }

    /// Bit for the seen-set, derived from the rank.
    const fn bit(self) -> u8 {
        1 << (self.rank() - 1)
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// Written as whitespace: `A B`.
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// Written as a greater-than sign: `A > B`.
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// Written as a plus sign: `A + B`.
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// Written as a tilde: `A ~ B`.
    SubsequentSibling,
}

impl Combinator {
    /// The punctuation character for this combinator. The descendant
    /// combinator's character is itself a space.
    const fn symbol(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::NextSibling => '+',
            Self::SubsequentSibling => '~',
        }
    }
}

/// Construction-time failures. Both are programmer-error signals: the
/// selector under construction is invalid and callers are expected to abort
/// rather than catch and continue.
///
/// The display strings are fixed and load-bearing; existing callers match
/// on them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A single-occurrence part kind (element, id, pseudo-element) was
    /// appended a second time to the same selector.
    #[error("Element, id and pseudo-element should not occur more then one time inside the selector")]
    DuplicatePart,

    /// A part was appended whose rank is lower than the highest rank already
    /// appended to this selector.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder,
}

/// A selector under construction: the accumulated text plus the bookkeeping
/// needed to enforce part order and single-occurrence rules.
///
/// Values are created through the crate's constructor functions ([`element`],
/// [`id`], [`class`], [`attribute`], [`pseudo_class`], [`pseudo_element`],
/// [`combine`]) and extended by the chaining methods below, each of which
/// takes the selector by value and hands it back on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Accumulated output text.
    text: String,

    /// Rank of the most recently appended part, 0 while empty. Appends must
    /// keep this non-decreasing.
    last_rank: u8,

    /// Bitset of part kinds already appended, consulted for the
    /// single-occurrence kinds.
    seen: u8,
}

impl Selector {
    /// An empty selector: no text, rank watermark at 0, nothing seen.
    const fn empty() -> Self {
        Self {
            text: String::new(),
            last_rank: 0,
            seen: 0,
        }
    }

    /// Append a type selector part.
    ///
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if a type selector was already
    /// appended; [`SelectorError::OutOfOrder`] if any higher-ranked part
    /// precedes it.
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Element, value)
    }

    /// Append an ID selector part, rendered as `#value`.
    ///
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if an ID was already appended;
    /// [`SelectorError::OutOfOrder`] if any higher-ranked part precedes it.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Id, value)
    }

    /// Append a class selector part, rendered as `.value`. May repeat.
    ///
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any higher-ranked part precedes it.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Class, value)
    }

    /// Append an attribute selector part, rendered as `[value]`. May repeat.
    ///
    /// [§ 6.4 Attribute selector](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any higher-ranked part precedes it.
    pub fn attribute(self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::Attribute, value)
    }

    /// Append a pseudo-class part, rendered as `:value`. May repeat.
    ///
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any higher-ranked part precedes it.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::PseudoClass, value)
    }

    /// Append a pseudo-element part, rendered as `::value`.
    ///
    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if a pseudo-element was already
    /// appended. A pseudo-element holds the highest rank, so appending one
    /// can never itself be out of order.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.append(PartKind::PseudoElement, value)
    }

    /// The accumulated selector text. Pure accessor, no side effects.
    #[must_use]
    pub fn render(&self) -> &str {
        &self.text
    }

    /// Validate, then write one part.
    ///
    /// The duplicate check runs before the order check: appending `element`
    /// twice in a row reports [`SelectorError::DuplicatePart`], not
    /// [`SelectorError::OutOfOrder`], even though both rules are violated.
    /// Equal rank alone is never an order violation — that is what lets the
    /// repeatable kinds stack.
    fn append(mut self, kind: PartKind, value: &str) -> Result<Self, SelectorError> {
        if !kind.is_repeatable() && self.seen & kind.bit() != 0 {
            return Err(SelectorError::DuplicatePart);
        }
        if kind.rank() < self.last_rank {
            return Err(SelectorError::OutOfOrder);
        }
        self.write_part(kind, value);
        Ok(self)
    }

    /// Write the rendered form of one part and advance the bookkeeping.
    /// Callers have already validated; this never fails.
    fn write_part(&mut self, kind: PartKind, value: &str) {
        match kind {
            PartKind::Element => {}
            PartKind::Id => self.text.push('#'),
            PartKind::Class => self.text.push('.'),
            PartKind::Attribute => self.text.push('['),
            PartKind::PseudoClass => self.text.push(':'),
            PartKind::PseudoElement => self.text.push_str("::"),
        }
        self.text.push_str(value);
        if kind == PartKind::Attribute {
            self.text.push(']');
        }
        self.last_rank = kind.rank();
        self.seen |= kind.bit();
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Start a selector with a type selector part.
///
/// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
#[must_use]
pub fn element(value: &str) -> Selector {
    start(PartKind::Element, value)
}

/// Start a selector with an ID part (`#value`).
///
/// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
#[must_use]
pub fn id(value: &str) -> Selector {
    start(PartKind::Id, value)
}

/// Start a selector with a class part (`.value`).
///
/// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
#[must_use]
pub fn class(value: &str) -> Selector {
    start(PartKind::Class, value)
}

/// Start a selector with an attribute part (`[value]`).
///
/// [§ 6.4 Attribute selector](https://www.w3.org/TR/selectors-4/#attribute-selectors)
#[must_use]
pub fn attribute(value: &str) -> Selector {
    start(PartKind::Attribute, value)
}

/// Start a selector with a pseudo-class part (`:value`).
///
/// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
#[must_use]
pub fn pseudo_class(value: &str) -> Selector {
    start(PartKind::PseudoClass, value)
}

/// Start a selector with a pseudo-element part (`::value`).
///
/// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
#[must_use]
pub fn pseudo_element(value: &str) -> Selector {
    start(PartKind::PseudoElement, value)
}

/// First append onto an empty selector. The rank check passes against the
/// watermark of 0 and nothing is in the seen-set, so this cannot fail.
fn start(kind: PartKind, value: &str) -> Selector {
    let mut selector = Selector::empty();
    selector.write_part(kind, value);
    selector
}

/// Join two selectors with a combinator.
///
/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The output is `left`, a space, the combinator's character, a space, then
/// `right`. The operator slot always holds exactly the combinator character,
/// so the descendant combinator — whose character is itself a space — yields
/// three spaces between the operands. Long-standing output quirk; callers
/// depend on the literal text, so it is preserved rather than collapsed.
///
/// The result is a fresh root: rank watermark back at 0, seen-set empty.
/// Further part appends are validated against that reset state, though a
/// combined selector is normally terminal.
#[must_use]
pub fn combine(left: Selector, combinator: Combinator, right: Selector) -> Selector {
    Selector {
        text: format!("{} {} {}", left.render(), combinator.symbol(), right.render()),
        last_rank: 0,
        seen: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_cover_1_through_6_in_order() {
        let kinds = [
            PartKind::Element,
            PartKind::Id,
            PartKind::Class,
            PartKind::Attribute,
            PartKind::PseudoClass,
            PartKind::PseudoElement,
        ];
        for (i, kind) in kinds.iter().enumerate() {
            assert_eq!(kind.rank(), u8::try_from(i).unwrap() + 1);
        }
    }

    #[test]
    fn test_seen_bits_are_distinct() {
        let kinds = [
            PartKind::Element,
            PartKind::Id,
            PartKind::Class,
            PartKind::Attribute,
            PartKind::PseudoClass,
            PartKind::PseudoElement,
        ];
        let mut set = 0u8;
        for kind in kinds {
            assert_eq!(set & kind.bit(), 0);
            set |= kind.bit();
        }
    }

    #[test]
    fn test_repeatable_kinds() {
        assert!(!PartKind::Element.is_repeatable());
        assert!(!PartKind::Id.is_repeatable());
        assert!(PartKind::Class.is_repeatable());
        assert!(PartKind::Attribute.is_repeatable());
        assert!(PartKind::PseudoClass.is_repeatable());
        assert!(!PartKind::PseudoElement.is_repeatable());
    }

    #[test]
    fn test_combinator_symbols() {
        assert_eq!(Combinator::Descendant.symbol(), ' ');
        assert_eq!(Combinator::Child.symbol(), '>');
        assert_eq!(Combinator::NextSibling.symbol(), '+');
        assert_eq!(Combinator::SubsequentSibling.symbol(), '~');
    }

    #[test]
    fn test_display_matches_render() {
        let selector = element("div");
        assert_eq!(selector.to_string(), selector.render());
    }
}
