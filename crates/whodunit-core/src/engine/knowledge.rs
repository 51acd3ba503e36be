use crate::model::card::Card;
use crate::model::cardset::CardSet;
use core::fmt;

/// What is certainly known about one seat's hand.
///
/// `holds` and `excluded` are disjoint at all times and only ever grow; a
/// card absent from both is unknown for this seat. Inference is monotonic,
/// nothing recorded here is ever revoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerKnowledge {
    holds: CardSet,
    excluded: CardSet,
    card_count: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeError {
    /// The card id is outside the configured catalog.
    InvalidCard(Card),
    /// The card was already proven absent from this hand.
    GrantedWhileExcluded(Card),
}

impl fmt::Display for KnowledgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnowledgeError::InvalidCard(card) => {
                write!(f, "card {card} is not part of the configured deck")
            }
            KnowledgeError::GrantedWhileExcluded(card) => {
                write!(f, "card {card} was granted to a hand it is already ruled out of")
            }
        }
    }
}

impl std::error::Error for KnowledgeError {}

impl PlayerKnowledge {
    pub fn new(card_count: u8) -> Self {
        Self {
            holds: CardSet::EMPTY,
            excluded: CardSet::EMPTY,
            card_count,
        }
    }

    /// Rebuilds a record from stored sets, refusing overlapping ones.
    pub(crate) fn from_parts(
        holds: CardSet,
        excluded: CardSet,
        card_count: u8,
    ) -> Option<Self> {
        if !holds.intersection(excluded).is_empty() {
            return None;
        }
        Some(Self {
            holds,
            excluded,
            card_count,
        })
    }

    /// Marks a card as certainly in this hand.
    ///
    /// Returns whether the record changed; granting an already-held card is
    /// a no-op.
    pub fn grant(&mut self, card: Card) -> Result<bool, KnowledgeError> {
        self.check(card)?;
        if self.holds.contains(card) {
            return Ok(false);
        }
        if self.excluded.contains(card) {
            return Err(KnowledgeError::GrantedWhileExcluded(card));
        }
        self.holds.insert(card);
        Ok(true)
    }

    /// Marks a card as certainly absent from this hand.
    ///
    /// Excluding a held card is a no-op, not an error: a later negative
    /// observation about an already-certain card carries no information.
    pub fn exclude(&mut self, card: Card) -> Result<bool, KnowledgeError> {
        self.check(card)?;
        if self.holds.contains(card) || self.excluded.contains(card) {
            return Ok(false);
        }
        self.excluded.insert(card);
        Ok(true)
    }

    pub fn holds_card(&self, card: Card) -> bool {
        self.holds.contains(card)
    }

    /// True when the card is neither held nor ruled out for this seat.
    pub fn could_hold(&self, card: Card) -> bool {
        (card.id() as usize) < self.card_count as usize
            && !self.holds.contains(card)
            && !self.excluded.contains(card)
    }

    /// Cards of `candidates` certainly in this hand. Lets the local player
    /// see which of their cards match a suggestion.
    pub fn overlap(&self, candidates: CardSet) -> CardSet {
        self.holds.intersection(candidates)
    }

    pub fn holds(&self) -> CardSet {
        self.holds
    }

    pub fn excluded(&self) -> CardSet {
        self.excluded
    }

    fn check(&self, card: Card) -> Result<(), KnowledgeError> {
        if (card.id() as usize) < self.card_count as usize {
            Ok(())
        } else {
            Err(KnowledgeError::InvalidCard(card))
        }
    }
}
