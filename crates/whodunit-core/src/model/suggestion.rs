use crate::model::card::Card;
use crate::model::cardset::CardSet;
use serde::{Deserialize, Serialize};

/// A suggestion someone could make: one card from each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub suspect: Card,
    pub weapon: Card,
    pub location: Card,
}

impl Suggestion {
    pub const fn new(suspect: Card, weapon: Card, location: Card) -> Self {
        Self {
            suspect,
            weapon,
            location,
        }
    }

    pub fn cards(&self) -> CardSet {
        CardSet::EMPTY
            .with(self.suspect)
            .with(self.weapon)
            .with(self.location)
    }
}

/// What a single player's response to a suggestion looked like to the
/// observer. The driver matches on this to pick a recording operation;
/// the engine only ever sees the resulting fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// The player could not (or did not) show anything.
    NoReveal,
    /// The player showed this card and the observer saw it.
    RevealedCard(Card),
    /// The player showed one card from this set, identity unknown.
    RevealedUnknown(CardSet),
}
