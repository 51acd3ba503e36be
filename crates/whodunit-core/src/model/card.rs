use core::fmt;
use serde::{Deserialize, Serialize};

/// A card in the configured deck, identified by its dense catalog id.
///
/// Ids are assigned by the catalog at session start: suspects first, then
/// weapons, then locations. The display name lives in the catalog, not in the
/// card value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    pub const fn from_id(id: u8) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Card;

    #[test]
    fn id_roundtrip() {
        let card = Card::from_id(17);
        assert_eq!(card.id(), 17);
    }

    #[test]
    fn display_shows_the_id() {
        assert_eq!(Card::from_id(3).to_string(), "#3");
    }
}
