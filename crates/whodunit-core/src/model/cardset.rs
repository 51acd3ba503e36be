use crate::model::card::Card;
use serde::{Deserialize, Serialize};

/// Bit-mask over card ids.
///
/// One machine word covers every real configuration: the catalog caps a
/// session at [`CardSet::MAX_CARDS`] cards and the classic decks stay around
/// twenty-one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSet(u64);

impl CardSet {
    pub const EMPTY: Self = Self(0);
    pub const MAX_CARDS: usize = 64;

    pub fn contains(self, card: Card) -> bool {
        self.0 & Self::bit(card) != 0
    }

    pub fn with(mut self, card: Card) -> Self {
        self.0 |= Self::bit(card);
        self
    }

    pub fn insert(&mut self, card: Card) {
        self.0 |= Self::bit(card);
    }

    pub fn remove(&mut self, card: Card) {
        self.0 &= !Self::bit(card);
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when every member of `self` is also a member of `other`.
    pub fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// The single member, when the set holds exactly one card.
    pub fn solo(self) -> Option<Card> {
        if self.len() == 1 {
            Some(Card::from_id(self.0.trailing_zeros() as u8))
        } else {
            None
        }
    }

    pub fn iter(self) -> impl Iterator<Item = Card> {
        let mut bits = self.0;
        core::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let id = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Some(Card::from_id(id))
        })
    }

    // Ids past the capacity map to no bit at all, so an oversized card is
    // never aliased onto a real one: it cannot enter a set and is never
    // reported as a member.
    fn bit(card: Card) -> u64 {
        1u64.checked_shl(card.id() as u32).unwrap_or(0)
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for card in iter {
            set.insert(card);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::CardSet;
    use crate::model::card::Card;

    #[test]
    fn insert_and_remove() {
        let mut set = CardSet::EMPTY;
        let card = Card::from_id(5);
        set.insert(card);
        assert!(set.contains(card));
        assert_eq!(set.len(), 1);
        set.remove(card);
        assert!(!set.contains(card));
        assert!(set.is_empty());
    }

    #[test]
    fn solo_requires_exactly_one_member() {
        let card = Card::from_id(9);
        assert_eq!(CardSet::EMPTY.with(card).solo(), Some(card));
        assert_eq!(CardSet::EMPTY.solo(), None);
        assert_eq!(
            CardSet::EMPTY.with(card).with(Card::from_id(10)).solo(),
            None
        );
    }

    #[test]
    fn iter_yields_ascending_ids() {
        let set = CardSet::EMPTY
            .with(Card::from_id(20))
            .with(Card::from_id(2))
            .with(Card::from_id(7));
        let ids: Vec<u8> = set.iter().map(Card::id).collect();
        assert_eq!(ids, vec![2, 7, 20]);
    }

    #[test]
    fn intersection_and_subset() {
        let a = CardSet::EMPTY.with(Card::from_id(1)).with(Card::from_id(2));
        let b = CardSet::EMPTY.with(Card::from_id(2)).with(Card::from_id(3));
        assert_eq!(a.intersection(b), CardSet::EMPTY.with(Card::from_id(2)));
        assert!(a.intersection(b).is_subset_of(a));
        assert!(!a.is_subset_of(b));
    }

    #[test]
    fn ids_past_capacity_never_alias_onto_real_cards() {
        let mut set = CardSet::EMPTY;
        // Id 70 would land on bit 6 if the shift amount wrapped.
        set.insert(Card::from_id(70));
        assert!(set.is_empty());
        assert!(!set.contains(Card::from_id(70)));
        assert!(!set.contains(Card::from_id(6)));
        set.remove(Card::from_id(70));
        assert!(set.is_empty());
    }

    #[test]
    fn collects_from_iterator() {
        let set: CardSet = [Card::from_id(0), Card::from_id(4)].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Card::from_id(4)));
    }
}
