use crate::engine::knowledge::PlayerKnowledge;
use crate::model::card::Card;
use crate::model::cardset::CardSet;
use crate::model::player::Seat;
use serde::{Deserialize, Serialize};

/// Records that a seat showed exactly one card from a candidate set, but the
/// observer does not know which.
///
/// Constraints are narrowed as exclusion knowledge accumulates and removed
/// once a single candidate remains. A constraint that narrows to nothing
/// means the recorded facts contradict each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealConstraint {
    seat: Seat,
    candidates: CardSet,
}

impl RevealConstraint {
    pub const fn new(seat: Seat, candidates: CardSet) -> Self {
        Self { seat, candidates }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn candidates(&self) -> CardSet {
        self.candidates
    }

    /// A copy with every candidate the seat can no longer hold removed.
    /// Pure with respect to the knowledge record; nothing is mutated.
    pub fn narrowed(&self, knowledge: &PlayerKnowledge) -> RevealConstraint {
        let still_possible: CardSet = self
            .candidates
            .iter()
            .filter(|card| knowledge.could_hold(*card))
            .collect();
        RevealConstraint {
            seat: self.seat,
            candidates: still_possible,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.candidates.len() == 1
    }

    pub fn is_contradictory(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The remaining candidate, once resolved.
    pub fn resolved_card(&self) -> Option<Card> {
        self.candidates.solo()
    }
}

#[cfg(test)]
mod tests {
    use super::RevealConstraint;
    use crate::engine::knowledge::PlayerKnowledge;
    use crate::model::card::Card;
    use crate::model::cardset::CardSet;
    use crate::model::player::Seat;

    fn candidates(ids: &[u8]) -> CardSet {
        ids.iter().map(|id| Card::from_id(*id)).collect()
    }

    #[test]
    fn narrowing_drops_excluded_candidates() {
        let mut knowledge = PlayerKnowledge::new(9);
        knowledge.exclude(Card::from_id(1)).unwrap();

        let constraint = RevealConstraint::new(Seat::new(0), candidates(&[1, 2, 3]));
        let narrowed = constraint.narrowed(&knowledge);
        assert_eq!(narrowed.candidates(), candidates(&[2, 3]));
        assert!(!narrowed.is_resolved());
        assert!(!narrowed.is_contradictory());
    }

    #[test]
    fn narrowing_to_one_candidate_resolves() {
        let mut knowledge = PlayerKnowledge::new(9);
        knowledge.exclude(Card::from_id(1)).unwrap();
        knowledge.exclude(Card::from_id(2)).unwrap();

        let constraint = RevealConstraint::new(Seat::new(1), candidates(&[1, 2, 3]));
        let narrowed = constraint.narrowed(&knowledge);
        assert!(narrowed.is_resolved());
        assert_eq!(narrowed.resolved_card(), Some(Card::from_id(3)));
    }

    #[test]
    fn narrowing_to_nothing_is_contradictory() {
        let mut knowledge = PlayerKnowledge::new(9);
        knowledge.exclude(Card::from_id(1)).unwrap();
        knowledge.exclude(Card::from_id(2)).unwrap();

        let constraint = RevealConstraint::new(Seat::new(2), candidates(&[1, 2]));
        assert!(constraint.narrowed(&knowledge).is_contradictory());
    }

    #[test]
    fn narrowing_does_not_mutate_the_original() {
        let mut knowledge = PlayerKnowledge::new(9);
        knowledge.exclude(Card::from_id(1)).unwrap();

        let constraint = RevealConstraint::new(Seat::new(0), candidates(&[1, 2]));
        let _ = constraint.narrowed(&knowledge);
        assert_eq!(constraint.candidates(), candidates(&[1, 2]));
    }
}
