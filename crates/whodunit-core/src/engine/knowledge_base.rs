use crate::engine::constraint::RevealConstraint;
use crate::engine::knowledge::{KnowledgeError, PlayerKnowledge};
use crate::model::card::Card;
use crate::model::cardset::CardSet;
use crate::model::catalog::CardCatalog;
use crate::model::category::Category;
use crate::model::player::{Roster, Seat};
use crate::model::suggestion::Suggestion;
use core::fmt;
use serde::{Deserialize, Serialize};

const TARGET: &str = "whodunit_core::deduction";

/// A state where the recorded facts are mutually inconsistent.
///
/// This signals bad input (a mis-reported reveal, a wrong confirmation), not
/// an engine bug. The engine reports it and leaves the stored facts alone;
/// the caller decides how to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contradiction {
    /// A card was recorded as held by a seat it is already ruled out of.
    HeldAndExcluded { seat: Seat, card: Card },
    /// A stored reveal narrowed to zero candidates.
    UnsatisfiedReveal { seat: Seat, candidates: CardSet },
    /// The evidence requires a card to be the solution for its category, but
    /// the card has already been eliminated from that category's candidates.
    SolutionEliminated { category: Category, card: Card },
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contradiction::HeldAndExcluded { seat, card } => {
                write!(f, "card {card} was placed in {seat}'s hand but is ruled out for them")
            }
            Contradiction::UnsatisfiedReveal { seat, candidates } => {
                write!(
                    f,
                    "{seat} showed one of {} candidate cards but holds none of them",
                    candidates.len()
                )
            }
            Contradiction::SolutionEliminated { category, card } => {
                write!(
                    f,
                    "card {card} must be the {category} solution but was already eliminated"
                )
            }
        }
    }
}

impl std::error::Error for Contradiction {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// The referenced card is outside the configured catalog.
    InvalidCard(Card),
    /// The referenced seat is not part of the roster.
    UnknownSeat(Seat),
    /// The event conflicts with an earlier recorded fact.
    Contradiction(Contradiction),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::InvalidCard(card) => {
                write!(f, "card {card} is not part of the configured deck")
            }
            RecordError::UnknownSeat(seat) => write!(f, "{seat} is not part of the roster"),
            RecordError::Contradiction(contradiction) => contradiction.fmt(f),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<Contradiction> for RecordError {
    fn from(contradiction: Contradiction) -> Self {
        RecordError::Contradiction(contradiction)
    }
}

/// The confirmed solution triple, available once every category has
/// narrowed to a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub suspect: Card,
    pub weapon: Card,
    pub location: Card,
}

/// Outcome of one `deduce` invocation.
///
/// `changed` tells the caller whether anything new was inferred (useful to
/// decide whether status needs re-rendering). Contradictions found along the
/// way are collected here rather than aborting the pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeductionReport {
    pub changed: bool,
    pub contradictions: Vec<Contradiction>,
}

impl DeductionReport {
    pub fn is_consistent(&self) -> bool {
        self.contradictions.is_empty()
    }
}

/// All deduced knowledge about the players' hands and the hidden solution.
///
/// Created once per session from a validated catalog and roster, then
/// mutated exclusively through the four recording operations and `deduce`.
/// Every mutation is monotonic: certainty sets only grow, candidate sets
/// only shrink.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    catalog: CardCatalog,
    roster: Roster,
    knowledge: Vec<PlayerKnowledge>,
    solution_candidates: [CardSet; 3],
    constraints: Vec<RevealConstraint>,
    unknown_cards: CardSet,
}

impl KnowledgeBase {
    pub fn new(catalog: CardCatalog, roster: Roster) -> Self {
        let card_count = catalog.len() as u8;
        let knowledge = (0..roster.len())
            .map(|_| PlayerKnowledge::new(card_count))
            .collect();
        let solution_candidates = [
            catalog.cards_in(Category::Suspect),
            catalog.cards_in(Category::Weapon),
            catalog.cards_in(Category::Location),
        ];
        let unknown_cards = catalog.all_cards();
        Self {
            catalog,
            roster,
            knowledge,
            solution_candidates,
            constraints: Vec::new(),
            unknown_cards,
        }
    }

    pub(crate) fn from_parts(
        catalog: CardCatalog,
        roster: Roster,
        knowledge: Vec<PlayerKnowledge>,
        solution_candidates: [CardSet; 3],
        constraints: Vec<RevealConstraint>,
        unknown_cards: CardSet,
    ) -> Self {
        Self {
            catalog,
            roster,
            knowledge,
            solution_candidates,
            constraints,
            unknown_cards,
        }
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn knowledge(&self, seat: Seat) -> Option<&PlayerKnowledge> {
        self.knowledge.get(seat.index())
    }

    pub fn unknown_cards(&self) -> CardSet {
        self.unknown_cards
    }

    pub fn solution_candidates(&self, category: Category) -> CardSet {
        self.solution_candidates[category.index()]
    }

    /// Reveals still pending resolution, for status display.
    pub fn constraints(&self) -> &[RevealConstraint] {
        &self.constraints
    }

    pub fn is_solved(&self) -> bool {
        Category::ALL
            .iter()
            .all(|category| self.solution_candidates[category.index()].len() == 1)
    }

    pub fn solution(&self) -> Option<Solution> {
        Some(Solution {
            suspect: self.solution_candidates[Category::Suspect.index()].solo()?,
            weapon: self.solution_candidates[Category::Weapon.index()].solo()?,
            location: self.solution_candidates[Category::Location.index()].solo()?,
        })
    }

    /// Records the definitive fact that `seat` holds `card`.
    ///
    /// The card is excluded for every other seat and eliminated from its
    /// category's solution candidates. A repeat of an already-known fact is
    /// a no-op. Contradictions are detected before anything mutates, so a
    /// failed call leaves the state untouched.
    pub fn record_has_card(&mut self, seat: Seat, card: Card) -> Result<(), RecordError> {
        let index = self.seat_index(seat)?;
        let category = self
            .catalog
            .category_of(card)
            .map_err(|_| RecordError::InvalidCard(card))?;

        if self.knowledge[index].holds_card(card) {
            return Ok(());
        }
        if !self.knowledge[index].could_hold(card) {
            return Err(Contradiction::HeldAndExcluded { seat, card }.into());
        }
        if self.solution_candidates[category.index()].solo() == Some(card) {
            return Err(Contradiction::SolutionEliminated { category, card }.into());
        }

        self.grant(index, seat, card)?;
        self.unknown_cards.remove(card);
        for other in 0..self.knowledge.len() {
            if other != index {
                self.exclude(other, card)?;
            }
        }
        self.solution_candidates[category.index()].remove(card);
        tracing::debug!(
            target: TARGET,
            seat = %seat,
            card = self.catalog.name(card).unwrap_or("?"),
            "card placed in a hand"
        );
        Ok(())
    }

    /// Records the definitive fact that `seat` does not hold `card`.
    pub fn record_does_not_have(&mut self, seat: Seat, card: Card) -> Result<(), RecordError> {
        let index = self.seat_index(seat)?;
        if !self.catalog.contains(card) {
            return Err(RecordError::InvalidCard(card));
        }
        self.exclude(index, card)?;
        Ok(())
    }

    /// Records that `seat` showed one card out of `candidates`, identity
    /// unknown.
    ///
    /// Candidates the seat cannot hold are dropped up front; cards already
    /// known to be held are dropped with them, since the reveal is then
    /// fully explained by existing knowledge. An empty remainder carries no
    /// new information and is not an error. A single remainder is promoted
    /// straight to certain ownership; anything more is stored as a live
    /// constraint for later narrowing.
    pub fn record_showed_one_of(
        &mut self,
        seat: Seat,
        candidates: CardSet,
    ) -> Result<(), RecordError> {
        let index = self.seat_index(seat)?;
        for card in candidates.iter() {
            if !self.catalog.contains(card) {
                return Err(RecordError::InvalidCard(card));
            }
        }

        let narrowed: CardSet = candidates
            .iter()
            .filter(|card| self.knowledge[index].could_hold(*card))
            .collect();
        if narrowed.is_empty() {
            return Ok(());
        }
        if let Some(card) = narrowed.solo() {
            return self.record_has_card(seat, card);
        }
        tracing::debug!(
            target: TARGET,
            seat = %seat,
            pending = narrowed.len(),
            "reveal stored for later narrowing"
        );
        self.constraints.push(RevealConstraint::new(seat, narrowed));
        Ok(())
    }

    /// Records that every other player was asked and none revealed a card.
    ///
    /// Each suggested card the observer does not hold must then be the
    /// solution for its category. Cards in the observer's own hand explain
    /// themselves and carry no solution information.
    pub fn record_no_one_showed(
        &mut self,
        suggestion: &Suggestion,
        observer: Seat,
    ) -> Result<(), RecordError> {
        let index = self.seat_index(observer)?;

        // Validate every collapse before mutating anything.
        for card in suggestion.cards().iter() {
            let category = self
                .catalog
                .category_of(card)
                .map_err(|_| RecordError::InvalidCard(card))?;
            if self.knowledge[index].holds_card(card) {
                continue;
            }
            if !self.solution_candidates[category.index()].contains(card) {
                return Err(Contradiction::SolutionEliminated { category, card }.into());
            }
        }

        for card in suggestion.cards().iter() {
            if self.knowledge[index].holds_card(card) {
                continue;
            }
            let category = self
                .catalog
                .category_of(card)
                .map_err(|_| RecordError::InvalidCard(card))?;
            self.solution_candidates[category.index()] = CardSet::EMPTY.with(card);
            self.unknown_cards.remove(card);
            tracing::info!(
                target: TARGET,
                card = self.catalog.name(card).unwrap_or("?"),
                category = %category,
                "card must be in the solution"
            );
        }
        Ok(())
    }

    /// Runs every deduction rule to a fixed point.
    ///
    /// The three rules are repeated, in order, until one full pass over all
    /// of them produces no change. Each rule only shrinks candidate sets or
    /// grows certainty sets, so the loop terminates. Contradictions found
    /// along the way are reported, never panicked on and never repaired.
    pub fn deduce(&mut self) -> DeductionReport {
        let mut report = DeductionReport::default();
        loop {
            let mut changed = false;
            changed |= self.apply_unique_owner(&mut report);
            changed |= self.apply_solution_confirmation();
            changed |= self.apply_constraint_narrowing(&mut report);
            if !changed {
                break;
            }
            report.changed = true;
        }
        report
    }

    /// A card only one seat could hold belongs to that seat; a card no seat
    /// could hold must be in the solution.
    fn apply_unique_owner(&mut self, report: &mut DeductionReport) -> bool {
        let mut changed = false;
        let snapshot = self.unknown_cards;
        for card in snapshot.iter() {
            if !self.unknown_cards.contains(card) {
                continue;
            }
            let owners: Vec<Seat> = self
                .roster
                .seats()
                .filter(|seat| self.knowledge[seat.index()].could_hold(card))
                .collect();
            match owners.as_slice() {
                [only] => {
                    tracing::info!(
                        target: TARGET,
                        seat = %only,
                        card = self.catalog.name(card).unwrap_or("?"),
                        "only one seat could hold this card"
                    );
                    if self.promote(*only, card, report) {
                        changed = true;
                    }
                }
                [] => {
                    let Ok(category) = self.catalog.category_of(card) else {
                        continue;
                    };
                    let candidates = self.solution_candidates[category.index()];
                    if candidates.len() <= 1 {
                        continue;
                    }
                    if candidates.contains(card) {
                        self.solution_candidates[category.index()] = CardSet::EMPTY.with(card);
                        self.unknown_cards.remove(card);
                        tracing::info!(
                            target: TARGET,
                            card = self.catalog.name(card).unwrap_or("?"),
                            category = %category,
                            "no seat can hold this card, it must be the solution"
                        );
                        changed = true;
                    } else {
                        let contradiction = Contradiction::SolutionEliminated { category, card };
                        tracing::warn!(target: TARGET, %contradiction, "inconsistent facts");
                        report.contradictions.push(contradiction);
                    }
                }
                _ => {}
            }
        }
        changed
    }

    /// A confirmed solution card sits in the envelope, so it is excluded
    /// from every hand that could still hold it.
    fn apply_solution_confirmation(&mut self) -> bool {
        let mut changed = false;
        for category in Category::ALL {
            let Some(card) = self.solution_candidates[category.index()].solo() else {
                continue;
            };
            for index in 0..self.knowledge.len() {
                if let Ok(true) = self.knowledge[index].exclude(card) {
                    changed = true;
                }
            }
        }
        changed
    }

    /// Re-evaluates stored reveals in light of new exclusions. Resolved
    /// constraints promote to certain ownership; contradictory ones are
    /// reported and dropped; the rest stay in narrowed form.
    fn apply_constraint_narrowing(&mut self, report: &mut DeductionReport) -> bool {
        let mut changed = false;
        let pending = core::mem::take(&mut self.constraints);
        let mut kept = Vec::with_capacity(pending.len());
        for constraint in pending {
            let narrowed = constraint.narrowed(&self.knowledge[constraint.seat().index()]);
            if narrowed.is_contradictory() {
                let contradiction = Contradiction::UnsatisfiedReveal {
                    seat: constraint.seat(),
                    candidates: constraint.candidates(),
                };
                tracing::warn!(target: TARGET, %contradiction, "reveal can no longer be satisfied");
                report.contradictions.push(contradiction);
            } else if let Some(card) = narrowed.resolved_card() {
                tracing::info!(
                    target: TARGET,
                    seat = %constraint.seat(),
                    card = self.catalog.name(card).unwrap_or("?"),
                    "stored reveal narrowed to a single card"
                );
                if self.promote(constraint.seat(), card, report) {
                    changed = true;
                }
            } else {
                kept.push(narrowed);
            }
        }
        self.constraints = kept;
        changed
    }

    /// Records an inferred ownership fact, downgrading conflicts to report
    /// entries so the deduction pass keeps going.
    fn promote(&mut self, seat: Seat, card: Card, report: &mut DeductionReport) -> bool {
        match self.record_has_card(seat, card) {
            Ok(()) => true,
            Err(RecordError::Contradiction(contradiction)) => {
                tracing::warn!(target: TARGET, %contradiction, "inconsistent facts during deduction");
                report.contradictions.push(contradiction);
                false
            }
            Err(err) => {
                tracing::warn!(target: TARGET, %err, "deduction step rejected");
                false
            }
        }
    }

    fn seat_index(&self, seat: Seat) -> Result<usize, RecordError> {
        if self.roster.contains(seat) {
            Ok(seat.index())
        } else {
            Err(RecordError::UnknownSeat(seat))
        }
    }

    fn grant(&mut self, index: usize, seat: Seat, card: Card) -> Result<bool, RecordError> {
        self.knowledge[index]
            .grant(card)
            .map_err(|err| Self::lift(seat, err))
    }

    fn exclude(&mut self, index: usize, card: Card) -> Result<bool, RecordError> {
        let seat = Seat::from_index(index);
        self.knowledge[index]
            .exclude(card)
            .map_err(|err| Self::lift(seat, err))
    }

    fn lift(seat: Seat, err: KnowledgeError) -> RecordError {
        match err {
            KnowledgeError::InvalidCard(card) => RecordError::InvalidCard(card),
            KnowledgeError::GrantedWhileExcluded(card) => {
                Contradiction::HeldAndExcluded { seat, card }.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Contradiction, KnowledgeBase, RecordError};
    use crate::engine::snapshot::KnowledgeSnapshot;
    use crate::model::card::Card;
    use crate::model::cardset::CardSet;
    use crate::model::catalog::CardCatalog;
    use crate::model::category::Category;
    use crate::model::player::{Roster, Seat};
    use crate::model::suggestion::Suggestion;

    fn three_by_three() -> CardCatalog {
        CardCatalog::new(&["A1", "A2", "A3"], &["B1", "B2", "B3"], &["C1", "C2", "C3"]).unwrap()
    }

    fn base(players: &[&str]) -> KnowledgeBase {
        KnowledgeBase::new(three_by_three(), Roster::from_names(players, 0).unwrap())
    }

    fn card(kb: &KnowledgeBase, name: &str) -> Card {
        kb.catalog().card_named(name).unwrap()
    }

    #[test]
    fn record_has_card_updates_every_structure() {
        let mut kb = base(&["Ann", "Bob", "Cat"]);
        let a1 = card(&kb, "A1");
        kb.record_has_card(Seat::new(1), a1).unwrap();

        assert!(kb.knowledge(Seat::new(1)).unwrap().holds_card(a1));
        assert!(!kb.knowledge(Seat::new(0)).unwrap().could_hold(a1));
        assert!(!kb.knowledge(Seat::new(2)).unwrap().could_hold(a1));
        assert!(!kb.unknown_cards().contains(a1));
        assert!(!kb.solution_candidates(Category::Suspect).contains(a1));
    }

    #[test]
    fn record_has_card_is_idempotent() {
        let mut kb = base(&["Ann", "Bob"]);
        let b2 = card(&kb, "B2");
        kb.record_has_card(Seat::new(0), b2).unwrap();
        let first = kb.clone();
        kb.record_has_card(Seat::new(0), b2).unwrap();
        assert_eq!(kb, first);
    }

    #[test]
    fn record_has_card_rejects_excluded_cards() {
        let mut kb = base(&["Ann", "Bob"]);
        let a1 = card(&kb, "A1");
        kb.record_does_not_have(Seat::new(1), a1).unwrap();
        let before = kb.clone();
        let result = kb.record_has_card(Seat::new(1), a1);
        assert_eq!(
            result,
            Err(RecordError::Contradiction(Contradiction::HeldAndExcluded {
                seat: Seat::new(1),
                card: a1,
            }))
        );
        // A rejected event must leave the state untouched.
        assert_eq!(kb, before);
    }

    #[test]
    fn record_has_card_rejects_cards_outside_the_deck() {
        let mut kb = base(&["Ann", "Bob"]);
        let bogus = Card::from_id(40);
        assert_eq!(
            kb.record_has_card(Seat::new(0), bogus),
            Err(RecordError::InvalidCard(bogus))
        );
    }

    #[test]
    fn unknown_seats_are_rejected() {
        let mut kb = base(&["Ann", "Bob"]);
        let a1 = card(&kb, "A1");
        assert_eq!(
            kb.record_has_card(Seat::new(7), a1),
            Err(RecordError::UnknownSeat(Seat::new(7)))
        );
    }

    #[test]
    fn showed_one_of_with_single_possibility_resolves_immediately() {
        let mut kb = base(&["Ann", "Bob", "Cat"]);
        let a1 = card(&kb, "A1");
        let b1 = card(&kb, "B1");
        kb.record_does_not_have(Seat::new(1), a1).unwrap();

        let candidates = CardSet::EMPTY.with(a1).with(b1);
        kb.record_showed_one_of(Seat::new(1), candidates).unwrap();
        assert!(kb.knowledge(Seat::new(1)).unwrap().holds_card(b1));
        assert!(kb.constraints().is_empty());
    }

    #[test]
    fn showed_one_of_already_explained_by_held_card_is_dropped() {
        let mut kb = base(&["Ann", "Bob"]);
        let a1 = card(&kb, "A1");
        let b1 = card(&kb, "B1");
        kb.record_has_card(Seat::new(1), a1).unwrap();
        kb.record_does_not_have(Seat::new(1), b1).unwrap();

        // The held card fully explains the reveal; nothing is stored.
        let candidates = CardSet::EMPTY.with(a1).with(b1);
        kb.record_showed_one_of(Seat::new(1), candidates).unwrap();
        assert!(kb.constraints().is_empty());
    }

    #[test]
    fn no_one_showed_collapses_the_right_categories() {
        let mut kb = base(&["Ann", "Bob", "Cat"]);
        let a2 = card(&kb, "A2");
        let b2 = card(&kb, "B2");
        let c1 = card(&kb, "C1");

        let suggestion = Suggestion::new(a2, b2, c1);
        kb.record_no_one_showed(&suggestion, Seat::new(0)).unwrap();

        assert_eq!(kb.solution_candidates(Category::Suspect).solo(), Some(a2));
        assert_eq!(kb.solution_candidates(Category::Weapon).solo(), Some(b2));
        assert_eq!(kb.solution_candidates(Category::Location).solo(), Some(c1));
    }

    #[test]
    fn no_one_showed_skips_cards_in_the_observers_hand() {
        let mut kb = base(&["Ann", "Bob"]);
        let a2 = card(&kb, "A2");
        let b2 = card(&kb, "B2");
        let c1 = card(&kb, "C1");
        kb.record_has_card(Seat::new(0), a2).unwrap();

        let suggestion = Suggestion::new(a2, b2, c1);
        kb.record_no_one_showed(&suggestion, Seat::new(0)).unwrap();

        // The observer's own card explains the silence; its category stays open.
        assert!(kb.solution_candidates(Category::Suspect).len() > 1);
        assert_eq!(kb.solution_candidates(Category::Weapon).solo(), Some(b2));
    }

    #[test]
    fn confirmed_solution_card_cannot_be_placed_in_a_hand() {
        let mut kb = base(&["Ann", "Bob", "Cat"]);
        let c1 = card(&kb, "C1");
        let suggestion = Suggestion::new(card(&kb, "A2"), card(&kb, "B2"), c1);
        kb.record_no_one_showed(&suggestion, Seat::new(0)).unwrap();
        let before = kb.clone();

        let result = kb.record_has_card(Seat::new(1), c1);
        assert_eq!(
            result,
            Err(RecordError::Contradiction(Contradiction::SolutionEliminated {
                category: Category::Location,
                card: c1,
            }))
        );
        assert_eq!(kb, before);
    }

    #[test]
    fn no_one_showed_rejects_collapsing_onto_an_eliminated_card() {
        let mut kb = base(&["Ann", "Bob", "Cat"]);
        let a2 = card(&kb, "A2");
        kb.record_has_card(Seat::new(1), a2).unwrap();
        let before = kb.clone();

        // A2 sits in Bob's hand, so a silent round seen by Ann cannot put it
        // in the solution.
        let suggestion = Suggestion::new(a2, card(&kb, "B2"), card(&kb, "C1"));
        let result = kb.record_no_one_showed(&suggestion, Seat::new(0));
        assert_eq!(
            result,
            Err(RecordError::Contradiction(Contradiction::SolutionEliminated {
                category: Category::Suspect,
                card: a2,
            }))
        );
        // The weapon and location categories must not have collapsed either.
        assert_eq!(kb, before);
    }

    #[test]
    fn deduce_flags_unknown_cards_dropped_from_plural_candidates() {
        // This shape only arises from an edited or stale snapshot: a card is
        // still marked unknown, every seat excludes it, and its category's
        // candidate set has already dropped it while staying plural.
        let mut snapshot = KnowledgeSnapshot::capture(&base(&["Ann", "Bob"]));
        let a2 = Card::from_id(1);
        for hand in &mut snapshot.hands {
            hand.excluded.insert(a2);
        }
        snapshot.solution_candidates[Category::Suspect.index()].remove(a2);
        let mut kb = snapshot.restore().unwrap();

        let report = kb.deduce();
        assert!(report.contradictions.contains(
            &Contradiction::SolutionEliminated {
                category: Category::Suspect,
                card: a2,
            }
        ));
    }

    #[test]
    fn deduce_reports_no_change_on_a_fresh_session() {
        let mut kb = base(&["Ann", "Bob", "Cat"]);
        let report = kb.deduce();
        assert!(!report.changed);
        assert!(report.is_consistent());
    }

    #[test]
    fn solution_confirmation_excludes_the_envelope_card_everywhere() {
        let mut kb = base(&["Ann", "Bob", "Cat"]);
        let a2 = card(&kb, "A2");
        let b1 = card(&kb, "B1");
        let c1 = card(&kb, "C1");
        kb.record_no_one_showed(&Suggestion::new(a2, b1, c1), Seat::new(0))
            .unwrap();
        let report = kb.deduce();
        assert!(report.changed);
        for seat in [Seat::new(0), Seat::new(1), Seat::new(2)] {
            assert!(!kb.knowledge(seat).unwrap().could_hold(a2));
        }
    }
}
