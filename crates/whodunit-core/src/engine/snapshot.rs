use crate::engine::constraint::RevealConstraint;
use crate::engine::knowledge::PlayerKnowledge;
use crate::engine::knowledge_base::KnowledgeBase;
use crate::model::cardset::CardSet;
use crate::model::catalog::{CardCatalog, SetupError};
use crate::model::category::Category;
use crate::model::player::{Player, ResponseSource, Roster, RosterError, Seat};
use core::fmt;
use serde::{Deserialize, Serialize};

/// A serializable capture of a whole session, for saving and resuming.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeSnapshot {
    pub suspects: Vec<String>,
    pub weapons: Vec<String>,
    pub locations: Vec<String>,
    pub players: Vec<PlayerEntry>,
    pub hands: Vec<HandEntry>,
    pub solution_candidates: [CardSet; 3],
    pub constraints: Vec<ConstraintEntry>,
    pub unknown_cards: CardSet,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerEntry {
    pub name: String,
    pub source: ResponseSource,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HandEntry {
    pub holds: CardSet,
    pub excluded: CardSet,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConstraintEntry {
    pub seat: u8,
    pub candidates: CardSet,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotError {
    Setup(SetupError),
    Roster(RosterError),
    /// A stored card set references ids outside the catalog.
    OutOfRangeCards,
    /// A seat's holds and excluded sets overlap.
    OverlappingKnowledge { seat: u8 },
    MismatchedHandCount { expected: usize, actual: usize },
    UnknownConstraintSeat(u8),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Setup(err) => err.fmt(f),
            SnapshotError::Roster(err) => err.fmt(f),
            SnapshotError::OutOfRangeCards => {
                write!(f, "snapshot references cards outside the configured deck")
            }
            SnapshotError::OverlappingKnowledge { seat } => {
                write!(f, "snapshot holds/excluded sets overlap for seat {seat}")
            }
            SnapshotError::MismatchedHandCount { expected, actual } => {
                write!(f, "snapshot stores {actual} hands for {expected} players")
            }
            SnapshotError::UnknownConstraintSeat(seat) => {
                write!(f, "snapshot constraint references unknown seat {seat}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<SetupError> for SnapshotError {
    fn from(err: SetupError) -> Self {
        SnapshotError::Setup(err)
    }
}

impl From<RosterError> for SnapshotError {
    fn from(err: RosterError) -> Self {
        SnapshotError::Roster(err)
    }
}

impl KnowledgeSnapshot {
    pub fn capture(kb: &KnowledgeBase) -> Self {
        let catalog = kb.catalog();
        let players = kb
            .roster()
            .iter()
            .map(|player| PlayerEntry {
                name: player.name().to_string(),
                source: player.source(),
            })
            .collect();
        let hands = kb
            .roster()
            .seats()
            .filter_map(|seat| kb.knowledge(seat))
            .map(|knowledge| HandEntry {
                holds: knowledge.holds(),
                excluded: knowledge.excluded(),
            })
            .collect();
        let constraints = kb
            .constraints()
            .iter()
            .map(|constraint| ConstraintEntry {
                seat: constraint.seat().index() as u8,
                candidates: constraint.candidates(),
            })
            .collect();
        KnowledgeSnapshot {
            suspects: catalog.names_in(Category::Suspect).to_vec(),
            weapons: catalog.names_in(Category::Weapon).to_vec(),
            locations: catalog.names_in(Category::Location).to_vec(),
            players,
            hands,
            solution_candidates: [
                kb.solution_candidates(Category::Suspect),
                kb.solution_candidates(Category::Weapon),
                kb.solution_candidates(Category::Location),
            ],
            constraints,
            unknown_cards: kb.unknown_cards(),
        }
    }

    pub fn restore(self) -> Result<KnowledgeBase, SnapshotError> {
        let suspects: Vec<&str> = self.suspects.iter().map(String::as_str).collect();
        let weapons: Vec<&str> = self.weapons.iter().map(String::as_str).collect();
        let locations: Vec<&str> = self.locations.iter().map(String::as_str).collect();
        let catalog = CardCatalog::new(&suspects, &weapons, &locations)?;

        let players: Vec<Player> = self
            .players
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let seat = Seat::from_index(index);
                match entry.source {
                    ResponseSource::Local => Player::local(seat, entry.name.clone()),
                    ResponseSource::Observed => Player::observed(seat, entry.name.clone()),
                }
            })
            .collect();
        let roster = Roster::new(players)?;

        if self.hands.len() != roster.len() {
            return Err(SnapshotError::MismatchedHandCount {
                expected: roster.len(),
                actual: self.hands.len(),
            });
        }

        let all = catalog.all_cards();
        let card_count = catalog.len() as u8;
        let mut knowledge = Vec::with_capacity(self.hands.len());
        for (index, hand) in self.hands.iter().enumerate() {
            if !hand.holds.is_subset_of(all) || !hand.excluded.is_subset_of(all) {
                return Err(SnapshotError::OutOfRangeCards);
            }
            let record = PlayerKnowledge::from_parts(hand.holds, hand.excluded, card_count)
                .ok_or(SnapshotError::OverlappingKnowledge { seat: index as u8 })?;
            knowledge.push(record);
        }

        for candidates in self.solution_candidates {
            if !candidates.is_subset_of(all) {
                return Err(SnapshotError::OutOfRangeCards);
            }
        }
        if !self.unknown_cards.is_subset_of(all) {
            return Err(SnapshotError::OutOfRangeCards);
        }

        let mut constraints = Vec::with_capacity(self.constraints.len());
        for entry in &self.constraints {
            if entry.seat as usize >= roster.len() {
                return Err(SnapshotError::UnknownConstraintSeat(entry.seat));
            }
            if !entry.candidates.is_subset_of(all) {
                return Err(SnapshotError::OutOfRangeCards);
            }
            constraints.push(RevealConstraint::new(
                Seat::new(entry.seat),
                entry.candidates,
            ));
        }

        Ok(KnowledgeBase::from_parts(
            catalog,
            roster,
            knowledge,
            self.solution_candidates,
            constraints,
            self.unknown_cards,
        ))
    }

    pub fn to_json(kb: &KnowledgeBase) -> serde_json::Result<String> {
        let snapshot = Self::capture(kb);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
