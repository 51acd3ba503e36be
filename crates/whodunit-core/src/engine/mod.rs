//! Deterministic deduction over observed suggestion outcomes.
//!
//! This module is composed of:
//! - `knowledge`: per-seat certainty bookkeeping (`PlayerKnowledge`).
//! - `constraint`: unresolved "showed one of" facts (`RevealConstraint`).
//! - `knowledge_base`: the orchestrator owning all records, the solution
//!   candidate sets, and the fixed-point deduction loop.
//! - `snapshot`: JSON capture/restore of a session.

mod constraint;
mod knowledge;
mod knowledge_base;
mod snapshot;

pub use constraint::RevealConstraint;
pub use knowledge::{KnowledgeError, PlayerKnowledge};
pub use knowledge_base::{Contradiction, DeductionReport, KnowledgeBase, RecordError, Solution};
pub use snapshot::{
    ConstraintEntry, HandEntry, KnowledgeSnapshot, PlayerEntry, SnapshotError,
};
