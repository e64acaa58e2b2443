use thiserror::Error;

use crate::core::Card;
use crate::meld::MeldRuleError;

/// Fatal configuration problems, all caught before any simulation runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Iteration count must be positive")]
    NoIterations,

    #[error("Histogram bucket width must be positive")]
    ZeroBucketWidth,

    #[error("Outlier threshold must be a finite, positive number of standard deviations")]
    InvalidOutlierThreshold,

    #[error("Team pairing {0:?} must cover each of the four players exactly once")]
    InvalidTeamPairing([[usize; 2]; 2]),

    #[error(transparent)]
    Rule(#[from] MeldRuleError),
}

/// Violations of the dealing invariants.
///
/// These indicate a logic bug in the deck or dealing code, not bad
/// input. They are checked defensively on every deal and should never
/// fire.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Dealt hand for player {player} has {actual} cards, expected {expected}")]
    WrongHandSize {
        player: usize,
        actual: usize,
        expected: usize,
    },

    #[error("Deal produced {actual} cards in total, expected {expected}")]
    WrongDealSize { actual: usize, expected: usize },

    #[error("Card {card} appears {dealt} times across the four hands, expected {expected}")]
    CardCountMismatch {
        card: Card,
        dealt: usize,
        expected: usize,
    },
}

/// Errors from driving a simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeldSimulationError {
    #[error("The simulation has already run to completion")]
    AlreadyRun,

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}
