/// Module with the simulation and invariant error types.
mod errors;
/// Export the error enums.
pub use self::errors::{ConfigurationError, InvariantViolation, MeldSimulationError};

/// Module for run configuration and team pairing.
mod config;
/// Export `SimulationConfig` and `TeamPairing`
pub use self::config::{SimulationConfig, TeamPairing};

/// Module with the reporting categories and the `Reporter` seam.
mod report;
/// Export `ScoreCategory` and `Reporter`
pub use self::report::{CATEGORY_COUNT, Reporter, ScoreCategory};

/// Module with sample accumulation and summary statistics.
mod stats;
/// Export the statistics types.
pub use self::stats::{Histogram, HistogramBucket, SampleSeries, StatSummary, StatsAggregator};

/// Module that drives the deal/score/record loop.
mod runner;
/// Export the simulation, its builder, and its state.
pub use self::runner::{MeldSimulation, MeldSimulationBuilder, SimulationState};
