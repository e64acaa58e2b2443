//! # RS Pinochle
//!
//! A library for Monte Carlo simulation of the pinochle meld phase.
//!
//! Four players are dealt twelve cards each from a 48 card double deck,
//! every hand is scored against a configurable table of meld rules, and
//! the score distributions are accumulated per player, per team and
//! overall - min, max, mean, median, mode, population standard deviation
//! and a bucketed histogram for each.
//!
//! The crate is split into three modules:
//!
//! - [`core`] has the card, hand and deck types.
//! - [`meld`] has the rule patterns, the validated rule set and the
//!   scorer.
//! - [`simulation`] has the run configuration, the simulation driver and
//!   the statistics aggregation.
//!
//! ## Examples
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use rs_pinochle::simulation::{MeldSimulationBuilder, ScoreCategory};
//!
//! let mut sim = MeldSimulationBuilder::default()
//!     .iterations(10_000)
//!     .build()
//!     .unwrap();
//!
//! // Seed the RNG to make the run reproducible.
//! let mut rng = StdRng::seed_from_u64(42);
//! sim.run(&mut rng).unwrap();
//!
//! for (category, summary) in sim.summaries() {
//!     println!("{category}: mean {:.2} over {} deals", summary.mean, summary.count);
//! }
//! # assert_eq!(rs_pinochle::simulation::CATEGORY_COUNT, sim.summaries().len());
//! ```
//!
//! Scoring a single hand works without any simulation:
//!
//! ```
//! use rs_pinochle::core::Hand;
//! use rs_pinochle::meld::{MeldRuleSet, score_hand};
//!
//! let hand = Hand::new_from_str("KSQSJD10SAS9C9DJSQH10C10DJC").unwrap();
//! let result = score_hand(&hand, &MeldRuleSet::standard());
//! println!("total meld: {}", result.total());
//! ```

/// The core module with cards, hands and the deck.
pub mod core;

/// Meld rules and scoring.
pub mod meld;

/// The Monte Carlo driver and statistics.
pub mod simulation;
