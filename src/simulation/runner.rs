use rand::Rng;
use tracing::{debug, info, trace};

use crate::core::{Card, Deck, DECK_COPIES, DECK_SIZE, HAND_SIZE, Hand, NUM_PLAYERS, Suit, Value};
use crate::meld::{MeldRuleSet, score_total};

use super::config::SimulationConfig;
use super::errors::{ConfigurationError, InvariantViolation, MeldSimulationError};
use super::report::{Reporter, ScoreCategory};
use super::stats::{StatSummary, StatsAggregator};

/// How often the run loop emits a progress trace event.
const PROGRESS_LOG_INTERVAL: u64 = 1 << 20;

/// Where a simulation is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    /// Built but not yet run.
    Idle,
    /// `run` is executing.
    Running,
    /// All iterations completed.
    Done,
}

/// # MeldSimulationBuilder
///
/// Builder for a `MeldSimulation`. Everything is optional: the default
/// is a million iterations of the standard meld table with conventional
/// team pairing.
///
/// ## Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rs_pinochle::simulation::{MeldSimulationBuilder, SimulationConfig};
///
/// let mut sim = MeldSimulationBuilder::default()
///     .config(SimulationConfig {
///         iterations: 1_000,
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// sim.run(&mut rng).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MeldSimulationBuilder {
    rule_set: Option<MeldRuleSet>,
    config: Option<SimulationConfig>,
    iterations: Option<u64>,
}

impl MeldSimulationBuilder {
    /// Set the meld rule set scoring each dealt hand.
    pub fn rule_set(mut self, rule_set: MeldRuleSet) -> Self {
        self.rule_set = Some(rule_set);
        self
    }

    /// Set the full simulation configuration.
    pub fn config(mut self, config: SimulationConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override just the iteration count. Applied on top of whatever
    /// config was given.
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Validate the configuration and build the simulation.
    ///
    /// @returns ConfigurationError for anything no simulation should run
    /// with: zero iterations, zero bucket width, a broken team pairing.
    pub fn build(self) -> Result<MeldSimulation, ConfigurationError> {
        let mut config = self.config.unwrap_or_default();
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        config.validate()?;
        let rule_set = self.rule_set.unwrap_or_else(MeldRuleSet::standard);
        Ok(MeldSimulation {
            deck: Deck::default(),
            rule_set,
            config,
            aggregator: StatsAggregator::new(),
            state: SimulationState::Idle,
        })
    }
}

/// A complete meld simulation: deck, rule set, configuration and the
/// accumulated statistics.
///
/// Each iteration shuffles and deals, scores the four hands, and records
/// player, team and overall totals. Iterations are fully independent, so
/// a big run can be split across several simulations running disjoint
/// iteration counts (seed their RNGs differently); merge the resulting
/// aggregators to get the same statistics one big run would produce.
#[derive(Debug)]
pub struct MeldSimulation {
    deck: Deck,
    rule_set: MeldRuleSet,
    config: SimulationConfig,
    aggregator: StatsAggregator,
    state: SimulationState,
}

impl MeldSimulation {
    /// Where the simulation is in its lifecycle.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// The configuration this simulation runs with.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The rule set scoring each hand.
    pub fn rule_set(&self) -> &MeldRuleSet {
        &self.rule_set
    }

    /// The statistics accumulated so far.
    pub fn aggregator(&self) -> &StatsAggregator {
        &self.aggregator
    }

    /// Take the aggregator, consuming the simulation. Handy for merging
    /// batch results.
    pub fn into_aggregator(self) -> StatsAggregator {
        self.aggregator
    }

    /// Run every configured iteration.
    ///
    /// Runs exactly `config.iterations` deals and moves to `Done`; a
    /// finished simulation refuses to run again. The deal invariants are
    /// checked defensively every iteration - a violation is a logic bug
    /// in dealing, not a user error, and aborts the run.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Result<(), MeldSimulationError> {
        if self.state != SimulationState::Idle {
            return Err(MeldSimulationError::AlreadyRun);
        }
        self.state = SimulationState::Running;
        debug!(
            iterations = self.config.iterations,
            rules = self.rule_set.len(),
            "starting meld simulation"
        );

        for iteration in 0..self.config.iterations {
            let hands = self.deck.shuffle_and_deal(rng);
            verify_deal(&hands)?;

            let scores: [u32; NUM_PLAYERS] =
                core::array::from_fn(|p| score_total(&hands[p], &self.rule_set));
            self.aggregator.record_deal(scores, &self.config.team_pairing);

            if (iteration + 1) % PROGRESS_LOG_INTERVAL == 0 {
                trace!(completed = iteration + 1, "simulation progress");
            }
        }

        self.state = SimulationState::Done;
        info!(
            iterations = self.config.iterations,
            "meld simulation complete"
        );
        Ok(())
    }

    /// Summaries for every category, in reporting order.
    pub fn summaries(&self) -> Vec<(ScoreCategory, StatSummary)> {
        self.aggregator.summaries(&self.config)
    }

    /// Hand each category's summary to a reporter.
    pub fn report_to(&self, reporter: &mut dyn Reporter) {
        self.aggregator.report_to(&self.config, reporter);
    }
}

/// Check the dealing invariants: four hands of twelve covering the whole
/// deck with nothing duplicated.
fn verify_deal(hands: &[Hand; NUM_PLAYERS]) -> Result<(), InvariantViolation> {
    let mut total = 0;
    for (player, hand) in hands.iter().enumerate() {
        if hand.len() != HAND_SIZE {
            return Err(InvariantViolation::WrongHandSize {
                player,
                actual: hand.len(),
                expected: HAND_SIZE,
            });
        }
        total += hand.len();
    }
    if total != DECK_SIZE {
        return Err(InvariantViolation::WrongDealSize {
            actual: total,
            expected: DECK_SIZE,
        });
    }

    let counts: [_; NUM_PLAYERS] = core::array::from_fn(|p| hands[p].counts());
    for suit in Suit::ALL {
        for value in Value::ALL {
            let card = Card::new(value, suit);
            let dealt: u32 = counts.iter().map(|c| c.count(card)).sum();
            if dealt as usize != DECK_COPIES {
                return Err(InvariantViolation::CardCountMismatch {
                    card,
                    dealt: dealt as usize,
                    expected: DECK_COPIES,
                });
            }
        }
    }
    Ok(())
}
