use crate::core::NUM_PLAYERS;

use super::errors::ConfigurationError;

/// Which seats make up the two teams.
///
/// Fixed for a whole run. The default is the conventional partner
/// arrangement, seats 0 and 2 against seats 1 and 3.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamPairing {
    teams: [[usize; 2]; 2],
}

impl Default for TeamPairing {
    fn default() -> Self {
        Self {
            teams: [[0, 2], [1, 3]],
        }
    }
}

impl TeamPairing {
    /// Create a pairing, checking that it is a partition of the four
    /// players.
    pub fn new(teams: [[usize; 2]; 2]) -> Result<Self, ConfigurationError> {
        let pairing = Self { teams };
        pairing.validate()?;
        Ok(pairing)
    }

    /// The two teams as player index pairs.
    pub fn teams(&self) -> [[usize; 2]; 2] {
        self.teams
    }

    /// Check that every player 0..4 appears exactly once.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut seen = [false; NUM_PLAYERS];
        for team in self.teams {
            for player in team {
                if player >= NUM_PLAYERS || seen[player] {
                    return Err(ConfigurationError::InvalidTeamPairing(self.teams));
                }
                seen[player] = true;
            }
        }
        Ok(())
    }

    /// Sum each team's members' scores.
    pub fn team_scores(&self, player_scores: [u32; NUM_PLAYERS]) -> [u32; 2] {
        self.teams
            .map(|team| team.iter().map(|p| player_scores[*p]).sum())
    }
}

/// Everything the simulation consumes from the outside world.
///
/// This is plain data; loading it from a file or CLI is the caller's
/// business. `validate` is called before any simulation runs so bad
/// values fail fast.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// How many deals to simulate.
    pub iterations: u64,
    /// Which seats are partners.
    pub team_pairing: TeamPairing,
    /// Width of each histogram bucket in score points.
    pub bucket_width: u32,
    /// Drop outliers from histograms. Summary statistics always cover
    /// the full sample set regardless.
    pub filter_outliers: bool,
    /// Where the outlier cutoff sits, in standard deviations above the
    /// mean.
    pub outlier_std_devs: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            team_pairing: TeamPairing::default(),
            bucket_width: 1,
            filter_outliers: false,
            outlier_std_devs: 5.0,
        }
    }
}

impl SimulationConfig {
    /// Reject configurations no simulation should run with.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.iterations == 0 {
            return Err(ConfigurationError::NoIterations);
        }
        if self.bucket_width == 0 {
            return Err(ConfigurationError::ZeroBucketWidth);
        }
        if !self.outlier_std_devs.is_finite() || self.outlier_std_devs <= 0.0 {
            return Err(ConfigurationError::InvalidOutlierThreshold);
        }
        self.team_pairing.validate()
    }

    /// The outlier cutoff in standard deviations, if filtering is on.
    pub fn outlier_cutoff(&self) -> Option<f64> {
        if self.filter_outliers {
            Some(self.outlier_std_devs)
        } else {
            None
        }
    }
}
