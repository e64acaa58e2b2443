/// Module for meld rule patterns and per-rule validation.
mod rule;
/// Export `MeldRule`, `MeldPattern` and the rule error.
pub use self::rule::{MeldPattern, MeldRule, MeldRuleError};

/// Module for validated rule collections.
mod rule_set;
/// Export `MeldRuleSet`
pub use self::rule_set::MeldRuleSet;

/// Module with the meld scoring functions.
mod scorer;
/// Export the scorer entry points and result types.
pub use self::scorer::{MeldEntry, MeldResult, score_hand, score_total};
