use crate::core::Hand;

use super::rule_set::MeldRuleSet;

/// One rule's outcome for one hand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeldEntry {
    /// The rule's name.
    pub name: String,
    /// Complete instances of the rule the hand holds.
    pub instances: u32,
    /// Points earned: instances times the rule's value.
    pub points: u32,
}

/// The full scoring breakdown for one hand.
///
/// One entry per rule in the set, in rule order, including the rules the
/// hand didn't make. A hand matching nothing is a result full of zeros,
/// not an error.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeldResult {
    entries: Vec<MeldEntry>,
    total: u32,
}

impl MeldResult {
    /// Per-rule entries in rule order.
    pub fn entries(&self) -> &[MeldEntry] {
        &self.entries
    }

    /// The hand's total meld points.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Look an entry up by rule name.
    pub fn entry(&self, name: &str) -> Option<&MeldEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

/// Score a hand against a rule set with the full per-rule breakdown.
///
/// Pure: the same hand and rule set always produce the same result.
/// Every rule is counted against the complete hand multiset; a card can
/// feed a marriage and a run at once, it just can't be used twice within
/// one rule's instances.
pub fn score_hand(hand: &Hand, rule_set: &MeldRuleSet) -> MeldResult {
    let counts = hand.counts();
    let mut total = 0;
    let entries = rule_set
        .rules()
        .iter()
        .map(|rule| {
            let instances = rule.instances(&counts);
            let points = instances * rule.value();
            total += points;
            MeldEntry {
                name: rule.name().to_string(),
                instances,
                points,
            }
        })
        .collect();
    MeldResult { entries, total }
}

/// Score a hand and return just the total.
///
/// The simulation loop calls this millions of times, so it skips
/// building the per-rule breakdown.
pub fn score_total(hand: &Hand, rule_set: &MeldRuleSet) -> u32 {
    let counts = hand.counts();
    rule_set
        .rules()
        .iter()
        .map(|rule| rule.instances(&counts) * rule.value())
        .sum()
}
