use thiserror::Error;

use crate::core::{Card, CardCounts, DECK_COPIES, HAND_SIZE, Suit, Value};

/// Errors from validating meld rules against the deck.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeldRuleError {
    #[error("Rule '{name}' has an empty card pattern")]
    EmptyPattern { name: String },

    #[error("Rule '{name}' requires zero copies per instance")]
    ZeroCopies { name: String },

    #[error("Rule '{name}' lists {card} more than once; raise the copy count instead")]
    RepeatedCard { name: String, card: Card },

    #[error("Rule '{name}' needs {required} copies of {card} but the deck only holds {available}")]
    NeedsTooManyCopies {
        name: String,
        card: Card,
        required: u32,
        available: u32,
    },

    #[error("Rule '{name}' needs {required} cards but a hand only holds {hand_size}")]
    TooLargeForHand {
        name: String,
        required: u32,
        hand_size: u32,
    },

    #[error("Rule name '{name}' is used more than once")]
    DuplicateName { name: String },
}

/// The card pattern a meld rule matches.
///
/// Patterns are a closed set of kinds rather than free form data, so a
/// rule table coming in from configuration is fully typed once it has
/// been deserialized. Every variant carries a per-instance copy count;
/// the "double" rules of the standard table are just `copies: 2`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeldPattern {
    /// A fixed multiset of distinct cards, each held `copies` times per
    /// instance. Marriages and runs are card sets.
    CardSet { cards: Vec<Card>, copies: u32 },
    /// One card of the given value from all four suits, `copies` of each.
    /// "Round of aces" and friends.
    Around { value: Value, copies: u32 },
    /// Two specific named cards, `copies` of each. The pinochle itself:
    /// queen of spades and jack of diamonds.
    Pair {
        first: Card,
        second: Card,
        copies: u32,
    },
}

impl MeldPattern {
    /// Visit every `(card, copies required per instance)` pair of this
    /// pattern.
    fn for_each_requirement(&self, mut f: impl FnMut(Card, u32)) {
        match self {
            MeldPattern::CardSet { cards, copies } => {
                for card in cards {
                    f(*card, *copies);
                }
            }
            MeldPattern::Around { value, copies } => {
                for suit in Suit::ALL {
                    f(Card::new(*value, suit), *copies);
                }
            }
            MeldPattern::Pair {
                first,
                second,
                copies,
            } => {
                f(*first, *copies);
                f(*second, *copies);
            }
        }
    }

    fn copies(&self) -> u32 {
        match self {
            MeldPattern::CardSet { copies, .. } => *copies,
            MeldPattern::Around { copies, .. } => *copies,
            MeldPattern::Pair { copies, .. } => *copies,
        }
    }
}

/// A single named meld rule: a pattern and the points one instance of it
/// is worth. Point values are configuration, not game law.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeldRule {
    name: String,
    pattern: MeldPattern,
    value: u32,
}

impl MeldRule {
    /// Create a new rule. Validation happens when the rule joins a
    /// `MeldRuleSet`, not here.
    pub fn new(name: impl Into<String>, pattern: MeldPattern, value: u32) -> Self {
        Self {
            name: name.into(),
            pattern,
            value,
        }
    }

    /// The rule's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points awarded per achieved instance.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The card pattern this rule matches.
    pub fn pattern(&self) -> &MeldPattern {
        &self.pattern
    }

    /// Check that this rule can ever be satisfied by a hand dealt from
    /// the deck.
    pub fn validate(&self) -> Result<(), MeldRuleError> {
        if self.pattern.copies() == 0 {
            return Err(MeldRuleError::ZeroCopies {
                name: self.name.clone(),
            });
        }
        match &self.pattern {
            MeldPattern::CardSet { cards, .. } => {
                if cards.is_empty() {
                    return Err(MeldRuleError::EmptyPattern {
                        name: self.name.clone(),
                    });
                }
                for (i, card) in cards.iter().enumerate() {
                    if cards[..i].contains(card) {
                        return Err(MeldRuleError::RepeatedCard {
                            name: self.name.clone(),
                            card: *card,
                        });
                    }
                }
            }
            MeldPattern::Around { .. } => {}
            MeldPattern::Pair { first, second, .. } => {
                if first == second {
                    return Err(MeldRuleError::RepeatedCard {
                        name: self.name.clone(),
                        card: *first,
                    });
                }
            }
        }

        let mut total_required: u32 = 0;
        let mut too_many: Option<(Card, u32)> = None;
        self.pattern.for_each_requirement(|card, required| {
            total_required += required;
            if required as usize > DECK_COPIES && too_many.is_none() {
                too_many = Some((card, required));
            }
        });
        if let Some((card, required)) = too_many {
            return Err(MeldRuleError::NeedsTooManyCopies {
                name: self.name.clone(),
                card,
                required,
                available: DECK_COPIES as u32,
            });
        }
        if total_required as usize > HAND_SIZE {
            return Err(MeldRuleError::TooLargeForHand {
                name: self.name.clone(),
                required: total_required,
                hand_size: HAND_SIZE as u32,
            });
        }
        Ok(())
    }

    /// How many complete instances of this rule the counted hand holds.
    ///
    /// Each instance needs its own copies of every required card, so the
    /// answer is the floor of the scarcest requirement. Cards are not
    /// spent: a different rule asking about the same cards sees the full
    /// hand again.
    pub fn instances(&self, counts: &CardCounts) -> u32 {
        let mut instances = u32::MAX;
        self.pattern.for_each_requirement(|card, required| {
            instances = instances.min(counts.count(card) / required);
        });
        if instances == u32::MAX { 0 } else { instances }
    }

    /// Points this rule awards against the counted hand.
    pub fn points(&self, counts: &CardCounts) -> u32 {
        self.instances(counts) * self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hand;

    fn counts_of(s: &str) -> CardCounts {
        Hand::new_from_str(s).unwrap().counts()
    }

    fn marriage(suit: Suit) -> MeldPattern {
        MeldPattern::CardSet {
            cards: vec![Card::new(Value::King, suit), Card::new(Value::Queen, suit)],
            copies: 1,
        }
    }

    #[test]
    fn test_marriage_instances() {
        let rule = MeldRule::new("Marriage Spades", marriage(Suit::Spade), 2);
        assert_eq!(0, rule.instances(&counts_of("KS")));
        assert_eq!(1, rule.instances(&counts_of("KSQS")));
        // Two kings and one queen is still a single marriage.
        assert_eq!(1, rule.instances(&counts_of("KSKSQS")));
        assert_eq!(2, rule.instances(&counts_of("KSKSQSQS")));
    }

    #[test]
    fn test_around_instances() {
        let rule = MeldRule::new(
            "Round Of Aces",
            MeldPattern::Around {
                value: Value::Ace,
                copies: 1,
            },
            10,
        );
        assert_eq!(0, rule.instances(&counts_of("ACADAH")));
        assert_eq!(1, rule.instances(&counts_of("ACADAHAS")));
        assert_eq!(1, rule.instances(&counts_of("ACACADAHAS")));
        assert_eq!(2, rule.instances(&counts_of("ACACADADAHAHASAS")));
    }

    #[test]
    fn test_pair_instances() {
        let rule = MeldRule::new(
            "Pinochle",
            MeldPattern::Pair {
                first: Card::new(Value::Queen, Suit::Spade),
                second: Card::new(Value::Jack, Suit::Diamond),
                copies: 1,
            },
            4,
        );
        assert_eq!(0, rule.instances(&counts_of("QSJC")));
        assert_eq!(1, rule.instances(&counts_of("QSJD")));
        assert_eq!(2, rule.instances(&counts_of("QSQSJDJD")));
    }

    #[test]
    fn test_double_copies_pattern() {
        let rule = MeldRule::new(
            "Double Marriage Spades",
            MeldPattern::CardSet {
                cards: vec![
                    Card::new(Value::King, Suit::Spade),
                    Card::new(Value::Queen, Suit::Spade),
                ],
                copies: 2,
            },
            2,
        );
        assert_eq!(0, rule.instances(&counts_of("KSQS")));
        assert_eq!(1, rule.instances(&counts_of("KSKSQSQS")));
    }

    #[test]
    fn test_validate_zero_copies() {
        let rule = MeldRule::new(
            "Broken",
            MeldPattern::Around {
                value: Value::King,
                copies: 0,
            },
            1,
        );
        assert!(matches!(
            rule.validate(),
            Err(MeldRuleError::ZeroCopies { .. })
        ));
    }

    #[test]
    fn test_validate_empty_set() {
        let rule = MeldRule::new(
            "Broken",
            MeldPattern::CardSet {
                cards: vec![],
                copies: 1,
            },
            1,
        );
        assert!(matches!(
            rule.validate(),
            Err(MeldRuleError::EmptyPattern { .. })
        ));
    }

    #[test]
    fn test_validate_repeated_card() {
        let card = Card::new(Value::Ace, Suit::Spade);
        let rule = MeldRule::new(
            "Broken",
            MeldPattern::CardSet {
                cards: vec![card, card],
                copies: 1,
            },
            1,
        );
        assert_eq!(
            rule.validate(),
            Err(MeldRuleError::RepeatedCard {
                name: "Broken".to_string(),
                card,
            })
        );
    }

    #[test]
    fn test_validate_too_many_copies_for_deck() {
        // Three copies of any one card can never be dealt from a two
        // copy deck.
        let rule = MeldRule::new(
            "Broken",
            MeldPattern::Around {
                value: Value::Ace,
                copies: 3,
            },
            1,
        );
        assert!(matches!(
            rule.validate(),
            Err(MeldRuleError::NeedsTooManyCopies { required: 3, .. })
        ));
    }

    #[test]
    fn test_validate_too_large_for_hand() {
        // Thirteen distinct cards at one copy each is satisfiable by the
        // deck but not by a twelve card hand.
        let mut cards: Vec<Card> = Vec::new();
        for suit in Suit::ALL {
            for value in [Value::Nine, Value::Ten, Value::Jack] {
                cards.push(Card::new(value, suit));
            }
        }
        cards.push(Card::new(Value::Ace, Suit::Spade));
        assert_eq!(13, cards.len());
        let rule = MeldRule::new("Broken", MeldPattern::CardSet { cards, copies: 1 }, 1);
        assert!(matches!(
            rule.validate(),
            Err(MeldRuleError::TooLargeForHand { required: 13, .. })
        ));
    }

    #[test]
    fn test_validate_double_run_is_fine() {
        // Ten cards per instance, right at the edge of a hand.
        let rule = MeldRule::new(
            "Double Run in Spades",
            MeldPattern::CardSet {
                cards: vec![
                    Card::new(Value::Jack, Suit::Spade),
                    Card::new(Value::Queen, Suit::Spade),
                    Card::new(Value::King, Suit::Spade),
                    Card::new(Value::Ten, Suit::Spade),
                    Card::new(Value::Ace, Suit::Spade),
                ],
                copies: 2,
            },
            133,
        );
        assert!(rule.validate().is_ok());
    }
}
