use crate::core::{Card, Suit, Value};

use super::rule::{MeldPattern, MeldRule, MeldRuleError};

/// An ordered, validated collection of meld rules.
///
/// Immutable once constructed; `new` is the only way in and it checks
/// every rule against the deck composition, so a `MeldRuleSet` in hand is
/// known satisfiable. Rule tables usually arrive as configuration data:
/// deserialize a `Vec<MeldRule>` and pass it through `new`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeldRuleSet {
    rules: Vec<MeldRule>,
}

impl MeldRuleSet {
    /// Validate the rules and build a rule set.
    ///
    /// Rules keep the order they were given in; scoring and reporting
    /// walk them in that order.
    pub fn new(rules: Vec<MeldRule>) -> Result<Self, MeldRuleError> {
        for (i, rule) in rules.iter().enumerate() {
            rule.validate()?;
            if rules[..i].iter().any(|r| r.name() == rule.name()) {
                return Err(MeldRuleError::DuplicateName {
                    name: rule.name().to_string(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// The rules in definition order.
    pub fn rules(&self) -> &[MeldRule] {
        &self.rules
    }

    /// How many rules are in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Is the rule set empty? An empty set is valid and scores every
    /// hand zero.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The standard pinochle meld table.
    ///
    /// Rounds, marriages, runs and pinochles with their usual point
    /// values. Run values are discounted by the marriage they contain
    /// since cards count toward every rule independently.
    pub fn standard() -> Self {
        let mut rules = Vec::with_capacity(26);

        for (value, single, double) in [
            (Value::Ace, 10, 90),
            (Value::King, 8, 72),
            (Value::Queen, 6, 54),
            (Value::Jack, 4, 36),
        ] {
            rules.push(MeldRule::new(
                format!("Round Of {}s", long_value_name(value)),
                MeldPattern::Around { value, copies: 1 },
                single,
            ));
            rules.push(MeldRule::new(
                format!("All {}s", long_value_name(value)),
                MeldPattern::Around { value, copies: 2 },
                double,
            ));
        }

        for suit in Suit::ALL {
            let marriage = vec![
                Card::new(Value::King, suit),
                Card::new(Value::Queen, suit),
            ];
            rules.push(MeldRule::new(
                format!("Marriage {}", suit_name(suit)),
                MeldPattern::CardSet {
                    cards: marriage.clone(),
                    copies: 1,
                },
                2,
            ));
            rules.push(MeldRule::new(
                format!("Double Marriage {}", suit_name(suit)),
                MeldPattern::CardSet {
                    cards: marriage,
                    copies: 2,
                },
                2,
            ));

            let run = vec![
                Card::new(Value::Jack, suit),
                Card::new(Value::Queen, suit),
                Card::new(Value::King, suit),
                Card::new(Value::Ten, suit),
                Card::new(Value::Ace, suit),
            ];
            rules.push(MeldRule::new(
                format!("Run in {}", suit_name(suit)),
                MeldPattern::CardSet {
                    cards: run.clone(),
                    copies: 1,
                },
                13,
            ));
            rules.push(MeldRule::new(
                format!("Double Run in {}", suit_name(suit)),
                MeldPattern::CardSet {
                    cards: run,
                    copies: 2,
                },
                133,
            ));
        }

        rules.push(MeldRule::new(
            "Pinochle",
            MeldPattern::Pair {
                first: Card::new(Value::Queen, Suit::Spade),
                second: Card::new(Value::Jack, Suit::Diamond),
                copies: 1,
            },
            4,
        ));
        rules.push(MeldRule::new(
            "Double Pinochle",
            MeldPattern::Pair {
                first: Card::new(Value::Queen, Suit::Spade),
                second: Card::new(Value::Jack, Suit::Diamond),
                copies: 2,
            },
            26,
        ));

        // The table above is static and satisfiable; the round trip
        // through `new` is covered by a test.
        Self { rules }
    }
}

fn suit_name(suit: Suit) -> &'static str {
    match suit {
        Suit::Club => "Clubs",
        Suit::Diamond => "Diamonds",
        Suit::Heart => "Hearts",
        Suit::Spade => "Spades",
    }
}

fn long_value_name(value: Value) -> &'static str {
    match value {
        Value::Nine => "Nine",
        Value::Ten => "Ten",
        Value::Jack => "Jack",
        Value::Queen => "Queen",
        Value::King => "King",
        Value::Ace => "Ace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_passes_validation() {
        let standard = MeldRuleSet::standard();
        let revalidated = MeldRuleSet::new(standard.rules().to_vec()).unwrap();
        assert_eq!(standard, revalidated);
    }

    #[test]
    fn test_standard_shape() {
        let standard = MeldRuleSet::standard();
        assert_eq!(26, standard.len());
        // Spot check some point values against the usual table.
        let value_of = |name: &str| {
            standard
                .rules()
                .iter()
                .find(|r| r.name() == name)
                .map(|r| r.value())
        };
        assert_eq!(Some(10), value_of("Round Of Aces"));
        assert_eq!(Some(90), value_of("All Aces"));
        assert_eq!(Some(2), value_of("Marriage Spades"));
        assert_eq!(Some(13), value_of("Run in Hearts"));
        assert_eq!(Some(133), value_of("Double Run in Clubs"));
        assert_eq!(Some(4), value_of("Pinochle"));
        assert_eq!(Some(26), value_of("Double Pinochle"));
    }

    #[test]
    fn test_rules_keep_definition_order() {
        let rules = vec![
            MeldRule::new(
                "B",
                MeldPattern::Around {
                    value: Value::King,
                    copies: 1,
                },
                8,
            ),
            MeldRule::new(
                "A",
                MeldPattern::Around {
                    value: Value::Ace,
                    copies: 1,
                },
                10,
            ),
        ];
        let set = MeldRuleSet::new(rules).unwrap();
        let names: Vec<&str> = set.rules().iter().map(|r| r.name()).collect();
        assert_eq!(vec!["B", "A"], names);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let rules = vec![
            MeldRule::new(
                "Round Of Aces",
                MeldPattern::Around {
                    value: Value::Ace,
                    copies: 1,
                },
                10,
            ),
            MeldRule::new(
                "Round Of Aces",
                MeldPattern::Around {
                    value: Value::King,
                    copies: 1,
                },
                8,
            ),
        ];
        assert_eq!(
            MeldRuleSet::new(rules),
            Err(MeldRuleError::DuplicateName {
                name: "Round Of Aces".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_rule_rejected() {
        let rules = vec![MeldRule::new(
            "Triple Aces",
            MeldPattern::Around {
                value: Value::Ace,
                copies: 3,
            },
            100,
        )];
        assert!(matches!(
            MeldRuleSet::new(rules),
            Err(MeldRuleError::NeedsTooManyCopies { .. })
        ));
    }

    #[test]
    fn test_empty_set_is_allowed() {
        let set = MeldRuleSet::new(vec![]).unwrap();
        assert!(set.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_rules_deserialize_then_validate() {
        // A rule table as it would arrive from a config source.
        let json = r#"[
            {
                "name": "Marriage Spades",
                "pattern": {
                    "CardSet": {
                        "cards": [
                            { "value": "King", "suit": "Spade" },
                            { "value": "Queen", "suit": "Spade" }
                        ],
                        "copies": 1
                    }
                },
                "value": 2
            }
        ]"#;
        let rules: Vec<MeldRule> = serde_json::from_str(json).unwrap();
        let set = MeldRuleSet::new(rules).unwrap();
        assert_eq!(1, set.len());
        assert_eq!("Marriage Spades", set.rules()[0].name());
    }
}
