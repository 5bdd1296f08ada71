//! Rule Engine - fixed-order rule aggregation
//!
//! Runs every rule, always, in registration order. There is no
//! short-circuiting, so the reason list is reproducible.

use crate::config::ScreeningConfig;
use crate::rules::{HighFrequencyRule, LargeAmountRule, RapidMovementRule, RoundAmountRule, Rule};
use amlguard_core::ValidatedTransaction;
use amlguard_persistence::{HistoryAccessor, PersistenceResult};

/// A rule that fired during one evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggeredRule {
    pub code: &'static str,
    pub reason: String,
}

/// Outcome of running the rule set against one transaction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Rules that fired, in rule order
    pub triggered: Vec<TriggeredRule>,
}

impl Evaluation {
    /// Logical OR of all rule outcomes
    pub fn suspicious(&self) -> bool {
        !self.triggered.is_empty()
    }

    /// Reason text of every fired rule, in rule order
    pub fn reasons(&self) -> Vec<String> {
        self.triggered.iter().map(|t| t.reason.clone()).collect()
    }
}

/// Runs the rule set in a fixed order
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Standard rule set: Large → HighFrequency → RapidMovement → RoundAmount
    pub fn new(config: &ScreeningConfig) -> Self {
        Self::with_rules(vec![
            Box::new(LargeAmountRule::new(config.large_amount_threshold)),
            Box::new(HighFrequencyRule::new(
                config.high_frequency_count,
                config.high_frequency_window(),
            )),
            Box::new(RapidMovementRule::new(config.rapid_movement_window())),
            Box::new(RoundAmountRule),
        ])
    }

    /// Custom rule set, evaluated in the given order
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Codes of the registered rules, in evaluation order
    pub fn rule_codes(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.code()).collect()
    }

    /// Evaluate every rule against `tx`.
    ///
    /// A history failure aborts the evaluation.
    pub async fn evaluate(
        &self,
        tx: &ValidatedTransaction,
        history: &dyn HistoryAccessor,
    ) -> PersistenceResult<Evaluation> {
        let mut evaluation = Evaluation::default();

        for rule in &self.rules {
            if rule.triggered(tx, history).await? {
                evaluation.triggered.push(TriggeredRule {
                    code: rule.code(),
                    reason: rule.reason(),
                });
            }
        }

        Ok(evaluation)
    }
}
