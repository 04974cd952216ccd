//! Advisory rules evaluated over an input and its valuation.
//!
//! Rules are independent predicates kept in a fixed order. Every matching rule
//! contributes its message; none exclude each other.

use serde::{Deserialize, Serialize};

use super::input::{RiskLevel, ValuationInput};
use super::result::ValuationResult;

/// EBITDA margin (percent) below which cost optimization is advised.
pub const LOW_MARGIN_THRESHOLD: f64 = 15.0;

/// Growth rate (percent) below which market expansion is advised.
pub const LOW_GROWTH_THRESHOLD: f64 = 10.0;

/// Valuation spread (percent of low) above which predictability is advised.
pub const WIDE_SPREAD_THRESHOLD: f64 = 50.0;

/// Identifies which rule produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    CostOptimization,
    MarketExpansion,
    RiskMitigation,
    Predictability,
}

/// A triggered recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
}

/// Predicate over an input and its valuation.
pub type RulePredicate = fn(&ValuationInput, &ValuationResult) -> bool;

/// A (predicate, message) pair.
#[derive(Clone)]
pub struct RecommendationRule {
    pub kind: RecommendationKind,
    pub predicate: RulePredicate,
    pub message: &'static str,
}

impl RecommendationRule {
    pub fn new(kind: RecommendationKind, predicate: RulePredicate, message: &'static str) -> Self {
        Self {
            kind,
            predicate,
            message,
        }
    }

    /// Returns true if this rule applies.
    pub fn applies(&self, input: &ValuationInput, result: &ValuationResult) -> bool {
        (self.predicate)(input, result)
    }
}

impl std::fmt::Debug for RecommendationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationRule")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

fn low_margin(input: &ValuationInput, _: &ValuationResult) -> bool {
    input.ebitda_margin() < LOW_MARGIN_THRESHOLD
}

fn low_growth(input: &ValuationInput, _: &ValuationResult) -> bool {
    input.growth_rate < LOW_GROWTH_THRESHOLD
}

fn high_risk(input: &ValuationInput, _: &ValuationResult) -> bool {
    input.risk_level == RiskLevel::High
}

fn wide_spread(_: &ValuationInput, result: &ValuationResult) -> bool {
    result.spread_percent() > WIDE_SPREAD_THRESHOLD
}

/// Ordered rule list producing advisory messages.
#[derive(Debug, Clone)]
pub struct RecommendationGenerator {
    rules: Vec<RecommendationRule>,
}

impl RecommendationGenerator {
    /// Generator with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The four standard rules in their fixed order: margin, growth, risk, spread.
    pub fn standard() -> Self {
        Self::empty()
            .with_rule(RecommendationRule::new(
                RecommendationKind::CostOptimization,
                low_margin,
                "Consider implementing cost optimization strategies to improve EBITDA margins.",
            ))
            .with_rule(RecommendationRule::new(
                RecommendationKind::MarketExpansion,
                low_growth,
                "Explore new market opportunities to accelerate growth rate.",
            ))
            .with_rule(RecommendationRule::new(
                RecommendationKind::RiskMitigation,
                high_risk,
                "Focus on risk mitigation strategies to potentially lower the cost of capital.",
            ))
            .with_rule(RecommendationRule::new(
                RecommendationKind::Predictability,
                wide_spread,
                "Consider improving business predictability to narrow valuation range.",
            ))
    }

    /// Appends a rule after the existing ones.
    pub fn with_rule(mut self, rule: RecommendationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }

    /// Evaluates every rule in order and returns those that apply.
    pub fn evaluate(&self, input: &ValuationInput, result: &ValuationResult) -> Vec<Recommendation> {
        self.rules
            .iter()
            .filter(|rule| rule.applies(input, result))
            .map(|rule| Recommendation {
                kind: rule.kind,
                message: rule.message.to_string(),
            })
            .collect()
    }

    /// Messages of the applicable rules, in rule order.
    pub fn generate(&self, input: &ValuationInput, result: &ValuationResult) -> Vec<String> {
        self.evaluate(input, result)
            .into_iter()
            .map(|r| r.message)
            .collect()
    }
}

impl Default for RecommendationGenerator {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::valuation::ValuationRange;
    use proptest::prelude::*;

    fn narrow_result() -> ValuationResult {
        let r = ValuationRange::new(100.0, 120.0, 110.0);
        ValuationResult::from_ranges(r, r, r)
    }

    fn wide_result() -> ValuationResult {
        let r = ValuationRange::new(100.0, 200.0, 150.0);
        ValuationResult::from_ranges(r, r, r)
    }

    fn kinds(input: &ValuationInput, result: &ValuationResult) -> Vec<RecommendationKind> {
        RecommendationGenerator::standard()
            .evaluate(input, result)
            .into_iter()
            .map(|r| r.kind)
            .collect()
    }

    #[test]
    fn healthy_business_gets_no_recommendations() {
        let input = ValuationInput::new(100.0, 20.0, "saas", 20.0, RiskLevel::Low);
        assert!(kinds(&input, &narrow_result()).is_empty());
    }

    #[test]
    fn low_margin_and_low_growth_both_trigger() {
        let input = ValuationInput::new(10_000_000.0, 1_000_000.0, "saas", 5.0, RiskLevel::Medium);
        let generated = RecommendationGenerator::standard().generate(&input, &narrow_result());

        assert_eq!(
            generated,
            vec![
                "Consider implementing cost optimization strategies to improve EBITDA margins."
                    .to_string(),
                "Explore new market opportunities to accelerate growth rate.".to_string(),
            ]
        );
    }

    #[test]
    fn high_risk_alone_triggers_only_risk_message() {
        let input = ValuationInput::new(100.0, 20.0, "saas", 20.0, RiskLevel::High);
        assert_eq!(
            kinds(&input, &narrow_result()),
            vec![RecommendationKind::RiskMitigation]
        );
    }

    #[test]
    fn wide_spread_triggers_predictability() {
        let input = ValuationInput::new(100.0, 20.0, "saas", 20.0, RiskLevel::High);
        assert_eq!(
            kinds(&input, &wide_result()),
            vec![
                RecommendationKind::RiskMitigation,
                RecommendationKind::Predictability
            ]
        );
    }

    #[test]
    fn thresholds_are_strict() {
        // Margin exactly 15%, growth exactly 10%, spread exactly 50%.
        let r = ValuationRange::new(100.0, 150.0, 125.0);
        let result = ValuationResult::from_ranges(r, r, r);
        let input = ValuationInput::new(100.0, 15.0, "saas", 10.0, RiskLevel::Medium);
        assert!(kinds(&input, &result).is_empty());
    }

    #[test]
    fn all_zero_valuation_does_not_trigger_spread() {
        let zero = ValuationRange::default();
        let result = ValuationResult::from_ranges(zero, zero, zero);
        let input = ValuationInput::new(100.0, 20.0, "saas", 20.0, RiskLevel::Low);
        assert!(kinds(&input, &result).is_empty());
    }

    #[test]
    fn zero_low_with_positive_high_triggers_spread() {
        let result = ValuationResult::from_ranges(
            ValuationRange::new(0.0, 10.0, 0.0),
            ValuationRange::new(16.0, 24.0, 20.0),
            ValuationRange::new(14.4, 26.4, 20.0),
        );
        let input = ValuationInput::new(100.0, 20.0, "saas", 20.0, RiskLevel::Low);
        assert_eq!(
            kinds(&input, &result),
            vec![RecommendationKind::Predictability]
        );
    }

    #[test]
    fn custom_rules_append_after_standard_rules() {
        fn always(_: &ValuationInput, _: &ValuationResult) -> bool {
            true
        }

        let generator = RecommendationGenerator::standard().with_rule(RecommendationRule::new(
            RecommendationKind::Predictability,
            always,
            "Custom advice.",
        ));
        let input = ValuationInput::new(100.0, 20.0, "saas", 20.0, RiskLevel::High);
        let generated = generator.generate(&input, &narrow_result());

        assert_eq!(generator.rules().len(), 5);
        assert_eq!(generated.last().map(String::as_str), Some("Custom advice."));
        assert_eq!(generated.len(), 2);
    }

    proptest! {
        #[test]
        fn ordering_is_fixed_for_any_subset(
            margin in 0.0f64..40.0,
            growth in -20.0f64..40.0,
            high_risk in any::<bool>(),
            spread in 0.0f64..120.0,
        ) {
            let risk = if high_risk { RiskLevel::High } else { RiskLevel::Low };
            let input = ValuationInput::new(100.0, margin, "saas", growth, risk);
            let r = ValuationRange::new(100.0, 100.0 + spread, 100.0 + spread / 2.0);
            let result = ValuationResult::from_ranges(r, r, r);

            let order = [
                RecommendationKind::CostOptimization,
                RecommendationKind::MarketExpansion,
                RecommendationKind::RiskMitigation,
                RecommendationKind::Predictability,
            ];
            let produced = kinds(&input, &result);
            let positions: Vec<usize> = produced
                .iter()
                .map(|k| order.iter().position(|o| o == k).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
