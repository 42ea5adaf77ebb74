//! Weighted scoring classifier with ordered fallback heuristic.

use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::catalog::{AmountRange, CategoryCatalog, CategoryDefinition, Direction, FallbackRule};
use crate::constants::MAX_CONFIDENCE;

/// Classifier output for one transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub category_id: String,
    /// Heuristic certainty, 0-95. Never 100: the ceiling marks every result
    /// as a heuristic guess.
    pub confidence: i32,
    pub reasons: Vec<String>,
    pub direction: Direction,
}

/// Deterministic multi-factor classifier over an injected category catalog.
pub struct ClassificationService {
    catalog: Arc<CategoryCatalog>,
}

impl ClassificationService {
    pub fn new(catalog: Arc<CategoryCatalog>) -> Self {
        Self { catalog }
    }

    /// Scores every catalog category against the transaction and returns
    /// the best match, or the fallback result when no category clears the
    /// acceptance threshold.
    pub fn classify(
        &self,
        free_text: &str,
        amount: f64,
        payer_info: &str,
        merchant_hint: Option<&str>,
    ) -> Classification {
        let haystack = normalize(&format!(
            "{} {} {}",
            free_text,
            payer_info,
            merchant_hint.unwrap_or("")
        ));

        let mut best: Option<(f64, &CategoryDefinition, Vec<String>)> = None;
        for definition in &self.catalog.categories {
            let (score, reasons) = self.score_category(definition, &haystack, amount);
            if best.as_ref().map_or(true, |(s, _, _)| score > *s) {
                best = Some((score, definition, reasons));
            }
        }

        if let Some((score, definition, reasons)) = best {
            let confidence = ((score * 100.0).round() as i32).min(MAX_CONFIDENCE);
            if confidence >= self.catalog.fallback.acceptance_threshold {
                debug!(
                    "Classified as {} with confidence {}",
                    definition.id, confidence
                );
                return Classification {
                    category_id: definition.id.clone(),
                    confidence,
                    reasons,
                    direction: definition.direction,
                };
            }
        }

        // The winning catalog match is discarded below the bar.
        self.fallback(free_text, amount)
    }

    fn score_category(
        &self,
        definition: &CategoryDefinition,
        haystack: &str,
        amount: f64,
    ) -> (f64, Vec<String>) {
        let weights = &self.catalog.weights;
        let mut score = 0.0;
        let mut reasons = Vec::new();

        // Keyword term is binary: any match earns the full weight.
        if let Some(keyword) = definition
            .keywords
            .iter()
            .find(|k| !haystack.is_empty() && haystack.contains(k.as_str()))
        {
            score += weights.keyword;
            reasons.push(format!("keyword '{}'", keyword));
        }

        if definition
            .merchant_patterns
            .iter()
            .any(|p| p.is_match(haystack))
        {
            score += weights.pattern;
            reasons.push("merchant pattern".to_string());
        }

        let amount_score = amount_score(definition.amount_range.as_ref(), amount);
        if amount_score > 0.0 {
            score += weights.amount * amount_score;
            reasons.push(format!("amount score {:.1}", amount_score));
        }

        let context_score = context_score(&definition.context_clues, haystack);
        if context_score > 0.0 {
            score += weights.context * context_score;
            reasons.push(format!("context score {:.2}", context_score));
        }

        (score, reasons)
    }

    /// Ordered fallback heuristic: first applicable branch wins.
    fn fallback(&self, free_text: &str, amount: f64) -> Classification {
        let rules = &self.catalog.fallback;
        let text = normalize(free_text);

        let (rule, reason) = if free_text.trim().is_empty() {
            (&rules.empty_text, "fallback: empty description")
        } else if amount == 0.0 {
            (&rules.zero_amount, "fallback: zero amount")
        } else if amount < rules.small_amount_max {
            (&rules.small_amount, "fallback: small amount, fee-like")
        } else if amount > rules.large_amount_min {
            if rules
                .income_indicators
                .iter()
                .any(|w| text.contains(w.as_str()))
            {
                (&rules.large_income, "fallback: large amount with income indicator")
            } else {
                (&rules.large_expense, "fallback: large amount")
            }
        } else {
            (&rules.default, "fallback: no catalog match")
        };

        from_rule(rule, reason)
    }
}

fn from_rule(rule: &FallbackRule, reason: &str) -> Classification {
    Classification {
        category_id: rule.category_id.clone(),
        confidence: rule.confidence,
        reasons: vec![reason.to_string()],
        direction: rule.direction,
    }
}

/// Lowercases and strips punctuation, collapsing runs of whitespace.
fn normalize(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            cleaned.extend(c.to_lowercase());
        } else {
            cleaned.push(' ');
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn amount_score(range: Option<&AmountRange>, amount: f64) -> f64 {
    let Some(range) = range else {
        return 0.5;
    };
    if let Some(typical) = range.typical {
        if typical > 0.0 && (amount - typical).abs() <= 0.2 * typical {
            return 1.0;
        }
    }
    if amount >= range.min && amount <= range.max {
        0.7
    } else {
        0.2
    }
}

fn context_score(clues: &[String], haystack: &str) -> f64 {
    if clues.is_empty() {
        return 0.5;
    }
    let matched = clues
        .iter()
        .filter(|c| !haystack.is_empty() && haystack.contains(c.as_str()))
        .count();
    matched as f64 / clues.len() as f64
}
