//! Fixed category catalog: keyword sets, merchant patterns, amount ranges
//! and context clues for the scoring classifier.
//!
//! The catalog is plain data, built once and injected into the
//! classification service as immutable process-wide configuration. Tests
//! construct reduced catalogs the same way. Amount ranges and clue lists are
//! tuned to a GHS mobile-money market and are deliberately kept as data
//! rather than constants in code.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_CONFIDENCE_THRESHOLD;

/// Money direction of a transaction or category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Income,
    #[default]
    Expense,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Income => "INCOME",
            Direction::Expense => "EXPENSE",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "INCOME" => Direction::Income,
            _ => Direction::Expense,
        }
    }
}

/// Expected amount band for a category, in the catalog currency.
#[derive(Debug, Clone)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
    /// Typical amount; scores highest within +/-20% of this value.
    pub typical: Option<f64>,
}

/// One scorable category.
#[derive(Debug, Clone)]
pub struct CategoryDefinition {
    pub id: String,
    pub direction: Direction,
    /// Lowercased substrings matched against normalized text.
    pub keywords: Vec<String>,
    /// Merchant-name patterns matched against normalized text.
    pub merchant_patterns: Vec<Regex>,
    pub amount_range: Option<AmountRange>,
    /// Lowercased context-clue words.
    pub context_clues: Vec<String>,
}

/// The four scoring term weights. Heuristic fractions, not calibrated
/// probabilities; kept as data so they can be tuned without code changes.
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub keyword: f64,
    pub pattern: f64,
    pub amount: f64,
    pub context: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword: 0.6,
            pattern: 0.2,
            amount: 0.1,
            context: 0.1,
        }
    }
}

/// Target of one fallback branch.
#[derive(Debug, Clone)]
pub struct FallbackRule {
    pub category_id: String,
    pub confidence: i32,
    pub direction: Direction,
}

impl FallbackRule {
    fn new(category_id: &str, confidence: i32, direction: Direction) -> Self {
        Self {
            category_id: category_id.to_string(),
            confidence,
            direction,
        }
    }
}

/// Ordered fallback heuristic applied when no catalog match clears the
/// acceptance bar. The threshold gates catalog matches only; branch
/// confidences carry their own tuned values.
#[derive(Debug, Clone)]
pub struct FallbackRules {
    /// Catalog matches below this confidence are discarded.
    pub acceptance_threshold: i32,
    pub empty_text: FallbackRule,
    pub zero_amount: FallbackRule,
    pub small_amount_max: f64,
    pub small_amount: FallbackRule,
    pub large_amount_min: f64,
    /// Words suggesting an inbound transfer, checked on the large-amount
    /// branch.
    pub income_indicators: Vec<String>,
    pub large_income: FallbackRule,
    pub large_expense: FallbackRule,
    pub default: FallbackRule,
}

impl Default for FallbackRules {
    fn default() -> Self {
        Self {
            acceptance_threshold: FALLBACK_CONFIDENCE_THRESHOLD,
            empty_text: FallbackRule::new("other_expense", 20, Direction::Expense),
            zero_amount: FallbackRule::new("fees_charges", 30, Direction::Expense),
            small_amount_max: 5.0,
            small_amount: FallbackRule::new("fees_charges", 45, Direction::Expense),
            large_amount_min: 1000.0,
            income_indicators: to_strings(&[
                "salary", "wages", "payment", "deposit", "credited", "received", "income",
                "allowance", "refund",
            ]),
            large_income: FallbackRule::new("salary", 65, Direction::Income),
            large_expense: FallbackRule::new("large_purchase", 55, Direction::Expense),
            default: FallbackRule::new("other_expense", 40, Direction::Expense),
        }
    }
}

/// Immutable classifier configuration: category definitions plus scoring
/// weights and fallback rules.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    pub categories: Vec<CategoryDefinition>,
    pub weights: ScoringWeights,
    pub fallback: FallbackRules,
}

impl CategoryCatalog {
    pub fn new(
        categories: Vec<CategoryDefinition>,
        weights: ScoringWeights,
        fallback: FallbackRules,
    ) -> Self {
        Self {
            categories,
            weights,
            fallback,
        }
    }

    /// The built-in catalog shipped with the application.
    pub fn default_catalog() -> Self {
        let categories = vec![
            definition(
                "food_dining",
                Direction::Expense,
                &["lunch", "dinner", "breakfast", "restaurant", "food", "chop", "waakye", "jollof"],
                &[r"\b(kfc|papaye|pizza hut|burger king|chicken republic|starbites|mcdonald)\b"],
                Some(range(5.0, 300.0, 30.0)),
                &["meal", "eat", "takeaway", "delivery", "snack"],
            ),
            definition(
                "groceries",
                Direction::Expense,
                &["grocery", "groceries", "supermarket", "provisions", "foodstuff"],
                &[r"\b(shoprite|melcom|maxmart|koala|palace|citydia)\b"],
                Some(range(10.0, 800.0, 150.0)),
                &["weekly", "shopping", "household", "market"],
            ),
            definition(
                "transport",
                Direction::Expense,
                &["uber", "bolt", "taxi", "trotro", "fuel", "petrol", "ride", "transport"],
                &[r"\b(uber|bolt|yango|goil|shell|total|star oil)\b"],
                Some(range(2.0, 200.0, 20.0)),
                &["trip", "ride", "driver", "station", "fare"],
            ),
            definition(
                "airtime_data",
                Direction::Expense,
                &["airtime", "data bundle", "topup", "top up", "recharge", "bundle"],
                &[r"\b(mtn|vodafone|airteltigo|telecel|glo)\b"],
                Some(range(1.0, 100.0, 10.0)),
                &["internet", "phone", "credit", "megabytes"],
            ),
            definition(
                "utilities",
                Direction::Expense,
                &["electricity", "ecg", "water bill", "utility", "prepaid", "postpaid"],
                &[r"\b(ecg|gwcl|ghana water|dumsor)\b"],
                Some(range(20.0, 500.0, 100.0)),
                &["meter", "monthly", "bill", "units"],
            ),
            definition(
                "rent_housing",
                Direction::Expense,
                &["rent", "landlord", "lease", "accommodation", "hostel"],
                &[],
                Some(range(200.0, 5000.0, 800.0)),
                &["monthly", "advance", "room", "apartment"],
            ),
            definition(
                "entertainment",
                Direction::Expense,
                &["movie", "cinema", "subscription", "betting", "concert"],
                &[r"\b(dstv|gotv|netflix|spotify|showmax|silverbird|betway)\b"],
                Some(range(10.0, 300.0, 60.0)),
                &["renewal", "monthly", "weekend", "tickets"],
            ),
            definition(
                "health",
                Direction::Expense,
                &["hospital", "pharmacy", "clinic", "medicine", "doctor", "lab test"],
                &[r"\b(ernest chemist|mpharma)\b"],
                Some(range(10.0, 1000.0, 80.0)),
                &["prescription", "checkup", "insurance", "malaria"],
            ),
            definition(
                "education",
                Direction::Expense,
                &["school fees", "tuition", "university", "course", "textbook", "exam"],
                &[],
                Some(range(50.0, 5000.0, 500.0)),
                &["semester", "term", "student", "admission"],
            ),
            definition(
                "fees_charges",
                Direction::Expense,
                &["fee", "charge", "commission", "cashout", "levy"],
                &[r"\b(e ?levy|momo fee)\b"],
                Some(range(0.1, 20.0, 1.0)),
                &["deducted", "service", "processing"],
            ),
            definition(
                "salary",
                Direction::Income,
                &["salary", "wages", "payroll", "stipend"],
                &[],
                Some(range(500.0, 20000.0, 2500.0)),
                &["monthly", "employer", "deposit", "payday"],
            ),
            definition(
                "transfer_in",
                Direction::Income,
                &["transfer from", "received from", "sent you", "momo received"],
                &[],
                Some(range(5.0, 2000.0, 100.0)),
                &["family", "friend", "support", "gift"],
            ),
        ];

        Self::new(categories, ScoringWeights::default(), FallbackRules::default())
    }
}

fn definition(
    id: &str,
    direction: Direction,
    keywords: &[&str],
    patterns: &[&str],
    amount_range: Option<AmountRange>,
    context_clues: &[&str],
) -> CategoryDefinition {
    CategoryDefinition {
        id: id.to_string(),
        direction,
        keywords: to_strings(keywords),
        merchant_patterns: patterns
            .iter()
            .map(|p| Regex::new(p).expect("invalid catalog merchant pattern"))
            .collect(),
        amount_range,
        context_clues: to_strings(context_clues),
    }
}

fn range(min: f64, max: f64, typical: f64) -> AmountRange {
    AmountRange {
        min,
        max,
        typical: Some(typical),
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
