//! Merchant-name extraction from free-text provider descriptions.
//!
//! First-applicable-rule design: a known-merchant gazetteer, then
//! "to/from/at X" phrase capture, then capitalized-word scans over the
//! description, note, and combined text, ending at a sentinel.

use regex::Regex;
use std::collections::HashSet;

use crate::constants::UNKNOWN_MERCHANT;

/// (lowercased token, canonical display form)
const GAZETTEER: &[(&str, &str)] = &[
    ("kfc", "KFC"),
    ("papaye", "Papaye"),
    ("pizza hut", "Pizza Hut"),
    ("chicken republic", "Chicken Republic"),
    ("uber", "Uber"),
    ("bolt", "Bolt"),
    ("yango", "Yango"),
    ("shoprite", "Shoprite"),
    ("melcom", "Melcom"),
    ("maxmart", "MaxMart"),
    ("jumia", "Jumia"),
    ("mtn", "MTN"),
    ("vodafone", "Vodafone"),
    ("airteltigo", "AirtelTigo"),
    ("telecel", "Telecel"),
    ("ecg", "ECG"),
    ("dstv", "DStv"),
    ("gotv", "GOtv"),
    ("netflix", "Netflix"),
    ("spotify", "Spotify"),
    ("showmax", "Showmax"),
    ("goil", "Goil"),
    ("shell", "Shell"),
    ("total", "TotalEnergies"),
];

/// Generic words that never name a merchant.
const STOPLIST: &[&str] = &[
    "payment", "transfer", "mobile", "money", "momo", "cash", "cashout", "deposit", "withdrawal",
    "purchase", "lunch", "dinner", "breakfast", "monthly", "weekly", "salary", "airtime", "data",
    "bundle", "prepaid", "electricity", "the", "and", "for", "with", "from", "sent", "received",
    "ride", "trip", "bill", "fee", "charge",
];

/// Location words that trail a merchant name rather than naming one.
const LOCATION_SUFFIXES: &[&str] = &[
    "mall", "street", "plaza", "road", "avenue", "junction", "circle", "market", "station",
    "branch", "accra", "kumasi", "tema", "takoradi",
];

pub struct MerchantExtractor {
    phrase_pattern: Regex,
    stoplist: HashSet<&'static str>,
    location_suffixes: HashSet<&'static str>,
}

impl MerchantExtractor {
    pub fn new() -> Self {
        Self {
            // Captures a run of capitalized words after to/from/at.
            phrase_pattern: Regex::new(
                r"(?:\b[Tt]o|\b[Ff]rom|\b[Aa]t)\s+((?:[A-Z][A-Za-z&']*)(?:\s+[A-Z][A-Za-z&']*)*)",
            )
            .expect("invalid merchant phrase pattern"),
            stoplist: STOPLIST.iter().copied().collect(),
            location_suffixes: LOCATION_SUFFIXES.iter().copied().collect(),
        }
    }

    /// Extracts a merchant name from the description and note, stopping at
    /// the first rule that yields a result.
    pub fn extract(&self, description: &str, note: &str) -> String {
        let combined = format!("{} {}", description, note);

        if let Some(name) = self.from_gazetteer(&combined) {
            return name;
        }
        if let Some(name) = self.from_phrase(description).or_else(|| self.from_phrase(note)) {
            return name;
        }
        if let Some(name) = self.first_qualifying_word(description) {
            return name;
        }
        if let Some(name) = self.first_qualifying_word(note) {
            return name;
        }
        if let Some(name) = self.first_qualifying_word(&combined) {
            return name;
        }
        UNKNOWN_MERCHANT.to_string()
    }

    /// Rule 1: known-merchant token, preferring a longer captured phrase
    /// that contains it.
    fn from_gazetteer(&self, combined: &str) -> Option<String> {
        let lowered = combined.to_lowercase();
        let (_, canonical) = GAZETTEER
            .iter()
            .find(|(token, _)| lowered.contains(token))?;

        if let Some(capture) = self.capture_phrase(combined) {
            if capture.to_lowercase().contains(&canonical.to_lowercase()) {
                return Some(capture);
            }
        }
        Some((*canonical).to_string())
    }

    /// Rule 2: generic "to/from/at X" extraction.
    fn from_phrase(&self, text: &str) -> Option<String> {
        let capture = self.capture_phrase(text)?;
        let first = capture.split_whitespace().next()?;
        if self.is_generic(first) {
            return None;
        }
        Some(capture)
    }

    fn capture_phrase(&self, text: &str) -> Option<String> {
        self.phrase_pattern
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    }

    /// Rules 3-5: first capitalized word that is neither generic nor a
    /// location suffix.
    fn first_qualifying_word(&self, text: &str) -> Option<String> {
        text.split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .find(|w| self.qualifies(w))
            .map(|w| w.to_string())
    }

    fn qualifies(&self, word: &str) -> bool {
        word.len() >= 2
            && word.chars().next().is_some_and(|c| c.is_ascii_uppercase())
            && word.chars().all(|c| c.is_ascii_alphabetic())
            && !self.is_generic(word)
    }

    fn is_generic(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        self.stoplist.contains(lowered.as_str()) || self.location_suffixes.contains(lowered.as_str())
    }
}

impl Default for MerchantExtractor {
    fn default() -> Self {
        Self::new()
    }
}
