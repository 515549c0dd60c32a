pub mod lexicon;
pub mod patterns;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::format::normalize;

use self::patterns::{candidates, CATEGORY_RULES};

/// A class of sensitive information the detector reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    EmailAddresses,
    PhoneNumbers,
    CreditCardNumbers,
    IbanNumbers,
    AccountNumbers,
    Addresses,
    PeopleNames,
    CurrencyAmounts,
    Percentages,
    Numbers,
}

impl Category {
    /// Every category, in detection-table order.
    pub const ALL: &'static [Category] = &[
        Category::EmailAddresses,
        Category::PhoneNumbers,
        Category::CreditCardNumbers,
        Category::IbanNumbers,
        Category::AccountNumbers,
        Category::Addresses,
        Category::PeopleNames,
        Category::CurrencyAmounts,
        Category::Percentages,
        Category::Numbers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::EmailAddresses => "email_addresses",
            Category::PhoneNumbers => "phone_numbers",
            Category::CreditCardNumbers => "credit_card_numbers",
            Category::IbanNumbers => "iban_numbers",
            Category::AccountNumbers => "account_numbers",
            Category::Addresses => "addresses",
            Category::PeopleNames => "people_names",
            Category::CurrencyAmounts => "currency_amounts",
            Category::Percentages => "percentages",
            Category::Numbers => "numbers",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Detector output: category -> distinct matched substrings.
///
/// Categories without matches are absent, never present with an empty list.
/// Values are sorted so output is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Detections(BTreeMap<Category, Vec<String>>);

impl Detections {
    fn insert(&mut self, category: Category, found: BTreeSet<String>) {
        if !found.is_empty() {
            self.0.insert(category, found.into_iter().collect());
        }
    }

    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.0.get(&category).map(Vec::as_slice)
    }

    /// Whether `value` was found under `category`.
    pub fn contains(&self, category: Category, value: &str) -> bool {
        self.get(category)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        self.0.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<Category, Vec<String>> {
        self.0
    }
}

/// Scan markdown for sensitive data.
///
/// The input is normalized first, then every category's patterns run over
/// the normalized text and surviving candidates are collected per category.
/// German and English number words found by a whitespace token scan are
/// merged into [`Category::Numbers`]. A substring may be reported under more
/// than one category (a phone number is also a number).
pub fn detect(markdown_content: &str) -> Detections {
    let text = normalize(markdown_content);
    let mut detections = Detections::default();

    for rule in CATEGORY_RULES.iter() {
        let mut found = BTreeSet::new();
        for pattern in &rule.patterns {
            for candidate in candidates(pattern, &text) {
                if rule.accepts(candidate) {
                    found.insert(candidate.to_string());
                }
            }
        }
        tracing::trace!(category = %rule.category, matches = found.len(), "category scanned");
        detections.insert(rule.category, found);
    }

    let words = lexicon::number_words(&text);
    if !words.is_empty() {
        let mut numbers: BTreeSet<String> = detections
            .get(Category::Numbers)
            .map(|existing| existing.iter().cloned().collect())
            .unwrap_or_default();
        numbers.extend(words);
        detections.insert(Category::Numbers, numbers);
    }

    tracing::debug!(categories = detections.len(), "detection complete");
    detections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), *category);
        }
        assert!("nope".parse::<Category>().is_err());
    }

    #[test]
    fn serializes_as_snake_case_map() {
        let detections = detect("mail john@example.com");
        let json = serde_json::to_value(&detections).unwrap();
        assert_eq!(
            json["email_addresses"],
            serde_json::json!(["john@example.com"])
        );
    }

    #[test]
    fn empty_input_yields_empty_result() {
        assert!(detect("").is_empty());
    }

    #[test]
    fn number_words_create_numbers_category() {
        let detections = detect("three apples");
        assert_eq!(detections.get(Category::Numbers), Some(&["three".to_string()][..]));
    }

    #[test]
    fn regex_and_lexicon_numbers_merge_without_duplicates() {
        let detections = detect("hundert und 42");
        let numbers = detections.get(Category::Numbers).unwrap();
        assert_eq!(numbers, ["42".to_string(), "hundert".to_string()]);
    }
}
