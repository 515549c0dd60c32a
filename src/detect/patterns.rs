use std::sync::LazyLock;

use regex::Regex;

use super::Category;

/// Post-match filter. Receives the raw matched substring.
pub type Validator = fn(&str) -> bool;

/// One row of the detection table: a category, the patterns that feed it
/// (any match qualifies) and an optional validator every candidate must pass.
pub struct CategoryRule {
    pub category: Category,
    pub patterns: Vec<Regex>,
    pub validator: Option<Validator>,
}

impl CategoryRule {
    fn new(category: Category, patterns: &[&str], validator: Option<Validator>) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p).expect("detection patterns should compile"))
            .collect();
        Self {
            category,
            patterns,
            validator,
        }
    }

    /// Whether a candidate survives this rule's validator.
    pub fn accepts(&self, candidate: &str) -> bool {
        self.validator.is_none_or(|validate| validate(candidate))
    }
}

/// Phrases shaped like a person's name that are really places, titles or
/// disciplines. Compared by exact string equality.
pub const COMMON_NON_NAMES: &[&str] = &[
    "United States",
    "New York",
    "Los Angeles",
    "San Francisco",
    "North America",
    "South America",
    "East Coast",
    "West Coast",
    "Middle East",
    "South Korea",
    "North Korea",
    "Saudi Arabia",
    "United Kingdom",
    "South Africa",
    "New Zealand",
    "Costa Rica",
    "Puerto Rico",
    "Hong Kong",
    "Las Vegas",
    "San Diego",
    "Chief Executive",
    "Vice President",
    "General Manager",
    "Project Manager",
    "Data Science",
    "Machine Learning",
    "Artificial Intelligence",
    "Computer Science",
];

fn digit_count(candidate: &str) -> usize {
    candidate.chars().filter(|c| c.is_numeric()).count()
}

fn valid_phone(candidate: &str) -> bool {
    digit_count(candidate) >= 7
}

fn valid_card(candidate: &str) -> bool {
    (13..=19).contains(&digit_count(candidate))
}

fn valid_name(candidate: &str) -> bool {
    !COMMON_NON_NAMES.contains(&candidate)
}

const STREET_TYPES: &str =
    "Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr|Way|Circle|Cir|Court|Ct";

/// The detection table, in output order.
pub static CATEGORY_RULES: LazyLock<Vec<CategoryRule>> = LazyLock::new(|| {
    let address_with_postcode =
        format!(r"(?i)\d+\s+[A-Za-z\s]+(?:{STREET_TYPES})\.?\s*,?\s*[A-Za-z\s]*\d{{5}}(?:-\d{{4}})?");
    let address = format!(r"(?i)\d+\s+[A-Za-z\s]+(?:{STREET_TYPES})\.?");

    vec![
        CategoryRule::new(
            Category::EmailAddresses,
            &[r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"],
            None,
        ),
        CategoryRule::new(
            Category::PhoneNumbers,
            &[
                r"\+?\d{1,4}[-.\s]?\(?\d{1,4}\)?[-.\s]?\d{1,4}[-.\s]?\d{1,9}",
                r"\(\d{3}\)\s?\d{3}[-.]?\d{4}",
                r"\d{3}[-.]?\d{3}[-.]?\d{4}",
                // German style: +49 30 12345678
                r"\+\d{1,3}\s\d{1,4}\s\d{4,10}",
            ],
            Some(valid_phone),
        ),
        CategoryRule::new(
            Category::CreditCardNumbers,
            &[r"\b(?:\d{4}[-\s]?){3,4}\d{1,4}\b"],
            Some(valid_card),
        ),
        CategoryRule::new(
            Category::IbanNumbers,
            &[r"\b[A-Z]{2}\d{2}[A-Z0-9]{4}\d{7}[A-Z0-9]{0,16}\b"],
            None,
        ),
        CategoryRule::new(
            Category::AccountNumbers,
            &[r"(?i)\b(?:Account|Acc|A/C)[:\s#]*(\d{8,17}|\d{4}[-\s]\d{4}[-\s]\d{4,9})\b"],
            None,
        ),
        CategoryRule::new(Category::Addresses, &[&address_with_postcode, &address], None),
        CategoryRule::new(
            Category::PeopleNames,
            &[r"\b[A-Z][a-z]+\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?\b"],
            Some(valid_name),
        ),
        CategoryRule::new(
            Category::CurrencyAmounts,
            &[
                r"(?i)[€$]\s*\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{2})?",
                r"(?i)\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{2})?\s*(?:EUR|USD|€|\$)",
                r"(?i)(?:EUR|USD)\s*\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{2})?",
                r"(?i)\b(?:hundert|tausend|million|milliarde)\s+(?:EUR|USD|€|\$)\s*\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{2})?\b",
            ],
            None,
        ),
        CategoryRule::new(
            Category::Percentages,
            &[
                r"\d+(?:\.\d+)?%",
                r"(?i)\b\d+(?:[.,]\d+)?\s*(?:percent|prozent|percentage)\b",
            ],
            None,
        ),
        CategoryRule::new(
            Category::Numbers,
            &[
                r"\b\d+(?:[.,]\d+)*(?:[.,]\d+)?\b",
                r"(?i)\b(hundert|tausend|million|milliarde)\b",
            ],
            None,
        ),
    ]
});

/// Extract candidates from `text` the way a capture-aware `findall` does:
/// patterns with a capture group yield group 1, the rest yield the whole match.
pub fn candidates<'t>(pattern: &Regex, text: &'t str) -> Vec<&'t str> {
    if pattern.captures_len() > 1 {
        pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    } else {
        pattern.find_iter(text).map(|m| m.as_str()).collect()
    }
}
