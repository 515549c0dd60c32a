//! Interpretation of free-text redaction instructions.
//!
//! An instruction such as "redact all email addresses and 'Project Falcon'"
//! is read twice: trigger keywords select built-in patterns, and quoted or
//! "redact <phrase>" fragments become literal custom terms.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A built-in redaction pattern the instruction can switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinPattern {
    Email,
    Phone,
    Ssn,
    CreditCard,
    ZipCode,
    IpAddress,
    Url,
    Date,
    Name,
    Address,
}

impl BuiltinPattern {
    /// Application order. Each pattern runs on the output of the previous one.
    pub const ALL: &'static [BuiltinPattern] = &[
        BuiltinPattern::Email,
        BuiltinPattern::Phone,
        BuiltinPattern::Ssn,
        BuiltinPattern::CreditCard,
        BuiltinPattern::ZipCode,
        BuiltinPattern::IpAddress,
        BuiltinPattern::Url,
        BuiltinPattern::Date,
        BuiltinPattern::Name,
        BuiltinPattern::Address,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinPattern::Email => "email",
            BuiltinPattern::Phone => "phone",
            BuiltinPattern::Ssn => "ssn",
            BuiltinPattern::CreditCard => "credit_card",
            BuiltinPattern::ZipCode => "zip_code",
            BuiltinPattern::IpAddress => "ip_address",
            BuiltinPattern::Url => "url",
            BuiltinPattern::Date => "date",
            BuiltinPattern::Name => "name",
            BuiltinPattern::Address => "address",
        }
    }

    /// Lowercase substrings that switch this pattern on.
    pub fn triggers(&self) -> &'static [&'static str] {
        match self {
            BuiltinPattern::Email => &["email", "e-mail", "@"],
            BuiltinPattern::Phone => &["phone", "telephone", "number"],
            BuiltinPattern::Ssn => &["ssn", "social security", "social"],
            BuiltinPattern::CreditCard => &["credit card", "card number", "credit"],
            BuiltinPattern::ZipCode => &["zip code", "postal code", "zip"],
            BuiltinPattern::IpAddress => &["ip address", "ip"],
            BuiltinPattern::Url => &["url", "link", "website"],
            BuiltinPattern::Date => &["date", "birthday", "birth"],
            BuiltinPattern::Name => &["name", "person", "individual"],
            BuiltinPattern::Address => &["address", "street", "location"],
        }
    }

    /// The canonical substitution regex for this pattern.
    pub fn regex(&self) -> &'static Regex {
        &BUILTIN_REGEXES[*self as usize]
    }
}

impl std::fmt::Display for BuiltinPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn pattern_source(pattern: BuiltinPattern) -> &'static str {
    match pattern {
        BuiltinPattern::Email => r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        BuiltinPattern::Phone => {
            r"(\+?1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})"
        }
        BuiltinPattern::Ssn => r"\b\d{3}-?\d{2}-?\d{4}\b",
        BuiltinPattern::CreditCard => r"\b(?:\d{4}[-\s]?){3}\d{4}\b",
        BuiltinPattern::ZipCode => r"\b\d{5}(?:-\d{4})?\b",
        BuiltinPattern::IpAddress => r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b",
        BuiltinPattern::Url => r#"https?://[^\s<>"{}|\\^`\[\]]+"#,
        BuiltinPattern::Date => {
            r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b|\b\d{4}[/-]\d{1,2}[/-]\d{1,2}\b"
        }
        BuiltinPattern::Name => r"\b[A-Z][a-z]+ [A-Z][a-z]+\b",
        BuiltinPattern::Address => {
            r"\d+\s+[A-Za-z\s]+(?:Street|St|Avenue|Ave|Road|Rd|Drive|Dr|Lane|Ln|Boulevard|Blvd)"
        }
    }
}

static BUILTIN_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    BuiltinPattern::ALL
        .iter()
        .map(|p| Regex::new(pattern_source(*p)).expect("built-in redaction patterns should compile"))
        .collect()
});

/// Every trigger keyword in one automaton, paired with the owner of each keyword id.
static TRIGGERS: LazyLock<(AhoCorasick, Vec<BuiltinPattern>)> = LazyLock::new(|| {
    let mut keywords = Vec::new();
    let mut owners = Vec::new();
    for pattern in BuiltinPattern::ALL {
        for keyword in pattern.triggers() {
            keywords.push(*keyword);
            owners.push(*pattern);
        }
    }
    let automaton = AhoCorasick::new(&keywords).expect("valid aho-corasick patterns");
    (automaton, owners)
});

/// Custom terms containing any of these are taken to restate a built-in
/// category ("phone numbers", "names") and dropped.
const CATEGORY_WORDS: &[&str] = &[
    "email", "phone", "number", "address", "name", "ssn", "credit", "card",
];

static CATEGORY_WORD_AUTOMATON: LazyLock<AhoCorasick> =
    LazyLock::new(|| AhoCorasick::new(CATEGORY_WORDS).expect("valid aho-corasick patterns"));

static QUOTED_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"]([^'"]+)['"]"#).expect("quoted-term pattern should compile")
});

static VERB_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:redact|remove|hide)\s+(?:all\s+)?([a-zA-Z\s]+?)(?:\s+(?:and|or|from)|$)")
        .expect("verb-phrase pattern should compile")
});

/// What an instruction asks to redact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRules {
    /// Built-in patterns, in application order.
    pub builtins: Vec<BuiltinPattern>,
    /// Literal terms, in extraction order. May contain duplicates.
    pub custom_terms: Vec<String>,
}

impl ResolvedRules {
    pub fn is_empty(&self) -> bool {
        self.builtins.is_empty() && self.custom_terms.is_empty()
    }
}

/// Built-in patterns whose trigger keywords occur anywhere in the
/// lowercased instruction (plain substring containment).
pub fn resolve_builtins(instruction: &str) -> Vec<BuiltinPattern> {
    let lowered = instruction.to_lowercase();
    let (automaton, owners) = &*TRIGGERS;

    let mut hit = [false; BuiltinPattern::ALL.len()];
    for mat in automaton.find_overlapping_iter(&lowered) {
        hit[owners[mat.pattern().as_usize()] as usize] = true;
    }

    BuiltinPattern::ALL
        .iter()
        .copied()
        .filter(|p| hit[*p as usize])
        .collect()
}

/// Literal terms to redact verbatim.
///
/// Quoted fragments are taken as-is. Phrases following "redact", "remove"
/// or "hide" (optionally "all"), up to "and"/"or"/"from" or the end of the
/// instruction, are trimmed and kept unless they mention a category word.
/// The category-word check is substring based, so "name badge" is dropped
/// along with "names".
pub fn extract_custom_terms(instruction: &str) -> Vec<String> {
    let mut terms: Vec<String> = QUOTED_TERM
        .captures_iter(instruction)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    for caps in VERB_PHRASE.captures_iter(instruction) {
        let Some(phrase) = caps.get(1) else {
            continue;
        };
        let phrase = phrase.as_str().trim();
        if phrase.is_empty() || CATEGORY_WORD_AUTOMATON.is_match(&phrase.to_lowercase()) {
            continue;
        }
        terms.push(phrase.to_string());
    }

    terms
}

/// Interpret an instruction into built-in patterns plus custom terms.
pub fn resolve_rules(instruction: &str) -> ResolvedRules {
    let rules = ResolvedRules {
        builtins: resolve_builtins(instruction),
        custom_terms: extract_custom_terms(instruction),
    };
    tracing::debug!(
        builtins = rules.builtins.len(),
        custom_terms = rules.custom_terms.len(),
        "resolved redaction rules"
    );
    rules
}
