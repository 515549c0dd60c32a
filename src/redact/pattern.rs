use regex::{Captures, NoExpand, Regex, RegexBuilder};

use crate::error::{DocRedactionError, Result};

use super::Redactor;

/// Glyph substituted for each non-whitespace character when structure is preserved.
pub const MASK_GLYPH: char = '█';

/// Compiled-size ceiling for caller-supplied patterns.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// How a matched span is rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Replace the whole span with a fixed literal.
    Symbol(String),
    /// Keep length and whitespace, replace everything else with [`MASK_GLYPH`].
    Mask,
}

impl Replacement {
    pub fn new(symbol: &str, preserve_structure: bool) -> Self {
        if preserve_structure {
            Replacement::Mask
        } else {
            Replacement::Symbol(symbol.to_string())
        }
    }
}

/// Mask every non-whitespace character of `matched`.
pub fn mask(matched: &str) -> String {
    matched
        .chars()
        .map(|c| if c.is_whitespace() { c } else { MASK_GLYPH })
        .collect()
}

/// Redaction layer backed by a single regex.
pub struct PatternRedactor {
    name: String,
    regex: Regex,
    replacement: Replacement,
}

impl PatternRedactor {
    /// Wrap an already compiled regex (the built-in tables).
    pub fn from_regex(name: impl Into<String>, regex: Regex, replacement: Replacement) -> Self {
        Self {
            name: name.into(),
            regex,
            replacement,
        }
    }

    /// Compile `pattern`, optionally case-insensitively.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: Replacement,
        case_insensitive: bool,
    ) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|e| DocRedactionError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::from_regex(name, regex, replacement))
    }

    /// A case-insensitive redactor for a literal term.
    pub fn literal(term: &str, replacement: Replacement) -> Result<Self> {
        Self::new(
            format!("term:{term}"),
            &regex::escape(term),
            replacement,
            true,
        )
    }
}

impl Redactor for PatternRedactor {
    fn redact(&self, input: &str) -> String {
        match &self.replacement {
            Replacement::Symbol(symbol) => self
                .regex
                .replace_all(input, NoExpand(symbol))
                .into_owned(),
            Replacement::Mask => self
                .regex
                .replace_all(input, |caps: &Captures| mask(&caps[0]))
                .into_owned(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Replace every match of `pattern` in `content`.
///
/// Each match becomes `redaction_symbol`, or a same-length mask when
/// `preserve_structure` is set.
pub fn redact_pattern(
    content: &str,
    pattern: &str,
    redaction_symbol: &str,
    preserve_structure: bool,
    case_insensitive: bool,
) -> Result<String> {
    let redactor = PatternRedactor::new(
        "pattern",
        pattern,
        Replacement::new(redaction_symbol, preserve_structure),
        case_insensitive,
    )?;
    Ok(redactor.redact(content))
}
