pub mod pattern;
pub mod rules;

pub use pattern::{mask, redact_pattern, PatternRedactor, Replacement, MASK_GLYPH};
pub use rules::{extract_custom_terms, resolve_rules, BuiltinPattern, ResolvedRules};

use crate::error::{DocRedactionError, Result};

/// Default token substituted for a redacted span.
pub const DEFAULT_REDACTION_SYMBOL: &str = "[REDACTED]";

/// Custom terms this short or shorter are never applied.
const MIN_TERM_CHARS: usize = 3;

/// A single redaction layer.
pub trait Redactor: Send + Sync {
    /// Return `input` with this layer's matches replaced.
    fn redact(&self, input: &str) -> String;

    /// Name of this layer (for logging/debugging).
    fn name(&self) -> &str;
}

/// Substitution settings shared by every layer of one redaction call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionOptions {
    pub symbol: String,
    pub preserve_structure: bool,
}

impl Default for RedactionOptions {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_REDACTION_SYMBOL.to_string(),
            preserve_structure: false,
        }
    }
}

impl RedactionOptions {
    pub fn replacement(&self) -> Replacement {
        Replacement::new(&self.symbol, self.preserve_structure)
    }
}

/// Ordered redaction layers. Each layer sees the previous layer's output,
/// so text already replaced is not matched again by later layers.
pub struct RedactionPipeline {
    layers: Vec<Box<dyn Redactor>>,
}

impl RedactionPipeline {
    /// Create a pipeline from custom layers.
    pub fn new(layers: Vec<Box<dyn Redactor>>) -> Self {
        Self { layers }
    }

    /// Built-in patterns first, in table order, then custom terms
    /// (case-insensitive literals) in extraction order.
    pub fn from_rules(rules: &ResolvedRules, options: &RedactionOptions) -> Result<Self> {
        let mut layers: Vec<Box<dyn Redactor>> = Vec::new();

        for builtin in &rules.builtins {
            layers.push(Box::new(PatternRedactor::from_regex(
                builtin.as_str(),
                builtin.regex().clone(),
                options.replacement(),
            )));
        }

        for term in &rules.custom_terms {
            if term.chars().count() < MIN_TERM_CHARS {
                tracing::debug!(term = %term, "skipping short custom term");
                continue;
            }
            layers.push(Box::new(PatternRedactor::literal(term, options.replacement())?));
        }

        Ok(Self::new(layers))
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Run all layers in sequence.
    pub fn redact(&self, input: &str) -> String {
        self.layers.iter().fold(input.to_string(), |text, layer| {
            tracing::trace!(layer = layer.name(), "applying redaction layer");
            layer.redact(&text)
        })
    }
}

/// Redact `content` according to the free-text `rules`.
///
/// Both arguments must be non-empty.
pub fn apply_redactions(content: &str, rules: &str, options: &RedactionOptions) -> Result<String> {
    if content.is_empty() {
        return Err(DocRedactionError::MissingArgument {
            name: "markdown_content".into(),
        });
    }
    if rules.is_empty() {
        return Err(DocRedactionError::MissingArgument {
            name: "redaction_rules".into(),
        });
    }

    let resolved = resolve_rules(rules);
    let pipeline = RedactionPipeline::from_rules(&resolved, options)?;
    tracing::info!(layers = pipeline.len(), "applying redaction rules");
    Ok(pipeline.redact(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redact(content: &str, rules: &str) -> String {
        apply_redactions(content, rules, &RedactionOptions::default()).unwrap()
    }

    #[test]
    fn email_and_phone_end_to_end() {
        let out = redact(
            "Contact john.doe@example.com or call (555) 123-4567",
            "redact all email addresses and phone numbers",
        );
        assert_eq!(out, "Contact [REDACTED] or call [REDACTED]");
    }

    #[test]
    fn no_matching_rule_is_a_no_op() {
        let content = "Contact john.doe@example.com";
        assert_eq!(redact(content, "keep everything"), content);
    }

    #[test]
    fn custom_terms_are_case_insensitive() {
        let out = redact("Project FALCON and project falcon", "redact 'project falcon'");
        assert_eq!(out, "[REDACTED] and [REDACTED]");
    }

    #[test]
    fn short_custom_terms_are_skipped() {
        let out = redact("ab cd ab", "mask 'ab'");
        assert_eq!(out, "ab cd ab");
    }

    #[test]
    fn structure_preserving_masks_match_lengths() {
        let options = RedactionOptions {
            preserve_structure: true,
            ..Default::default()
        };
        let out = apply_redactions("Ask Jane Doe today", "redact 'Jane Doe'", &options).unwrap();
        assert_eq!(out, "Ask ████ ███ today");
        assert_eq!(out.chars().count(), "Ask Jane Doe today".chars().count());
    }

    #[test]
    fn later_layers_see_earlier_output() {
        // The email layer runs before custom terms, so the address is replaced whole.
        let out = redact(
            "Mail jane@example.com and example.org",
            "redact email and 'example'",
        );
        assert_eq!(out, "Mail [REDACTED] and [REDACTED].org");
    }

    #[test]
    fn custom_symbol() {
        let options = RedactionOptions {
            symbol: "***".into(),
            ..Default::default()
        };
        let out = apply_redactions("ssn 123-45-6789", "remove social security", &options).unwrap();
        assert_eq!(out, "ssn ***");
    }

    #[test]
    fn empty_arguments_are_rejected() {
        let options = RedactionOptions::default();
        assert!(matches!(
            apply_redactions("", "redact email", &options),
            Err(DocRedactionError::MissingArgument { name }) if name == "markdown_content"
        ));
        assert!(matches!(
            apply_redactions("text", "", &options),
            Err(DocRedactionError::MissingArgument { name }) if name == "redaction_rules"
        ));
    }

    #[test]
    fn pipeline_from_custom_layers() {
        let pipeline = RedactionPipeline::new(vec![
            Box::new(PatternRedactor::literal("alpha", Replacement::Symbol("A".into())).unwrap()),
            Box::new(PatternRedactor::literal("A beta", Replacement::Symbol("B".into())).unwrap()),
        ]);
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.redact("alpha beta"), "B");
    }
}
