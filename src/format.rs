//! Markdown normalization applied before detection.
//!
//! Markup characters (`**`, `[`, `>` and friends) split or pad the values
//! the detector is looking for, so they are stripped first. The rules are
//! best-effort regex rewrites; malformed markdown passes through unchanged.

use std::sync::LazyLock;

use regex::Regex;

/// One rewrite step: every match of `pattern` is replaced with `replacement`
/// (which may reference capture groups, e.g. `$1`).
struct Rewrite {
    pattern: Regex,
    replacement: &'static str,
}

impl Rewrite {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("markdown rewrite patterns should compile"),
            replacement,
        }
    }
}

static REWRITES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    vec![
        // Fenced code blocks go first so the inline-code rule cannot eat the fences.
        Rewrite::new(r"(?s)```.*?```", ""),
        // Images before links, otherwise `![alt](src)` degrades to `!alt`.
        Rewrite::new(r"!\[[^\]\n]*\]\([^)\n]+\)", ""),
        Rewrite::new(r"\*\*(.+?)\*\*", "$1"),
        Rewrite::new(r"\*(.+?)\*", "$1"),
        Rewrite::new(r"__(.+?)__", "$1"),
        Rewrite::new(r"_(.+?)_", "$1"),
        Rewrite::new(r"`(.+?)`", "$1"),
        Rewrite::new(r"\[(.+?)\]\(.+?\)", "$1"),
    ]
});

/// Line-leading markers. These nest (`> 1. ## x`), so they are stripped
/// repeatedly until no line starts with one.
static LINE_MARKERS: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    vec![
        Rewrite::new(r"(?m)^[ \t]*-{3,}[ \t]*$", ""),
        Rewrite::new(r"(?m)^[ \t]*>[ \t]?", ""),
        Rewrite::new(r"(?m)^[ \t]*#{1,6}[ \t]+", ""),
        Rewrite::new(r"(?m)^[ \t]*[-*+][ \t]+", ""),
        Rewrite::new(r"(?m)^[ \t]*\d+\.[ \t]+", ""),
    ]
});

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank-line pattern should compile"));

static HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("whitespace pattern should compile"));

fn apply_all(rewrites: &[Rewrite], mut text: String) -> String {
    for rewrite in rewrites {
        text = rewrite
            .pattern
            .replace_all(&text, rewrite.replacement)
            .into_owned();
    }
    text
}

/// Strip markdown syntax, leaving the readable text.
///
/// Headings, emphasis, inline code and links are unwrapped to their text;
/// fenced code blocks, images and horizontal rules are dropped; list bullets
/// and blockquote markers are removed per line, including nested ones.
/// Normalizing already normalized text is a no-op. Runs of blank lines collapse
/// to one blank line, runs of spaces/tabs to a single space, and the result
/// is trimmed.
pub fn normalize(markdown_text: &str) -> String {
    let mut text = apply_all(&REWRITES, markdown_text.to_string());
    loop {
        let stripped = apply_all(&LINE_MARKERS, text.clone());
        if stripped == text {
            break;
        }
        text = stripped;
    }

    let text = BLANK_LINES.replace_all(&text, "\n\n");
    let text = HORIZONTAL_SPACE.replace_all(&text, " ");
    text.trim().to_string()
}
