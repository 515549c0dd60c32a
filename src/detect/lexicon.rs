use std::collections::HashSet;
use std::sync::LazyLock;

const GERMAN_NUMBER_WORDS: &[&str] = &[
    "null", "eins", "eine", "einer", "einem", "einen", "eines", "zwei", "drei", "vier", "fünf",
    "sechs", "sieben", "acht", "neun", "zehn", "elf", "zwölf", "dreizehn", "vierzehn",
    "fünfzehn", "sechzehn", "siebzehn", "achtzehn", "neunzehn", "zwanzig", "dreißig", "vierzig",
    "fünfzig", "sechzig", "siebzig", "achtzig", "neunzig", "hundert", "tausend", "zehntausend",
    "million", "milliarde",
];

const ENGLISH_NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion",
];

static NUMBER_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    GERMAN_NUMBER_WORDS
        .iter()
        .chain(ENGLISH_NUMBER_WORDS)
        .copied()
        .collect()
});

const TOKEN_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Whether a lowercase token is a German or English number word.
pub fn is_number_word(token: &str) -> bool {
    NUMBER_WORDS.contains(token)
}

/// Number words in `text`, lowercased, in order of appearance (duplicates kept).
///
/// Tokens are split on whitespace and have surrounding `.,;:!?` removed
/// before lookup, so "drei." and "drei" both count.
pub fn number_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(TOKEN_PUNCTUATION))
        .filter(|word| is_number_word(word))
        .map(str::to_string)
        .collect()
}
