//! Detection engine tests over realistic document snippets.

use doc_redaction::detect::{detect, Category, Detections};
use doc_redaction::normalize;

fn values(detections: &Detections, category: Category) -> Vec<String> {
    detections
        .get(category)
        .map(|v| v.to_vec())
        .unwrap_or_default()
}

fn has(detections: &Detections, category: Category, value: &str) -> bool {
    detections.contains(category, value)
}

// ---------------------------------------------------------------------------
// Contact data
// ---------------------------------------------------------------------------

#[test]
fn detects_email_addresses() {
    let result = detect("Contact john.doe@example.com or admin@company.org for support.");
    assert!(has(&result, Category::EmailAddresses, "john.doe@example.com"));
    assert!(has(&result, Category::EmailAddresses, "admin@company.org"));
}

#[test]
fn detects_phone_number_formats() {
    let result = detect(
        "
        Call us at (555) 123-4567 or +1-800-555-0123
        International: +49 30 12345678
        Simple: 555.123.4567
        ",
    );
    let phones = values(&result, Category::PhoneNumbers);
    assert!(phones
        .iter()
        .any(|p| p.contains("555") && p.contains("123") && p.contains("4567")));
    assert!(phones.iter().any(|p| p.contains("+1") || p.contains("800")));
    assert!(phones.iter().any(|p| p.contains("12345678")));
}

#[test]
fn short_phone_candidates_are_dropped() {
    let result = detect("Call 123 or (555) 123-4567");
    let phones = values(&result, Category::PhoneNumbers);
    assert!(phones.iter().all(|p| {
        let digits: String = p.chars().filter(|c| c.is_ascii_digit()).collect();
        digits != "123"
    }));
    assert!(phones.iter().any(|p| p.contains("4567")));
}

#[test]
fn detects_street_addresses() {
    let result = detect(
        "
        Visit us at 123 Main Street, Anytown 12345
        Or our office at 456 Oak Avenue
        ",
    );
    let addresses = values(&result, Category::Addresses);
    assert!(addresses.iter().any(|a| a.contains("123 Main Street")));
    assert!(addresses.iter().any(|a| a.contains("456 Oak Avenue")));
}

#[test]
fn detects_people_names() {
    let result = detect("John Smith and Jane Doe at the conference.");
    assert!(has(&result, Category::PeopleNames, "John Smith"));
    assert!(has(&result, Category::PeopleNames, "Jane Doe"));
}

#[test]
fn place_names_are_not_people() {
    let result = detect("Visit New York and United States, meet John Smith there.");
    let names = values(&result, Category::PeopleNames);
    assert!(names.contains(&"John Smith".to_string()));
    assert!(!names.contains(&"New York".to_string()));
    assert!(!names.contains(&"United States".to_string()));
}

// ---------------------------------------------------------------------------
// Financial data
// ---------------------------------------------------------------------------

#[test]
fn detects_credit_cards() {
    let result = detect(
        "
        Card: 1234 5678 9012 3456
        Another: 4111-1111-1111-1111
        ",
    );
    let cards = values(&result, Category::CreditCardNumbers);
    assert!(cards.iter().any(|c| c.contains("1234 5678 9012 3456")));
    assert!(cards.iter().any(|c| c.contains("4111-1111-1111-1111")));
}

#[test]
fn short_digit_runs_are_not_cards() {
    let result = detect("Card: 123456 or 1234-5678-9012-3456");
    let cards = values(&result, Category::CreditCardNumbers);
    assert!(!cards.contains(&"123456".to_string()));
    assert!(cards.iter().any(|c| c.contains("1234-5678-9012-3456")));
}

#[test]
fn detects_ibans() {
    let result = detect("Bank account: DE89370400440532013000 or GB29NWBK60161331926819");
    assert!(has(&result, Category::IbanNumbers, "DE89370400440532013000"));
    assert!(has(&result, Category::IbanNumbers, "GB29NWBK60161331926819"));
}

#[test]
fn account_numbers_report_the_digits_only() {
    let result = detect("Account: 12345678901 or A/C 1234-5678-9012");
    assert!(has(&result, Category::AccountNumbers, "12345678901"));
    assert!(has(&result, Category::AccountNumbers, "1234-5678-9012"));
}

#[test]
fn account_keyword_is_case_insensitive() {
    let result = detect("ACCOUNT: 123456789 or account: 987654321");
    assert!(has(&result, Category::AccountNumbers, "123456789"));
    assert!(has(&result, Category::AccountNumbers, "987654321"));
}

#[test]
fn detects_currency_amounts() {
    let result = detect(
        "
        Price: €1,234.56 or $999.99
        Cost: 1000 EUR or USD 500.00
        ",
    );
    let amounts = values(&result, Category::CurrencyAmounts);
    assert!(amounts.iter().any(|a| a.contains("1,234.56")));
    assert!(amounts.iter().any(|a| a.contains("999.99")));
    assert!(amounts.iter().any(|a| a.contains("USD 500.00")));
}

#[test]
fn detects_german_amount_words_with_currency() {
    let result = detect("Betrag: tausend EUR 1.500,00");
    let amounts = values(&result, Category::CurrencyAmounts);
    assert!(amounts.contains(&"tausend EUR 1.500,00".to_string()));
    assert!(amounts.contains(&"EUR 1.500,00".to_string()));
}

#[test]
fn detects_percentages() {
    let result = detect("Interest rate: 5.5% or 10 percent discount");
    let percentages = values(&result, Category::Percentages);
    assert!(percentages.contains(&"5.5%".to_string()));
    assert!(percentages
        .iter()
        .any(|p| p.contains("10") && p.contains("percent")));
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

#[test]
fn detects_numeric_literals() {
    let result = detect("Quantity: 1000 items, price 25.99, ID 123456");
    assert!(has(&result, Category::Numbers, "1000"));
    assert!(has(&result, Category::Numbers, "25.99"));
    assert!(has(&result, Category::Numbers, "123456"));
}

#[test]
fn detects_german_number_words() {
    let result = detect("Ich habe hundert Euro und drei Äpfel.");
    assert!(has(&result, Category::Numbers, "hundert"));
    assert!(has(&result, Category::Numbers, "drei"));
}

#[test]
fn detects_english_number_words() {
    let result = detect("I have twenty dollars and five apples.");
    assert!(has(&result, Category::Numbers, "twenty"));
    assert!(has(&result, Category::Numbers, "five"));
}

#[test]
fn phone_digits_also_count_as_numbers() {
    let result = detect("Call (555) 123-4567");
    assert!(result.get(Category::PhoneNumbers).is_some());
    assert!(has(&result, Category::Numbers, "555"));
}

// ---------------------------------------------------------------------------
// Whole documents
// ---------------------------------------------------------------------------

#[test]
fn empty_and_plain_text_yield_nothing_sensitive() {
    assert!(detect("").is_empty());

    let result = detect("This is just plain text with no sensitive information.");
    assert!(result.get(Category::EmailAddresses).is_none());
    assert!(result.get(Category::PhoneNumbers).is_none());
    assert!(result.get(Category::Numbers).is_none());
}

#[test]
fn mixed_markdown_document() {
    let result = detect(
        "
        # Contact Information
        **Name**: Max Mustermann
        **Email**: john.smith@company.com
        **Phone**: (555) 123-4567
        **Address**: 123 Main Street, Anytown 12345
        **Account**: 1234567890123456
        **IBAN**: DE89370400440532013000

        ## Financial Details
        **Amount**: €1,500.00
        **Interest**: 3.5%
        **Quantity**: fifty items
        ",
    );
    assert!(has(&result, Category::EmailAddresses, "john.smith@company.com"));
    assert!(values(&result, Category::PeopleNames)
        .iter()
        .any(|n| n.contains("Max Mustermann")));
    assert!(has(&result, Category::IbanNumbers, "DE89370400440532013000"));
    assert!(has(&result, Category::Percentages, "3.5%"));
    assert!(has(&result, Category::Numbers, "fifty"));
}

#[test]
fn duplicates_are_reported_once() {
    let result = detect("Email john@example.com twice: john@example.com");
    assert_eq!(
        values(&result, Category::EmailAddresses),
        vec!["john@example.com".to_string()]
    );
}

#[test]
fn empty_categories_are_absent() {
    let result = detect("Contact john.doe@example.com");
    for (_, found) in result.iter() {
        assert!(!found.is_empty());
    }
    assert!(result.get(Category::IbanNumbers).is_none());
}

#[test]
fn detection_is_deterministic() {
    let doc = "Max Mustermann, max@example.com, +49 30 12345678, 42%";
    assert_eq!(detect(doc), detect(doc));
}

#[test]
fn nested_markdown_normalizes_to_a_fixed_point() {
    for doc in ["> 1. call 555 1234567", "> - mail jane@example.org", "- ## Heading 42"] {
        let once = normalize(doc);
        assert_eq!(normalize(&once), once);
        assert_eq!(detect(&normalize(&once)), detect(&once));
    }
}

#[test]
fn report_serializes_with_category_keys() {
    let result = detect("Write to jane@example.org");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["email_addresses"][0], "jane@example.org");
    assert!(json.get("iban_numbers").is_none());
}
