//! Semantic validation of raw user inputs.
//!
//! The decision-description check combines a minimum length with a
//! weak lexical signal: the text must contain at least one word from
//! the choice/comparison vocabulary, and must not start with an
//! obvious non-decision opener (greeting, chit-chat). Name checks add
//! gibberish heuristics for single-token keyboard mashing.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::domain::decision::DecisionDescription;
use crate::domain::foundation::{ValidationError, SCORE_MAX, SCORE_MIN};

/// Minimum characters for a decision description, after trimming.
pub const MIN_DESCRIPTION_CHARS: usize = 15;

/// Minimum characters for an option or criterion name, after trimming.
pub const MIN_NAME_CHARS: usize = 3;

/// Fewest options or criteria one analysis may have.
pub const COUNT_MIN: u8 = 2;

/// Most options or criteria one analysis may have.
pub const COUNT_MAX: u8 = 10;

/// Vocabulary that signals a choice or comparison is being described.
static CHOICE_VOCABULARY: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "choose", "choosing", "choice", "select", "selecting", "decide", "deciding", "decision",
        "between", "which", "should", "pick", "picking", "versus", " vs ", "compare", "comparing",
        "whether", "option", "alternative", "offer", "either",
    ]
});

/// Openers that mark obvious non-decisions (greetings, chit-chat).
static NON_DECISION_OPENERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "hi", "hello", "hey", "yo", "thanks", "joke", "test", "what", "weather", "recipe",
        "movie", "song", "lol",
    ]
    .into_iter()
    .collect()
});

/// Ratio of vowels below which a long single token is considered
/// keyboard mashing.
const MIN_VOWEL_RATIO: f64 = 0.15;

/// Validates a free-text decision description.
///
/// Policy: require the minimum length AND at least a weak lexical
/// signal of a choice or comparison; reject otherwise with specific
/// guidance.
///
/// # Errors
///
/// - `TooShort` below [`MIN_DESCRIPTION_CHARS`]
/// - `NotDecisionLike` for greetings, spam, single words, or text
///   with no choice vocabulary
pub fn validate_decision_description(text: &str) -> Result<DecisionDescription, ValidationError> {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(ValidationError::too_short(
            "decision",
            MIN_DESCRIPTION_CHARS,
            trimmed.chars().count(),
        ));
    }

    let lower = trimmed.to_lowercase();

    if let Some(first_word) = lower.split_whitespace().next() {
        let first_word: String = first_word.chars().filter(|c| c.is_alphanumeric()).collect();
        if NON_DECISION_OPENERS.contains(first_word.as_str()) {
            return Err(ValidationError::not_decision_like(
                "starts like a greeting or chit-chat, not a decision",
            ));
        }
    }

    if lower.chars().all(|c| c.is_ascii_digit() || c.is_whitespace()) {
        return Err(ValidationError::not_decision_like(
            "contains only numbers",
        ));
    }

    if lower.split_whitespace().count() < 2 {
        return Err(ValidationError::not_decision_like(
            "a single word cannot describe a choice",
        ));
    }

    if !CHOICE_VOCABULARY.iter().any(|word| lower.contains(word)) {
        return Err(ValidationError::not_decision_like(
            "no choice or comparison wording found",
        ));
    }

    Ok(DecisionDescription::from_validated(trimmed.to_string()))
}

/// Validates a count of options or criteria.
///
/// # Errors
///
/// - `NotNumeric` when the text does not parse as an integer
/// - `OutOfRange` outside `min..=max`
pub fn validate_count(text: &str, min: u8, max: u8) -> Result<u8, ValidationError> {
    let parsed: i64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::not_numeric("count"))?;
    if parsed < min as i64 || parsed > max as i64 {
        return Err(ValidationError::out_of_range(
            "count",
            min as i64,
            max as i64,
            parsed,
        ));
    }
    Ok(parsed as u8)
}

/// Validates an option or criterion name against the names already
/// accumulated in this analysis.
///
/// # Errors
///
/// - `TooShort` below [`MIN_NAME_CHARS`]
/// - `NotDescriptive` without any alphabetic character
/// - `Duplicate` on a case-insensitive match with an existing name
/// - `Gibberish` for single-token keyboard mashing
pub fn validate_name(
    text: &str,
    field: &str,
    existing: &[&str],
) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::too_short(
            field,
            MIN_NAME_CHARS,
            trimmed.chars().count(),
        ));
    }

    if !trimmed.chars().any(|c| c.is_alphabetic()) {
        return Err(ValidationError::not_descriptive(field));
    }

    if existing
        .iter()
        .any(|name| name.eq_ignore_ascii_case(trimmed))
    {
        return Err(ValidationError::duplicate(field, trimmed));
    }

    if is_gibberish(trimmed) {
        return Err(ValidationError::gibberish(field));
    }

    Ok(trimmed.to_string())
}

/// Validates a 1-10 weight or score value.
///
/// # Errors
///
/// - `NotNumeric` when the text does not parse as an integer
/// - `OutOfRange` outside 1-10
pub fn validate_scale(text: &str, field: &str) -> Result<u8, ValidationError> {
    let parsed: i64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::not_numeric(field))?;
    if parsed < SCORE_MIN as i64 || parsed > SCORE_MAX as i64 {
        return Err(ValidationError::out_of_range(
            field,
            SCORE_MIN as i64,
            SCORE_MAX as i64,
            parsed,
        ));
    }
    Ok(parsed as u8)
}

/// Heuristic check for keyboard mashing in a single token.
///
/// Multi-word input is always accepted; real names ("Google Cloud
/// Architect") contain spaces. Single tokens are flagged when they
/// have no vowels, long runs of one character, or almost no vowels
/// relative to their length.
fn is_gibberish(text: &str) -> bool {
    let lower = text.to_lowercase();

    if lower.contains(char::is_whitespace) {
        return false;
    }

    let alpha: Vec<char> = lower.chars().filter(|c| c.is_alphabetic()).collect();
    let vowel_count = alpha
        .iter()
        .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .count();

    if alpha.len() > 3 && vowel_count == 0 {
        return true;
    }

    if has_repeated_run(&lower, 4) {
        return true;
    }

    if alpha.len() >= 6 && (vowel_count as f64) / (alpha.len() as f64) < MIN_VOWEL_RATIO {
        return true;
    }

    false
}

/// Returns true if any character repeats `run_len` or more times in a row.
fn has_repeated_run(text: &str, run_len: usize) -> bool {
    let mut last: Option<char> = None;
    let mut run = 0;
    for c in text.chars() {
        if Some(c) == last {
            run += 1;
            if run >= run_len {
                return true;
            }
        } else {
            last = Some(c);
            run = 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    // Decision description

    #[test]
    fn accepts_a_real_decision() {
        let desc = validate_decision_description(
            "Choosing between two job offers for long-term career growth",
        )
        .unwrap();
        assert_eq!(
            desc.as_str(),
            "Choosing between two job offers for long-term career growth"
        );
    }

    #[test]
    fn rejects_too_short_text() {
        let err = validate_decision_description("hi").unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { .. }));
    }

    #[test]
    fn rejects_greeting_openers_even_when_long() {
        let err = validate_decision_description("hello there, how is it going today").unwrap_err();
        assert!(matches!(err, ValidationError::NotDecisionLike { .. }));
    }

    #[test]
    fn rejects_single_word() {
        let err = validate_decision_description("internationalization").unwrap_err();
        assert!(matches!(err, ValidationError::NotDecisionLike { .. }));
    }

    #[test]
    fn rejects_pure_numbers() {
        let err = validate_decision_description("12345 67890 11111").unwrap_err();
        assert!(matches!(err, ValidationError::NotDecisionLike { .. }));
    }

    #[test]
    fn rejects_text_without_choice_vocabulary() {
        let err = validate_decision_description("the weather is nice around here").unwrap_err();
        assert!(matches!(err, ValidationError::NotDecisionLike { .. }));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let desc =
            validate_decision_description("   Deciding which laptop to buy for work   ").unwrap();
        assert_eq!(desc.as_str(), "Deciding which laptop to buy for work");
    }

    // Counts

    #[test]
    fn count_accepts_bounds() {
        assert_eq!(validate_count("2", COUNT_MIN, COUNT_MAX).unwrap(), 2);
        assert_eq!(validate_count(" 10 ", COUNT_MIN, COUNT_MAX).unwrap(), 10);
    }

    #[test]
    fn count_rejects_out_of_range() {
        let err = validate_count("11", COUNT_MIN, COUNT_MAX).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange { actual: 11, .. }
        ));
        assert!(validate_count("1", COUNT_MIN, COUNT_MAX).is_err());
        assert!(validate_count("-3", COUNT_MIN, COUNT_MAX).is_err());
    }

    #[test]
    fn count_rejects_non_numeric() {
        let err = validate_count("three", COUNT_MIN, COUNT_MAX).unwrap_err();
        assert!(matches!(err, ValidationError::NotNumeric { .. }));
    }

    // Names

    #[test]
    fn name_accepts_and_trims() {
        let name = validate_name("  Google internship  ", "option name", &[]).unwrap();
        assert_eq!(name, "Google internship");
    }

    #[test]
    fn name_rejects_short_input() {
        assert!(validate_name("ab", "option name", &[]).is_err());
    }

    #[test]
    fn name_rejects_pure_digits() {
        let err = validate_name("12345", "option name", &[]).unwrap_err();
        assert!(matches!(err, ValidationError::NotDescriptive { .. }));
    }

    #[test]
    fn name_rejects_duplicates_case_insensitively() {
        let err = validate_name("Alpha", "option name", &["alpha"]).unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { .. }));
    }

    #[test]
    fn name_rejects_vowel_free_mashing() {
        let err = validate_name("kfhkjfk", "option name", &[]).unwrap_err();
        assert!(matches!(err, ValidationError::Gibberish { .. }));
    }

    #[test]
    fn name_rejects_repeated_character_runs() {
        let err = validate_name("aaaaa", "option name", &[]).unwrap_err();
        assert!(matches!(err, ValidationError::Gibberish { .. }));
    }

    #[test]
    fn name_accepts_real_words_with_double_letters() {
        assert!(validate_name("Google", "option name", &[]).is_ok());
        assert!(validate_name("Coffee shop", "option name", &[]).is_ok());
    }

    #[test]
    fn name_accepts_multi_word_even_with_odd_tokens() {
        assert!(validate_name("XYZ Corp", "option name", &[]).is_ok());
    }

    // Scale

    #[test]
    fn scale_accepts_one_through_ten() {
        for v in 1..=10 {
            assert_eq!(validate_scale(&v.to_string(), "score").unwrap(), v);
        }
    }

    #[test]
    fn scale_rejects_out_of_range_and_non_numeric() {
        assert!(matches!(
            validate_scale("0", "score").unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));
        assert!(matches!(
            validate_scale("11", "weight").unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));
        assert!(matches!(
            validate_scale("ten", "score").unwrap_err(),
            ValidationError::NotNumeric { .. }
        ));
    }

    #[test]
    fn validators_are_deterministic() {
        let a = validate_name("Berlin office", "option name", &["Remote"]);
        let b = validate_name("Berlin office", "option name", &["Remote"]);
        assert_eq!(a, b);
    }
}
