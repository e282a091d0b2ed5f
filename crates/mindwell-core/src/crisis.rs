//! Crisis keyword detector.
//!
//! Plain case-insensitive substring matching over a small fixed English phrase list.
//! It misses most indirect expressions of distress and is only used to surface
//! hotline information in the client. It is not a clinical assessment.

/// Phrases that flag a check-in as a possible crisis.
pub const CRISIS_PHRASES: [&str; 6] = [
    "suicide",
    "kill myself",
    "end it all",
    "no point",
    "hopeless",
    "can't go on",
];

/// True iff the lower-cased description contains any of [`CRISIS_PHRASES`].
/// Typographic apostrophes are folded to `'` first so "can’t go on" still matches.
pub fn detect_crisis(description: Option<&str>) -> bool {
    let Some(text) = description else {
        return false;
    };
    let normalized = text.to_lowercase().replace('\u{2019}', "'");
    CRISIS_PHRASES.iter().any(|phrase| normalized.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phrase_is_detected_regardless_of_case() {
        for phrase in CRISIS_PHRASES {
            let sentence = format!("Lately {} is all I think about", phrase.to_uppercase());
            assert!(detect_crisis(Some(&sentence)), "missed: {}", phrase);
        }
    }

    #[test]
    fn hopeless_scenario_is_flagged() {
        assert!(detect_crisis(Some("I feel hopeless and there's no point")));
        assert!(detect_crisis(Some("I Feel HOPELESS")));
    }

    #[test]
    fn curly_apostrophe_matches() {
        assert!(detect_crisis(Some("I can\u{2019}t go on like this")));
    }

    #[test]
    fn ordinary_descriptions_are_not_flagged() {
        assert!(!detect_crisis(Some("pretty good day")));
        assert!(!detect_crisis(Some("a bit tired after work, but okay")));
        assert!(!detect_crisis(Some("")));
    }

    #[test]
    fn absent_description_is_not_flagged() {
        assert!(!detect_crisis(None));
    }
}
