/*!
 * Tests for target language parsing
 */

use gutentrans::errors::ConfigError;
use gutentrans::TargetLanguage;

/// Every identifier parses back to its own language
#[test]
fn test_identifier_roundTrip_shouldParseEveryLanguage() {
    for language in TargetLanguage::ALL {
        assert_eq!(language.identifier().parse::<TargetLanguage>(), Ok(language));
        assert_eq!(language.to_string(), language.identifier());
    }
}

/// Display names are what the output header shows
#[test]
fn test_displayName_shouldBeCapitalizedEnglishName() {
    let names: Vec<&str> = TargetLanguage::ALL.iter().map(|l| l.display_name()).collect();
    assert_eq!(names, vec!["Indonesian", "Filipino", "Tamil", "Thai", "Vietnamese"]);
}

/// Unsupported languages list all valid choices
#[test]
fn test_parse_withUnsupportedLanguage_shouldListChoices() {
    let error = "klingon".parse::<TargetLanguage>().unwrap_err();

    let message = error.to_string();
    assert!(message.starts_with("Unsupported language: klingon"));
    for language in TargetLanguage::ALL {
        assert!(message.contains(language.identifier()));
    }
    assert!(matches!(error, ConfigError::UnsupportedLanguage { .. }));
}

/// Real languages outside the supported set are rejected too
#[test]
fn test_parse_withFrench_shouldFail() {
    assert!("fr".parse::<TargetLanguage>().is_err());
    assert!("french".parse::<TargetLanguage>().is_err());
    assert!("".parse::<TargetLanguage>().is_err());
}
