use isolang::Language;
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Language utilities for target language handling
///
/// Only a fixed set of Southeast Asian languages is supported. Languages are
/// selected by their English name (case-insensitive) or by an ISO 639-1 or
/// ISO 639-3 code that maps onto one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    Indonesian,
    Filipino,
    Tamil,
    Thai,
    Vietnamese,
}

impl TargetLanguage {
    /// Every supported language, in the order they are listed to users
    pub const ALL: [TargetLanguage; 5] = [
        Self::Indonesian,
        Self::Filipino,
        Self::Tamil,
        Self::Thai,
        Self::Vietnamese,
    ];

    /// Lowercase identifier used on the command line and in file names
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Indonesian => "indonesian",
            Self::Filipino => "filipino",
            Self::Tamil => "tamil",
            Self::Thai => "thai",
            Self::Vietnamese => "vietnamese",
        }
    }

    /// Capitalized name used in prompts and headers
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Indonesian => "Indonesian",
            Self::Filipino => "Filipino",
            Self::Tamil => "Tamil",
            Self::Thai => "Thai",
            Self::Vietnamese => "Vietnamese",
        }
    }

    /// ISO 639-3 code of the language
    pub fn iso_639_3(&self) -> &'static str {
        match self {
            Self::Indonesian => "ind",
            Self::Filipino => "fil",
            Self::Tamil => "tam",
            Self::Thai => "tha",
            Self::Vietnamese => "vie",
        }
    }

    /// Identifiers of every supported language
    pub fn supported_identifiers() -> Vec<String> {
        Self::ALL.iter().map(|l| l.identifier().to_string()).collect()
    }

    // Resolve an ISO 639-1 or 639-3 code through isolang
    fn from_iso_code(code: &str) -> Option<Self> {
        let language = match code.len() {
            2 => Language::from_639_1(code),
            3 => Language::from_639_3(code),
            _ => None,
        }?;

        Self::ALL
            .into_iter()
            .find(|candidate| candidate.iso_639_3() == language.to_639_3())
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl FromStr for TargetLanguage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        Self::ALL
            .into_iter()
            .find(|l| l.identifier() == normalized)
            .or_else(|| Self::from_iso_code(&normalized))
            .ok_or_else(|| ConfigError::UnsupportedLanguage {
                requested: s.to_string(),
                supported: Self::supported_identifiers(),
            })
    }
}
