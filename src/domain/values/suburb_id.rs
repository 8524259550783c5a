use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Suburb key of the form `name-tokens[-postcode]`, e.g. `belmont-north-2280`.
///
/// Tokens are lowercase ASCII letters joined by single hyphens; the last token
/// may instead be a 4-digit postcode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SuburbId(String);

impl SuburbId {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if is_well_formed(value) {
            Ok(SuburbId(value.to_string()))
        } else {
            Err(DomainError::InvalidInput(format!(
                "Invalid suburb ID format: '{value}'. Expected 'suburb-name' or 'suburb-name-postcode' (e.g. 'melbourne-3000')"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable name the remote service expects.
    ///
    /// A trailing all-digit token is treated as a postcode and dropped, the
    /// rest is title-cased and joined with spaces. Lossy: `"melbourne-3000"`
    /// and `"melbourne"` both become `"Melbourne"`.
    pub fn display_name(&self) -> String {
        let mut tokens: Vec<&str> = self.0.split('-').collect();
        if tokens.len() > 1 && tokens.last().is_some_and(|t| is_digits(t)) {
            tokens.pop();
        }
        tokens
            .iter()
            .map(|t| title_case(t))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn is_well_formed(value: &str) -> bool {
    let tokens: Vec<&str> = value.split('-').collect();
    let (last, names) = match tokens.split_last() {
        Some(split) => split,
        None => return false,
    };
    let is_word = |t: &&str| !t.is_empty() && t.chars().all(|c| c.is_ascii_lowercase());

    if names.is_empty() {
        return is_word(last);
    }
    names.iter().all(is_word) && (is_word(last) || (last.len() == 4 && is_digits(last)))
}

impl fmt::Display for SuburbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SuburbId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SuburbId::parse(s)
    }
}

impl TryFrom<String> for SuburbId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SuburbId::parse(&value)
    }
}

impl From<SuburbId> for String {
    fn from(id: SuburbId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_name_with_postcode() {
        assert!(SuburbId::parse("belmont-north-2280").is_ok());
        assert!(SuburbId::parse("melbourne").is_ok());
    }

    #[test]
    fn test_rejects_malformed_keys() {
        for bad in ["", "Melbourne", "melbourne-", "-melbourne", "melbourne-300", "3000", "mel_bourne"] {
            assert!(SuburbId::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_display_name_drops_postcode() {
        let id = SuburbId::parse("belmont-north-2280").unwrap();
        assert_eq!(id.display_name(), "Belmont North");
    }

    #[test]
    fn test_display_name_is_lossy() {
        let with_postcode = SuburbId::parse("melbourne-3000").unwrap();
        let without = SuburbId::parse("melbourne").unwrap();
        assert_eq!(with_postcode.display_name(), without.display_name());
        assert_ne!(with_postcode.display_name().to_lowercase(), with_postcode.as_str());
    }
}
