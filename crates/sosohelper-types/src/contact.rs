use std::fmt;

use thiserror::Error;

const MIN_DIGITS: usize = 8;
const MAX_DIGITS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("WhatsApp must be in international format like +85291234567")]
pub struct InvalidContact;

/// A WhatsApp number in international format (`+` then 8 to 15 digits,
/// no leading zero), e.g. `+85291234567`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNumber(String);

impl ContactNumber {
    /// Parse user input, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, InvalidContact> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('+').ok_or(InvalidContact)?;

        let valid = (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len())
            && digits.bytes().all(|b| b.is_ascii_digit())
            && !digits.starts_with('0');

        if valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(InvalidContact)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
