//! Descriptor tables mapping enum families to canonical names
//!
//! Every enum family owns one static [`DescriptorTable`] listing each value
//! together with its canonical token and raw code. The table is the single
//! source for debug labels (`Mesh::Primitive::TriangleFan`), persisted tokens
//! (`TriangleFan`) and the inverse lookup from a token back to the value.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Placeholder written for raw codes that have no descriptor
pub const INVALID_NAME: &str = "(invalid)";

/// One entry of a descriptor table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor<T> {
    pub value: T,
    pub token: &'static str,
    pub raw: u32,
}

impl<T> Descriptor<T> {
    pub const fn new(value: T, token: &'static str, raw: u32) -> Self {
        Self { value, token, raw }
    }
}

/// Immutable lookup table for a closed enum family
#[derive(Debug)]
pub struct DescriptorTable<T: 'static> {
    family: &'static str,
    entries: &'static [Descriptor<T>],
}

impl<T: Copy + Eq + 'static> DescriptorTable<T> {
    /// Create a table for `family` (e.g. `"Mesh::Primitive"`)
    pub const fn new(family: &'static str, entries: &'static [Descriptor<T>]) -> Self {
        Self { family, entries }
    }

    /// Qualifying prefix used in debug labels
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// All descriptors in declaration order
    pub fn entries(&self) -> &'static [Descriptor<T>] {
        self.entries
    }

    /// Iterate over all values of the family in declaration order
    pub fn values(&self) -> impl Iterator<Item = T> + 'static {
        let entries = self.entries;
        entries.iter().map(|entry| entry.value)
    }

    fn entry(&self, value: T) -> Option<&'static Descriptor<T>> {
        self.entries.iter().find(|entry| entry.value == value)
    }

    /// Short canonical token used for persistence
    pub fn token_for(&self, value: T) -> &'static str {
        self.entry(value).map_or(INVALID_NAME, |entry| entry.token)
    }

    /// Fully qualified label, `"<family>::<token>"`
    pub fn debug_label(&self, value: T) -> String {
        format!("{}::{}", self.family, self.token_for(value))
    }

    /// Write the debug label without an intermediate allocation
    pub fn fmt_label(&self, value: T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.family, self.token_for(value))
    }

    /// Exact, case-sensitive inverse of [`token_for`](Self::token_for)
    pub fn value_from_token(&self, token: &str) -> Result<T> {
        self.entries
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.value)
            .ok_or_else(|| Error::InvalidToken {
                family: self.family,
                token: token.to_string(),
            })
    }

    /// Value whose raw code is `raw`, if the family has one
    pub fn value_from_raw(&self, raw: u32) -> Option<T> {
        self.entries
            .iter()
            .find(|entry| entry.raw == raw)
            .map(|entry| entry.value)
    }

    /// Debug label for a raw code; unknown codes yield `"<family>::(invalid)"`
    pub fn debug_label_for_raw(&self, raw: u32) -> String {
        let name = self
            .entries
            .iter()
            .find(|entry| entry.raw == raw)
            .map_or(INVALID_NAME, |entry| entry.token);
        format!("{}::{}", self.family, name)
    }

    /// Check that tokens, raw codes and values are all unique within the table
    pub fn validate(&self) -> Result<()> {
        let mut tokens = HashSet::new();
        let mut raws = HashSet::new();

        for (i, entry) in self.entries.iter().enumerate() {
            if entry.token.is_empty() {
                return Err(Error::InvalidData(format!(
                    "{}: empty token at index {}",
                    self.family, i
                )));
            }
            if !tokens.insert(entry.token) {
                return Err(Error::InvalidData(format!(
                    "{}: duplicate token {:?}",
                    self.family, entry.token
                )));
            }
            if !raws.insert(entry.raw) {
                return Err(Error::InvalidData(format!(
                    "{}: duplicate raw code {:#x}",
                    self.family, entry.raw
                )));
            }
            if self.entries[..i].iter().any(|other| other.value == entry.value) {
                return Err(Error::InvalidData(format!(
                    "{}: value for {:?} listed twice",
                    self.family, entry.token
                )));
            }
        }

        Ok(())
    }
}

/// Capability shared by every enum family with a descriptor table
///
/// The debug sink and the configuration layer only depend on this trait,
/// never on the concrete enum types.
pub trait Describable: Copy + Eq + 'static {
    /// The family's static descriptor table
    fn table() -> &'static DescriptorTable<Self>;

    fn debug_label(&self) -> String {
        Self::table().debug_label(*self)
    }

    fn token(&self) -> &'static str {
        Self::table().token_for(*self)
    }

    fn from_token(token: &str) -> Result<Self> {
        Self::table().value_from_token(token)
    }
}

/// Serialize a describable value as its canonical token
pub fn serialize_token<T: Describable, S: Serializer>(
    value: &T,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(value.token())
}

/// Deserialize a describable value from its canonical token
pub fn deserialize_token<'de, T: Describable, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<T, D::Error> {
    let token = String::deserialize(deserializer)?;
    T::from_token(&token).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Channel {
        Red,
        Green,
    }

    static CHANNELS: DescriptorTable<Channel> = DescriptorTable::new(
        "Color::Channel",
        &[
            Descriptor::new(Channel::Red, "Red", 1),
            Descriptor::new(Channel::Green, "Green", 2),
        ],
    );

    static DUPLICATE_TOKENS: DescriptorTable<Channel> = DescriptorTable::new(
        "Color::Channel",
        &[
            Descriptor::new(Channel::Red, "Red", 1),
            Descriptor::new(Channel::Green, "Red", 2),
        ],
    );

    static DUPLICATE_RAW: DescriptorTable<Channel> = DescriptorTable::new(
        "Color::Channel",
        &[
            Descriptor::new(Channel::Red, "Red", 1),
            Descriptor::new(Channel::Green, "Green", 1),
        ],
    );

    static MISSING_GREEN: DescriptorTable<Channel> = DescriptorTable::new(
        "Color::Channel",
        &[Descriptor::new(Channel::Red, "Red", 1)],
    );

    #[test]
    fn test_label_and_token_agree() {
        for value in CHANNELS.values() {
            assert_eq!(
                CHANNELS.debug_label(value),
                format!("Color::Channel::{}", CHANNELS.token_for(value))
            );
        }
    }

    #[test]
    fn test_value_from_token_is_case_sensitive() {
        assert_eq!(CHANNELS.value_from_token("Green").unwrap(), Channel::Green);

        let err = CHANNELS.value_from_token("green").unwrap_err();
        match err {
            Error::InvalidToken { family, token } => {
                assert_eq!(family, "Color::Channel");
                assert_eq!(token, "green");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_raw_lookup() {
        assert_eq!(CHANNELS.value_from_raw(2), Some(Channel::Green));
        assert_eq!(CHANNELS.value_from_raw(3), None);
        assert_eq!(CHANNELS.debug_label_for_raw(1), "Color::Channel::Red");
        assert_eq!(CHANNELS.debug_label_for_raw(3), "Color::Channel::(invalid)");
    }

    #[test]
    fn test_missing_entry_uses_placeholder() {
        assert_eq!(MISSING_GREEN.token_for(Channel::Green), INVALID_NAME);
        assert_eq!(
            MISSING_GREEN.debug_label(Channel::Green),
            "Color::Channel::(invalid)"
        );
    }

    #[test]
    fn test_validate() {
        assert!(CHANNELS.validate().is_ok());
        assert!(DUPLICATE_TOKENS.validate().is_err());
        assert!(DUPLICATE_RAW.validate().is_err());
    }
}
