//! String-keyed configuration store
//!
//! A [`ConfigurationGroup`] holds ordered `key = value` entries and named
//! subgroups. Keys and group names may repeat. Typed access goes through
//! [`ConfigurationValue`], so enum families such as
//! [`Primitive`](meshkit_core::Primitive) are stored as their canonical
//! tokens and parsed back with an exact lookup.

use crate::options::ConfigurationOptions;
use crate::text::{ConfigurationReader, ConfigurationWriter};
use meshkit_core::{ConfigurationValue, Error, Result};
use std::io::{BufRead, Write};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// A group of values and nested groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationGroup {
    values: Vec<(String, String)>,
    groups: Vec<(String, ConfigurationGroup)>,
}

impl ConfigurationGroup {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first value stored under `key`, appending it if missing
    pub fn set_value<T: ConfigurationValue>(&mut self, key: &str, value: T) {
        self.set_raw(key, value.to_configuration_string());
    }

    /// Append another value under `key`
    pub fn add_value<T: ConfigurationValue>(&mut self, key: &str, value: T) {
        self.add_raw(key, value.to_configuration_string());
    }

    /// Set the first value under `key` without conversion
    pub fn set_raw(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.values.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.values.push((key.to_string(), value)),
        }
    }

    pub fn add_raw(&mut self, key: &str, value: impl Into<String>) {
        self.values.push((key.to_string(), value.into()));
    }

    /// First value stored under `key`, as stored
    pub fn raw_value(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value under `key` converted to `T`
    ///
    /// Fails with [`Error::MissingKey`] if the key is absent and with the
    /// conversion error (e.g. [`Error::InvalidToken`]) if the stored string
    /// does not describe a `T`.
    pub fn value<T: ConfigurationValue>(&self, key: &str) -> Result<T> {
        let raw = self
            .raw_value(key)
            .ok_or_else(|| Error::MissingKey(key.to_string()))?;
        T::from_configuration_string(raw)
    }

    /// First value under `key`, or `default` if the key is absent
    ///
    /// A present but unparsable value is still an error.
    pub fn value_or<T: ConfigurationValue>(&self, key: &str, default: T) -> Result<T> {
        match self.raw_value(key) {
            Some(raw) => T::from_configuration_string(raw),
            None => Ok(default),
        }
    }

    /// All values under `key`, in insertion order
    pub fn values<T: ConfigurationValue>(&self, key: &str) -> Result<Vec<T>> {
        self.values
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| T::from_configuration_string(v))
            .collect()
    }

    pub fn has_value(&self, key: &str) -> bool {
        self.values.iter().any(|(k, _)| k == key)
    }

    pub fn value_count(&self, key: &str) -> usize {
        self.values.iter().filter(|(k, _)| k == key).count()
    }

    /// Remove the first value under `key`, returning whether one existed
    pub fn remove_value(&mut self, key: &str) -> bool {
        match self.values.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.values.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every value under `key`, returning how many were removed
    pub fn remove_all_values(&mut self, key: &str) -> usize {
        let before = self.values.len();
        self.values.retain(|(k, _)| k != key);
        before - self.values.len()
    }

    /// Distinct keys in order of first appearance
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for (key, _) in &self.values {
            if !keys.contains(&key.as_str()) {
                keys.push(key.as_str());
            }
        }
        keys
    }

    /// All entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First subgroup named `name`
    pub fn group(&self, name: &str) -> Option<&ConfigurationGroup> {
        self.groups.iter().find(|(n, _)| n == name).map(|(_, g)| g)
    }

    pub fn group_mut(&mut self, name: &str) -> Option<&mut ConfigurationGroup> {
        self.groups
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, g)| g)
    }

    /// All subgroups named `name`
    pub fn groups<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ConfigurationGroup> + 'a {
        self.groups
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, g)| g)
    }

    /// All subgroups with their names, in insertion order
    pub fn subgroups(&self) -> impl Iterator<Item = (&str, &ConfigurationGroup)> {
        self.groups.iter().map(|(n, g)| (n.as_str(), g))
    }

    /// Append a new empty subgroup
    pub fn add_group(&mut self, name: &str) -> &mut ConfigurationGroup {
        self.groups.push((name.to_string(), ConfigurationGroup::new()));
        let last = self.groups.len() - 1;
        &mut self.groups[last].1
    }

    /// Last subgroup named `name`, created if missing
    pub fn ensure_group(&mut self, name: &str) -> &mut ConfigurationGroup {
        match self.groups.iter().rposition(|(n, _)| n == name) {
            Some(index) => &mut self.groups[index].1,
            None => self.add_group(name),
        }
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.groups.iter().any(|(n, _)| n == name)
    }

    pub fn group_count(&self, name: &str) -> usize {
        self.groups.iter().filter(|(n, _)| n == name).count()
    }

    /// Remove the first subgroup named `name`
    pub fn remove_group(&mut self, name: &str) -> Option<ConfigurationGroup> {
        let index = self.groups.iter().position(|(n, _)| n == name)?;
        Some(self.groups.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.groups.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.groups.is_empty()
    }

    /// Total number of values in this group and all nested groups
    pub fn total_value_count(&self) -> usize {
        self.values.len()
            + self
                .groups
                .iter()
                .map(|(_, g)| g.total_value_count())
                .sum::<usize>()
    }
}

/// Root configuration with text persistence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    root: ConfigurationGroup,
    options: ConfigurationOptions,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigurationOptions) -> Self {
        Self {
            root: ConfigurationGroup::new(),
            options,
        }
    }

    pub fn options(&self) -> &ConfigurationOptions {
        &self.options
    }

    pub fn root(&self) -> &ConfigurationGroup {
        &self.root
    }

    pub fn into_root(self) -> ConfigurationGroup {
        self.root
    }

    /// Parse configuration text with default options
    pub fn parse(text: &str) -> Result<Self> {
        Self::read_from(text.as_bytes(), ConfigurationOptions::default())
    }

    /// Read configuration text from any buffered reader
    pub fn read_from<R: BufRead>(reader: R, options: ConfigurationOptions) -> Result<Self> {
        let root = ConfigurationReader::new(&options).read(reader)?;
        Ok(Self { root, options })
    }

    /// Write the configuration as text
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        ConfigurationWriter::write(&self.root, writer)
    }

    /// Render the configuration as a text string
    pub fn to_text(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::InvalidData(e.to_string()))
    }
}

impl Deref for Configuration {
    type Target = ConfigurationGroup;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl DerefMut for Configuration {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.root
    }
}

impl FromStr for Configuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
