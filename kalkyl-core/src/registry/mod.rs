//! Calculator registry.
//!
//! The registry is the ordered, read-only list of every calculator the site
//! knows about. Listings group it by [`Category`]; the flag and premium
//! stores resolve calculator ids against it.

mod catalog;

use std::collections::HashSet;

use regex::Regex;
use thiserror::Error;

use crate::models::{CalculatorInfo, Category};

/// Route slugs are lowercase ASCII words joined by single hyphens.
const PATH_PATTERN: &str = r"^/[a-z0-9]+(-[a-z0-9]+)*$";

/// Invariant violations reported by [`Registry::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate calculator id '{0}'")]
    DuplicateId(String),

    #[error("duplicate calculator path '{0}'")]
    DuplicatePath(String),

    #[error("calculator '{id}' has an invalid path '{path}'")]
    InvalidPath { id: String, path: String },

    #[error("path pattern failed to compile: {0}")]
    Pattern(String),
}

/// Read-only view over a static list of calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registry {
    entries: &'static [CalculatorInfo],
}

impl Registry {
    /// Wraps an arbitrary static list. Used by tests to inject small
    /// registries; the site itself uses [`Registry::builtin`].
    pub const fn new(entries: &'static [CalculatorInfo]) -> Self {
        Self { entries }
    }

    /// The site's calculator catalog.
    pub const fn builtin() -> Self {
        Self::new(catalog::CALCULATORS)
    }

    pub fn all(&self) -> &'static [CalculatorInfo] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static CalculatorInfo> + use<> {
        self.entries.iter()
    }

    /// Looks up a calculator by id. Unknown ids yield `None`.
    pub fn get(
        &self,
        id: &str,
    ) -> Option<&'static CalculatorInfo> {
        self.entries.iter().find(|c| c.id == id)
    }

    /// Looks up a calculator by its route, e.g. `/lanekalkylator`.
    /// A trailing slash is ignored.
    pub fn get_by_path(
        &self,
        path: &str,
    ) -> Option<&'static CalculatorInfo> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        self.entries.iter().find(|c| c.path == path)
    }

    /// Entries of one category, in registry order.
    pub fn by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &'static CalculatorInfo> + use<> {
        self.entries.iter().filter(move |c| c.category == category)
    }

    /// Categories that have at least one entry, in first-appearance order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for entry in self.entries {
            if !seen.contains(&entry.category) {
                seen.push(entry.category);
            }
        }
        seen
    }

    /// Checks that ids and paths are unique and that every path is a slug.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, scanning in registry order.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let pattern = Regex::new(PATH_PATTERN).map_err(|e| RegistryError::Pattern(e.to_string()))?;
        let mut ids = HashSet::new();
        let mut paths = HashSet::new();

        for entry in self.entries {
            if !ids.insert(entry.id) {
                return Err(RegistryError::DuplicateId(entry.id.to_string()));
            }
            if !paths.insert(entry.path) {
                return Err(RegistryError::DuplicatePath(entry.path.to_string()));
            }
            if !pattern.is_match(entry.path) {
                return Err(RegistryError::InvalidPath {
                    id: entry.id.to_string(),
                    path: entry.path.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
