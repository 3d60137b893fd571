use serde::Serialize;

use super::Category;

/// Static metadata for one calculator page.
///
/// Entries are defined at compile time; `premium` is `false` for every
/// calculator that is free to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculatorInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
    pub category: Category,
    pub premium: bool,
}

impl CalculatorInfo {
    /// Free calculator entry.
    pub const fn new(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        path: &'static str,
        category: Category,
    ) -> Self {
        Self {
            id,
            title,
            description,
            path,
            category,
            premium: false,
        }
    }

    /// Marks the entry as gated behind the premium subscription.
    pub const fn premium(mut self) -> Self {
        self.premium = true;
        self
    }
}

impl std::fmt::Display for CalculatorInfo {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.path)?;
        if self.premium {
            write!(f, " [premium]")?;
        }
        Ok(())
    }
}
