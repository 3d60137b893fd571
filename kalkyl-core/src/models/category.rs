use serde::{Deserialize, Serialize};

/// Grouping label shown above each block of calculators in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Ekonomi,
    Halsa,
    Tid,
    Matematik,
    Vardag,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Ekonomi,
            Category::Halsa,
            Category::Tid,
            Category::Matematik,
            Category::Vardag,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ekonomi => "Ekonomi",
            Self::Halsa => "Hälsa",
            Self::Tid => "Tid",
            Self::Matematik => "Matematik",
            Self::Vardag => "Vardag",
        }
    }

    /// Parses a display label, case-insensitively. `"Halsa"` is accepted
    /// for terminals that cannot type `ä`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ekonomi" => Some(Self::Ekonomi),
            "hälsa" | "halsa" => Some(Self::Halsa),
            "tid" => Some(Self::Tid),
            "matematik" => Some(Self::Matematik),
            "vardag" => Some(Self::Vardag),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
