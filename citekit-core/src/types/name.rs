//! Contributor name model

use serde::{Deserialize, Serialize};

/// A contributor name split into its Word bibliography parts.
///
/// Every part is possibly-empty text rather than an `Option`; a part is
/// "present" when it is non-empty. Corporate bodies carry their whole name
/// in `last`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first: String,
    pub middle: String,
    pub last: String,
    pub suffix: String,
}

impl Name {
    /// Create a name for a corporate body; only `last` carries the text.
    pub fn corporate(name: impl Into<String>) -> Self {
        Self {
            last: name.into(),
            ..Self::default()
        }
    }

    /// Render as "Last, First Middle Suffix" for BibTeX author lists.
    ///
    /// Missing parts are omitted; an all-empty name renders as "".
    pub fn as_bibtex(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.last.is_empty() {
            parts.push(self.last.clone());
        }
        let given = join_nonempty(&[&self.first, &self.middle, &self.suffix]);
        if !given.is_empty() {
            parts.push(given);
        }
        parts.join(", ").trim().to_string()
    }

    /// Render as "Last, First Middle" for RIS `AU`/`ED` lines, with the
    /// suffix space-joined onto the given-name portion.
    pub fn as_ris(&self) -> String {
        let mut given = join_nonempty(&[&self.first, &self.middle]);
        if !self.suffix.is_empty() {
            if given.is_empty() {
                given = self.suffix.clone();
            } else {
                given = format!("{} {}", given, self.suffix);
            }
        }
        format!("{}, {}", self.last, given)
            .trim_matches(|c| c == ',' || c == ' ')
            .to_string()
    }
}

fn join_nonempty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
