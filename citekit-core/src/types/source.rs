//! Bibliographic source record

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Name;

static YEAR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// One bibliographic record from a Word source document.
///
/// Every scalar field is possibly-empty text; absence is the empty string,
/// never a null marker. `authors` and `editors` preserve citation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Word-assigned identifier; carried through but unused in output.
    pub tag: String,

    /// Native source-type string (e.g. "JournalArticle"), matched
    /// case-insensitively against the entry-type tables.
    pub source_type: String,

    pub title: String,
    pub year: String,
    pub journal: String,
    pub book_title: String,
    pub publisher: String,
    pub city: String,
    pub volume: String,
    pub issue: String,
    pub pages: String,
    pub doi: String,
    pub url: String,

    pub authors: Vec<Name>,
    pub editors: Vec<Name>,
}

impl Source {
    /// Derive the citation key used by the BibTeX output.
    ///
    /// The key is the first author's surname (or "anon"), the first run of
    /// four digits in `year` (or "n.d."), and the first word of the title
    /// reduced to word characters and cut to 12 characters, concatenated
    /// and lower-cased. Sources that agree on all three components collide;
    /// the key makes no attempt to disambiguate.
    pub fn citation_key(&self) -> String {
        let last = self
            .authors
            .first()
            .map(|a| a.last.as_str())
            .unwrap_or("anon");
        let year = YEAR_RUN
            .find(&self.year)
            .map(|m| m.as_str())
            .unwrap_or("n.d.");
        let first_word = self.title.split_whitespace().next().unwrap_or("untitled");
        let word: String = NON_WORD
            .replace_all(first_word, "")
            .chars()
            .take(12)
            .collect();
        format!("{last}{year}{word}").to_lowercase()
    }

    /// Map the native source type onto the BibTeX entry vocabulary.
    ///
    /// Unknown and empty types fall back to "misc".
    pub fn bibtex_entry_type(&self) -> &'static str {
        match self.source_type.to_lowercase().as_str() {
            "journalarticle" => "article",
            "book" => "book",
            "booksection" => "incollection",
            "conferenceproceedings" => "inproceedings",
            "report" => "techreport",
            "thesis" => "phdthesis",
            "mastersthesis" => "mastersthesis",
            "internet" => "misc",
            "webpage" => "misc",
            "film" => "misc",
            "art" => "misc",
            "patent" => "misc",
            _ => "misc",
        }
    }

    /// Map the native source type onto the RIS `TY` vocabulary.
    ///
    /// Unknown and empty types fall back to "GEN".
    pub fn ris_entry_type(&self) -> &'static str {
        match self.source_type.to_lowercase().as_str() {
            "journalarticle" => "JOUR",
            "book" => "BOOK",
            "booksection" => "CHAP",
            "conferenceproceedings" => "CPAPER",
            "report" => "RPRT",
            "thesis" => "THES",
            "mastersthesis" => "THES",
            "internet" => "ELEC",
            "webpage" => "ELEC",
            "film" => "MPCT",
            "art" => "GEN",
            "patent" => "PAT",
            _ => "GEN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_with(last: &str, year: &str, title: &str) -> Source {
        Source {
            title: title.to_string(),
            year: year.to_string(),
            authors: vec![Name {
                last: last.to_string(),
                ..Name::default()
            }],
            ..Source::default()
        }
    }

    #[test]
    fn test_key_basic() {
        let source = source_with("Smith", "2020", "The Great Study");
        assert_eq!(source.citation_key(), "smith2020the");
    }

    #[test]
    fn test_key_single_character_title() {
        let source = source_with("Lee", "2021", "A");
        assert_eq!(source.citation_key(), "lee2021a");
    }

    #[test]
    fn test_key_no_authors_uses_anon() {
        let source = Source {
            title: "Study".to_string(),
            year: "1999".to_string(),
            ..Source::default()
        };
        assert_eq!(source.citation_key(), "anon1999study");
    }

    #[test]
    fn test_key_no_year_uses_nd() {
        let source = source_with("Smith", "", "Study");
        assert_eq!(source.citation_key(), "smithn.d.study");
    }

    #[test]
    fn test_key_year_embedded_in_text() {
        let source = source_with("Smith", "circa 2018, revised 2020", "Study");
        assert_eq!(source.citation_key(), "smith2018study");
    }

    #[test]
    fn test_key_title_word_stripped_and_truncated() {
        let source = source_with("Smith", "2020", "Self-organization: a primer");
        // "Self-organization" loses the hyphen and colon, then cuts to 12.
        assert_eq!(source.citation_key(), "smith2020selforganiza");
    }

    #[test]
    fn test_key_empty_title_uses_untitled() {
        let source = source_with("Smith", "2020", "");
        assert_eq!(source.citation_key(), "smith2020untitled");
    }

    #[test]
    fn test_bibtex_type_table() {
        let cases = [
            ("JournalArticle", "article"),
            ("Book", "book"),
            ("BookSection", "incollection"),
            ("ConferenceProceedings", "inproceedings"),
            ("Report", "techreport"),
            ("Thesis", "phdthesis"),
            ("MastersThesis", "mastersthesis"),
            ("Internet", "misc"),
            ("Webpage", "misc"),
            ("Film", "misc"),
            ("Art", "misc"),
            ("Patent", "misc"),
        ];
        for (native, expected) in cases {
            let source = Source {
                source_type: native.to_string(),
                ..Source::default()
            };
            assert_eq!(source.bibtex_entry_type(), expected, "type {native}");
        }
    }

    #[test]
    fn test_ris_type_table() {
        let cases = [
            ("JournalArticle", "JOUR"),
            ("Book", "BOOK"),
            ("BookSection", "CHAP"),
            ("ConferenceProceedings", "CPAPER"),
            ("Report", "RPRT"),
            ("Thesis", "THES"),
            ("MastersThesis", "THES"),
            ("Internet", "ELEC"),
            ("Webpage", "ELEC"),
            ("Film", "MPCT"),
            ("Art", "GEN"),
            ("Patent", "PAT"),
        ];
        for (native, expected) in cases {
            let source = Source {
                source_type: native.to_string(),
                ..Source::default()
            };
            assert_eq!(source.ris_entry_type(), expected, "type {native}");
        }
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let source = Source {
            source_type: "weblog".to_string(),
            ..Source::default()
        };
        assert_eq!(source.bibtex_entry_type(), "misc");
        assert_eq!(source.ris_entry_type(), "GEN");
    }

    #[test]
    fn test_empty_type_falls_back() {
        let source = Source::default();
        assert_eq!(source.bibtex_entry_type(), "misc");
        assert_eq!(source.ris_entry_type(), "GEN");
    }
}
