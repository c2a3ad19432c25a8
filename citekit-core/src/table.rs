//! Tabular projection of sources for display surfaces

use serde::Serialize;

use crate::types::{Name, Source};

/// One flattened display row per source.
///
/// Consumed by preview surfaces only, never by the encoders.
#[derive(Debug, Clone, Serialize)]
pub struct SourceRow {
    pub key: String,
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
    pub authors: String,
}

/// Flatten sources into display rows; authors join with "; " in
/// surname-first form.
pub fn to_rows(sources: &[Source]) -> Vec<SourceRow> {
    sources
        .iter()
        .map(|source| SourceRow {
            key: source.citation_key(),
            source_type: source.source_type.clone(),
            title: source.title.clone(),
            year: source.year.clone(),
            journal: source.journal.clone(),
            book_title: source.book_title.clone(),
            publisher: source.publisher.clone(),
            city: source.city.clone(),
            volume: source.volume.clone(),
            issue: source.issue.clone(),
            pages: source.pages.clone(),
            doi: source.doi.clone(),
            url: source.url.clone(),
            authors: source
                .authors
                .iter()
                .map(Name::as_ris)
                .collect::<Vec<_>>()
                .join("; "),
        })
        .collect()
}
