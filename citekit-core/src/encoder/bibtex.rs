//! BibTeX encoder implementation

use crate::error::ConversionError;
use crate::types::{Name, Source};
use std::io::Write;

/// Encoder for the BibTeX (`.bib`) format
pub struct BibtexEncoder;

impl BibtexEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BibtexEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Encoder for BibtexEncoder {
    fn encode(&self, sources: &[Source], writer: &mut dyn Write) -> Result<(), ConversionError> {
        writer
            .write_all(to_bibtex(sources).as_bytes())
            .map_err(|e| ConversionError::WriteFailed(e.to_string()))
    }

    fn format_name(&self) -> &str {
        "BibTeX"
    }

    fn file_extension(&self) -> &str {
        "bib"
    }

    fn mime_type(&self) -> &str {
        "text/plain"
    }
}

/// Minimal escaping for BibTeX values: backslashes are doubled first, then
/// braces and double quotes get a backslash prefix.
fn escape(value: &str) -> String {
    let mut escaped = value.replace('\\', "\\\\");
    for ch in ['{', '}', '"'] {
        escaped = escaped.replace(ch, &format!("\\{ch}"));
    }
    escaped
}

/// Serialize sources as BibTeX entries separated by blank lines.
///
/// Fields are emitted only when non-empty, in a fixed order, with authors
/// and editors joined by " and " in surname-first form. The output carries
/// a trailing newline iff at least one entry was produced.
pub fn to_bibtex(sources: &[Source]) -> String {
    let mut entries = Vec::new();

    for source in sources {
        let scalars = [
            ("title", source.title.as_str()),
            ("year", source.year.as_str()),
            ("journal", source.journal.as_str()),
            ("booktitle", source.book_title.as_str()),
            ("publisher", source.publisher.as_str()),
            ("address", source.city.as_str()),
            ("volume", source.volume.as_str()),
            ("number", source.issue.as_str()),
            ("pages", source.pages.as_str()),
            ("doi", source.doi.as_str()),
            ("url", source.url.as_str()),
        ];

        let mut lines: Vec<String> = scalars
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| format!("  {} = {{{}}}", field, escape(value)))
            .collect();

        for (field, people) in [("author", &source.authors), ("editor", &source.editors)] {
            let joined = people
                .iter()
                .map(Name::as_bibtex)
                .collect::<Vec<_>>()
                .join(" and ");
            if !joined.is_empty() {
                lines.push(format!("  {} = {{{}}}", field, escape(&joined)));
            }
        }

        entries.push(format!(
            "@{}{{{},\n{}\n}}",
            source.bibtex_entry_type(),
            source.citation_key(),
            lines.join(",\n")
        ));
    }

    if entries.is_empty() {
        String::new()
    } else {
        let mut output = entries.join("\n\n");
        output.push('\n');
        output
    }
}
