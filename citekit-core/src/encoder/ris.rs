//! RIS encoder implementation

use crate::error::ConversionError;
use crate::types::Source;
use std::io::Write;

/// Encoder for the RIS (`.ris`) tagged-line format
pub struct RisEncoder;

impl RisEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RisEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Encoder for RisEncoder {
    fn encode(&self, sources: &[Source], writer: &mut dyn Write) -> Result<(), ConversionError> {
        writer
            .write_all(to_ris(sources).as_bytes())
            .map_err(|e| ConversionError::WriteFailed(e.to_string()))
    }

    fn format_name(&self) -> &str {
        "RIS"
    }

    fn file_extension(&self) -> &str {
        "ris"
    }

    fn mime_type(&self) -> &str {
        "text/plain"
    }
}

/// Serialize sources as RIS tagged lines.
///
/// Each record opens with `TY`, emits one line per non-empty field, and
/// closes with an `ER` terminator followed by a blank separator line. The
/// joined output is end-trimmed, so the final terminator renders as
/// `ER  -` with no separator after it; a trailing newline is appended iff
/// at least one line was produced.
pub fn to_ris(sources: &[Source]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for source in sources {
        let mut add = |tag: &str, value: &str| {
            if !value.is_empty() {
                lines.push(format!("{}  - {}", tag, value));
            }
        };

        add("TY", source.ris_entry_type());
        for author in &source.authors {
            add("AU", &author.as_ris());
        }
        for editor in &source.editors {
            add("ED", &editor.as_ris());
        }
        add("TI", &source.title);
        add("PY", &source.year);
        add("JO", &source.journal);
        add("T2", &source.book_title);
        add("VL", &source.volume);
        add("IS", &source.issue);
        if source.pages.contains('-') {
            let mut split = source.pages.split('-');
            add("SP", split.next().unwrap_or(""));
            add("EP", split.next().unwrap_or(""));
        } else {
            add("SP", &source.pages);
        }
        add("DO", &source.doi);
        add("UR", &source.url);
        add("PB", &source.publisher);
        add("CY", &source.city);

        lines.push("ER  - ".to_string());
        lines.push(String::new());
    }

    if lines.is_empty() {
        String::new()
    } else {
        let mut output = lines.join("\n").trim_end().to_string();
        output.push('\n');
        output
    }
}
