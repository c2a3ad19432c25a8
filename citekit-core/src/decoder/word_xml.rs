//! Word `Sources.xml` decoder implementation

use roxmltree::{Document, Node};

use crate::error::ParseError;
use crate::types::{Name, Source};
use std::io::Read;

/// Namespace used by Microsoft Word bibliography documents.
pub const BIBLIOGRAPHY_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/bibliography";

/// Decoder for Microsoft Word `Sources.xml` documents
pub struct WordXmlDecoder;

impl WordXmlDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WordXmlDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Decoder for WordXmlDecoder {
    fn decode(&self, reader: &mut dyn Read) -> Result<Vec<Source>, ParseError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| ParseError::ReadFailed(e.to_string()))?;
        parse_sources(&bytes)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["xml"]
    }

    fn supported_mime_types(&self) -> &[&str] {
        &["text/xml", "application/xml"]
    }
}

/// Parse Word `Sources.xml` bytes into source records, in document order.
///
/// A well-formed document that holds no `<b:Source>` records yields an
/// empty list; only bytes that cannot be read as XML are an error.
pub fn parse_sources(bytes: &[u8]) -> Result<Vec<Source>, ParseError> {
    let text =
        std::str::from_utf8(bytes).map_err(|e| ParseError::InvalidEncoding(e.to_string()))?;
    let text = text.trim_start_matches('\u{feff}');

    let doc = Document::parse(text).map_err(|e| ParseError::InvalidXml(e.to_string()))?;
    let root = resolve_root(&doc);

    Ok(root
        .children()
        .filter(|n| is_named(*n, "Source"))
        .map(parse_source)
        .collect())
}

/// Resolve the `Sources` container element in three explicit steps:
/// a root that is itself the container, else the first namespaced
/// `Sources` descendant (documents with stray wrapper elements), else
/// whatever root the parser produced.
fn resolve_root<'a, 'input>(doc: &'a Document<'input>) -> Node<'a, 'input> {
    let root = doc.root_element();
    if root.tag_name().name() == "Sources" {
        return root;
    }
    root.descendants()
        .find(|n| is_named(*n, "Sources"))
        .unwrap_or(root)
}

fn is_named(node: Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(BIBLIOGRAPHY_NS)
}

/// Trimmed text of the first namespaced child with the given name, or "".
fn child_text(node: Node, name: &str) -> String {
    node.children()
        .find(|n| is_named(*n, name))
        .and_then(|n| n.text())
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn parse_source(node: Node) -> Source {
    let url = child_text(node, "URL");

    let mut source = Source {
        tag: child_text(node, "Tag"),
        source_type: child_text(node, "SourceType"),
        title: child_text(node, "Title"),
        year: child_text(node, "Year"),
        journal: child_text(node, "JournalName"),
        book_title: child_text(node, "BookTitle"),
        publisher: child_text(node, "Publisher"),
        city: child_text(node, "City"),
        volume: child_text(node, "Volume"),
        issue: child_text(node, "Number"),
        pages: child_text(node, "Pages"),
        doi: child_text(node, "DOI"),
        // Some producers misuse LCID for the link when URL is absent.
        url: if url.is_empty() {
            child_text(node, "LCID")
        } else {
            url
        },
        ..Source::default()
    };

    source.authors = person_names(node, "Author");
    source.authors.extend(corporate_names(node, "Author"));
    // Corporate editors do not occur in practice and are not collected.
    source.editors = person_names(node, "Editor");

    source
}

/// Collect person names below the nested contributor path
/// `<Role><Role><NameList><Person>` — Word repeats the role element name
/// one level down.
fn person_names(source: Node, role: &str) -> Vec<Name> {
    let mut names = Vec::new();
    for container in source.descendants().filter(|n| is_named(*n, role)) {
        for inner in container.children().filter(|n| is_named(*n, role)) {
            for list in inner.children().filter(|n| is_named(*n, "NameList")) {
                for person in list.children().filter(|n| is_named(*n, "Person")) {
                    names.push(Name {
                        first: child_text(person, "First"),
                        middle: child_text(person, "Middle"),
                        last: child_text(person, "Last"),
                        suffix: child_text(person, "Suffix"),
                    });
                }
            }
        }
    }
    names
}

/// Collect corporate names from `<Role><Role><Corporate>` elements.
fn corporate_names(source: Node, role: &str) -> Vec<Name> {
    let mut names = Vec::new();
    for container in source.descendants().filter(|n| is_named(*n, role)) {
        for inner in container.children().filter(|n| is_named(*n, role)) {
            for corp in inner.children().filter(|n| is_named(*n, "Corporate")) {
                names.push(Name::corporate(corp.text().unwrap_or_default().trim()));
            }
        }
    }
    names
}
