//! Property tests for citekit-core
//!
//! The conversion core must be total: any combination of field content has
//! a defined key, BibTeX rendering and RIS rendering. These properties run
//! the pipeline over arbitrary strings to pin that down.

use citekit_core::encoder::{to_bibtex, to_ris};
use citekit_core::types::{Name, Source};
use proptest::prelude::*;

prop_compose! {
    fn arb_name()(
        first in "[^\\r\\n]*",
        middle in "[^\\r\\n]*",
        last in "[^\\r\\n]*",
        suffix in "[^\\r\\n]*",
    ) -> Name {
        Name { first, middle, last, suffix }
    }
}

prop_compose! {
    fn arb_source()(
        source_type in "[^\\r\\n]*",
        title in "[^\\r\\n]*",
        year in "[^\\r\\n]*",
        pages in "[^\\r\\n]*",
        publisher in "[^\\r\\n]*",
        authors in proptest::collection::vec(arb_name(), 0..4),
        editors in proptest::collection::vec(arb_name(), 0..3),
    ) -> Source {
        Source {
            source_type,
            title,
            year,
            pages,
            publisher,
            authors,
            editors,
            ..Source::default()
        }
    }
}

proptest! {
    #[test]
    fn citation_key_is_total_and_lowercase(source in arb_source()) {
        let key = source.citation_key();
        prop_assert!(!key.is_empty());
        prop_assert!(key.chars().all(|c| !c.is_uppercase()));
    }

    #[test]
    fn entry_types_always_resolve(source in arb_source()) {
        prop_assert!(!source.bibtex_entry_type().is_empty());
        prop_assert!(!source.ris_entry_type().is_empty());
    }

    #[test]
    fn serializers_are_total(sources in proptest::collection::vec(arb_source(), 0..5)) {
        let bib = to_bibtex(&sources);
        let ris = to_ris(&sources);

        if sources.is_empty() {
            prop_assert_eq!(bib, "");
            prop_assert_eq!(ris, "");
        } else {
            prop_assert!(bib.ends_with('\n'));
            prop_assert!(ris.ends_with('\n'));
            // Every record opens with a TY line; TY is never empty.
            prop_assert_eq!(ris.lines().filter(|l| l.starts_with("TY  - ")).count(), sources.len());
        }
    }

    #[test]
    fn ris_rendering_never_dangles(name in arb_name()) {
        let rendered = name.as_ris();
        prop_assert!(!rendered.starts_with(',') && !rendered.starts_with(' '));
        prop_assert!(!rendered.ends_with(',') && !rendered.ends_with(' '));
    }

    #[test]
    fn bibtex_rendering_is_trimmed(name in arb_name()) {
        let rendered = name.as_bibtex();
        prop_assert_eq!(rendered.trim(), rendered.as_str());
    }

    #[test]
    fn numeric_page_ranges_split(start in 1u32..10_000, end in 1u32..10_000) {
        let source = Source {
            pages: format!("{start}-{end}"),
            ..Source::default()
        };
        let ris = to_ris(&[source]);
        let sp = format!("SP  - {}", start);
        let ep = format!("EP  - {}", end);
        prop_assert!(ris.contains(&sp));
        prop_assert!(ris.contains(&ep));
    }

    #[test]
    fn plain_page_numbers_emit_no_ep(pages in "[0-9]{1,4}") {
        let source = Source {
            pages: pages.clone(),
            ..Source::default()
        };
        let ris = to_ris(&[source]);
        let sp = format!("SP  - {}", pages);
        prop_assert!(ris.contains(&sp));
        prop_assert!(!ris.contains("EP  - "));
    }
}
