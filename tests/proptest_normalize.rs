//! Property-based tests for line normalization and the document format.
//!
//! Ensures arbitrary input never panics, and that canonical output is a
//! fixed point of normalization.

use adstxt_merge::aggregate::{Aggregator, MemorySources};
use adstxt_merge::parsers::{LineOutcome, PriorSnapshot, classify_line, normalize};
use indexmap::IndexMap;
use proptest::prelude::*;
use regex::Regex;
use std::path::PathBuf;

const CANONICAL: &str =
    r"^[a-z0-9.-]+, [^,]+, (DIRECT|RESELLER)(, ([a-z0-9]{9}|[a-z0-9]{16}))?$";

fn domain() -> impl Strategy<Value = String> {
    "[A-Za-z0-9.-]{1,20}"
}

fn publisher_id() -> impl Strategy<Value = String> {
    "[A-Za-z0-9-]{1,12}"
}

fn relationship() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("DIRECT".to_string()),
        Just("direct".to_string()),
        Just("Reseller".to_string()),
        Just("RESELLER".to_string()),
    ]
}

fn cert() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[A-Fa-f0-9]{9}".prop_map(Some),
        "[A-Fa-f0-9]{16}".prop_map(Some),
        "[a-z0-9!_-]{1,20}".prop_map(Some),
    ]
}

fn source_line() -> impl Strategy<Value = String> {
    (domain(), publisher_id(), relationship(), cert(), " {0,2}").prop_map(
        |(domain, publisher, relationship, cert, pad)| match cert {
            Some(cert) => format!("{pad}{domain},{pad}{publisher} ,{relationship},{pad}{cert}"),
            None => format!("{domain},{pad}{publisher},{pad}{relationship}{pad}"),
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn normalize_doesnt_panic(s in "\\PC{0,200}") {
        let mut invalid = Vec::new();
        let _ = normalize(&s, "Any", &mut invalid);
        prop_assert!(invalid.len() <= 1);
    }

    #[test]
    fn accepted_lines_are_canonical(line in source_line()) {
        let pattern = Regex::new(CANONICAL).unwrap();
        let mut invalid = Vec::new();
        if let Some(entry) = normalize(&line, "Any", &mut invalid) {
            prop_assert!(pattern.is_match(entry.as_str()), "not canonical: {:?}", entry);
        }
    }

    #[test]
    fn canonical_output_is_a_fixed_point(line in source_line()) {
        let mut invalid = Vec::new();
        if let Some(entry) = normalize(&line, "Any", &mut invalid) {
            let mut again = Vec::new();
            let second = normalize(entry.as_str(), "Any", &mut again);
            prop_assert_eq!(second.as_ref(), Some(&entry));
            prop_assert!(again.is_empty());
        }
    }

    #[test]
    fn stripped_cert_is_reported_once(line in source_line()) {
        let mut invalid = Vec::new();
        let entry = normalize(&line, "Any", &mut invalid);
        match classify_line(&line) {
            LineOutcome::CertStripped { .. } => {
                prop_assert_eq!(invalid.len(), 1);
                prop_assert!(entry.is_some_and(|e| e.cert_id().is_none()));
            }
            _ => prop_assert!(invalid.is_empty()),
        }
    }

    #[test]
    fn prior_snapshot_doesnt_panic(s in "\\PC{0,300}") {
        let snapshot = PriorSnapshot::parse(&s);
        for network in snapshot.networks() {
            prop_assert!(snapshot.entries(network).is_some());
        }
    }

    #[test]
    fn rendered_document_reads_back(
        lines_a in prop::collection::vec(source_line(), 0..8),
        lines_b in prop::collection::vec(source_line(), 0..8),
    ) {
        let sources = MemorySources::new()
            .with_file("a.txt", lines_a.join("\n"))
            .with_file("b.txt", lines_b.join("\n"));
        let networks: IndexMap<String, PathBuf> = [("Alpha", "a.txt"), ("Beta", "b.txt")]
            .into_iter()
            .map(|(n, p)| (n.to_string(), PathBuf::from(p)))
            .collect();

        let result = Aggregator::new(&sources).aggregate(&networks);
        let snapshot = PriorSnapshot::parse(&result.render_document());

        for (name, contribution) in &result.networks {
            let read_back = snapshot.entries(name).unwrap();
            prop_assert_eq!(read_back.len(), contribution.entries.len());
            for entry in &contribution.entries {
                prop_assert!(read_back.contains(entry.as_str()));
            }
        }
    }
}
