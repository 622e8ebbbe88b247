//! Property-based tests for filtering, grouping and rendering.

use chatgrep::prelude::*;
use proptest::prelude::*;

fn author_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{0,8}"
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9 .!?-]{0,16}"
}

fn records_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((author_strategy(), text_strategy()), 0..20)
}

fn to_content(records: &[(String, String)]) -> String {
    records
        .iter()
        .map(|(author, text)| format!(r#"{{"author": "{author}", "text": "{text}"}}"#))
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #[test]
    fn file_matches_are_sorted_and_unique(lines in prop::collection::vec("[a-z ]{0,6}", 0..30)) {
        let block = FileMatches::new("f.json", lines.clone());

        prop_assert!(block.lines.windows(2).all(|w| w[0] < w[1]));
        for line in &lines {
            prop_assert!(block.lines.contains(line));
        }
    }

    #[test]
    fn scan_finds_every_well_formed_record(records in records_strategy()) {
        let content = to_content(&records);
        let (lines, found) = Searcher::new().scan(&content, &AuthorFilter::new(""));

        prop_assert_eq!(found, records.len());
        let expected: Vec<String> = records
            .iter()
            .map(|(a, t)| format!("{a} - {t}"))
            .collect();
        prop_assert_eq!(lines, expected);
    }

    #[test]
    fn filtered_lines_are_subset_with_matching_author(
        records in records_strategy(),
        query in "[a-z]{0,3}",
    ) {
        let content = to_content(&records);
        let (all, _) = Searcher::new().scan(&content, &AuthorFilter::new(""));
        let (some, _) = Searcher::new().scan(&content, &AuthorFilter::new(query.as_str()));

        prop_assert!(some.len() <= all.len());
        for line in &some {
            prop_assert!(all.contains(line));
        }
        let expected = records.iter().filter(|(a, _)| a.contains(query.as_str())).count();
        prop_assert_eq!(some.len(), expected);
    }

    #[test]
    fn empty_query_equals_no_filter(records in records_strategy()) {
        let content = to_content(&records);
        let pattern = RecordPattern::new();
        let all: Vec<Record> = pattern.records(&content).collect();
        let filtered = apply_filter(all.clone(), &AuthorFilter::new(""));
        prop_assert_eq!(all, filtered);
    }

    #[test]
    fn ignore_case_is_superset(records in records_strategy(), query in "[a-zA-Z]{1,3}") {
        let content = to_content(&records);
        let searcher = Searcher::new();
        let (strict, _) = searcher.scan(&content, &AuthorFilter::new(query.as_str()));
        let (loose, _) = searcher.scan(
            &content,
            &AuthorFilter::new(query.as_str()).ignore_case(true),
        );
        prop_assert!(strict.len() <= loose.len());
    }

    #[test]
    fn render_has_one_block_per_file(
        files in prop::collection::vec(
            prop::collection::vec("[a-z]{1,5} - [a-z]{0,5}", 1..5),
            0..6,
        ),
    ) {
        let mut results = ResultSet::new();
        for (i, lines) in files.iter().enumerate() {
            results.insert(format!("chat{i}.json"), lines.clone());
        }

        let report = results.render_text();
        prop_assert_eq!(report.matches("In file ").count(), files.len());
        prop_assert_eq!(report.is_empty(), files.is_empty());
        if !files.is_empty() {
            prop_assert!(report.ends_with("\n\n"));
        }
    }
}
