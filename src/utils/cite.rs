//! Citation rendering: labeled metadata block and BibTeX.

use crate::models::Work;
use serde::Serialize;
use std::fmt::Write as _;

/// Width of the label column in the text block
const LABEL_WIDTH: usize = 15;

/// Width of the horizontal rules bounding the text block
const RULE_WIDTH: usize = 40;

/// Display-ready metadata extracted from a work, defaults applied.
///
/// Assembled fresh per record; this is also the JSON output shape.
#[derive(Debug, Clone, Serialize)]
pub struct WorkMetadata {
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub volume: String,
    pub pages: String,
    pub year: String,
    pub url: String,
    pub doi: String,
    pub publisher: String,
}

impl WorkMetadata {
    /// Extract the display fields from a work
    pub fn from_work(work: &Work) -> Self {
        Self {
            title: work.primary_title().to_string(),
            authors: display_authors(work),
            journal: work.journal().to_string(),
            volume: field_or_na(work.volume.as_deref()),
            pages: field_or_na(work.page.as_deref()),
            year: work
                .year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            url: field_or_na(work.url.as_deref()),
            doi: field_or_na(work.doi.as_deref()),
            publisher: field_or_na(work.publisher.as_deref()),
        }
    }

    /// Label/value pairs in block display order
    pub fn labeled(&self) -> [(&'static str, &str); 9] {
        [
            ("Title", self.title.as_str()),
            ("Authors", self.authors.as_str()),
            ("Journal", self.journal.as_str()),
            ("Volume", self.volume.as_str()),
            ("Pages", self.pages.as_str()),
            ("Year", self.year.as_str()),
            ("URL", self.url.as_str()),
            ("DOI", self.doi.as_str()),
            ("Publisher", self.publisher.as_str()),
        ]
    }
}

fn field_or_na(value: Option<&str>) -> String {
    value.unwrap_or("N/A").to_string()
}

/// Authors as `"given family"` per contributor, joined with `", "`.
/// A contributor missing either name part displays as `"N/A"`.
pub fn display_authors(work: &Work) -> String {
    work.author
        .iter()
        .map(|author| author.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Authors as `"family, given"` per contributor, joined with `" and "`
fn bibtex_authors(work: &Work) -> String {
    work.author
        .iter()
        .map(|author| author.bibtex_name())
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Render the labeled text block bounded by dash rules
pub fn format_block(work: &Work) -> String {
    let metadata = WorkMetadata::from_work(work);
    let rule = "-".repeat(RULE_WIDTH);

    let mut out = String::new();
    out.push_str("Article Details:\n");
    out.push_str(&rule);
    out.push('\n');
    for (label, value) in metadata.labeled() {
        let _ = writeln!(out, "{:<width$}: {}", label, value, width = LABEL_WIDTH);
    }
    out.push_str(&rule);
    out
}

/// Render a BibTeX `@article` entry.
///
/// The citation key is the DOI with `/` replaced by `_`; fields are
/// emitted in fixed order (author, title, journal, year, volume, pages,
/// doi).
pub fn format_bibtex(work: &Work) -> String {
    let metadata = WorkMetadata::from_work(work);
    let key = metadata.doi.replace('/', "_");

    let fields = [
        ("author", bibtex_authors(work)),
        ("title", metadata.title),
        ("journal", metadata.journal),
        ("year", metadata.year),
        ("volume", metadata.volume),
        ("pages", metadata.pages),
        ("doi", metadata.doi),
    ];

    let mut out = format!("@article{{{},\n", key);
    let body = fields
        .iter()
        .map(|(name, value)| format!("  {} = {{{}}}", name, value))
        .collect::<Vec<_>>()
        .join(",\n");
    out.push_str(&body);
    out.push_str("\n}");
    out
}

/// Render the extracted metadata as pretty-printed JSON
pub fn format_json(work: &Work) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&WorkMetadata::from_work(work))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_work() -> Work {
        serde_json::from_str(
            r#"{
                "DOI": "10.1000/xyz123",
                "URL": "https://doi.org/10.1000/xyz123",
                "title": ["Sample"],
                "author": [{"given": "A", "family": "B"}],
                "container-title": ["J"],
                "volume": "1",
                "page": "1-2",
                "publisher": "Pub",
                "published-print": {"date-parts": [[2021]]}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_block_contains_all_fields() {
        let block = format_block(&sample_work());

        assert!(block.starts_with("Article Details:\n"));
        assert!(block.contains(&"-".repeat(40)));
        assert!(block.contains("Title          : Sample"));
        assert!(block.contains("Authors        : A B"));
        assert!(block.contains("Journal        : J"));
        assert!(block.contains("Volume         : 1"));
        assert!(block.contains("Pages          : 1-2"));
        assert!(block.contains("Year           : 2021"));
        assert!(block.contains("DOI            : 10.1000/xyz123"));
    }

    #[test]
    fn test_block_defaults_for_empty_work() {
        let work: Work = serde_json::from_str("{}").unwrap();
        let block = format_block(&work);

        assert!(block.contains("Title          : No Title"));
        assert!(block.contains("Journal        : N/A"));
        assert!(block.contains("Year           : N/A"));
        assert!(block.contains("DOI            : N/A"));
    }

    #[test]
    fn test_partial_author_displays_na() {
        let work: Work = serde_json::from_str(
            r#"{"author": [{"given": "A", "family": "B"}, {"given": "C"}]}"#,
        )
        .unwrap();

        assert_eq!(display_authors(&work), "A B, N/A");
    }

    #[test]
    fn test_bibtex_key_replaces_slashes() {
        let work: Work = serde_json::from_str(r#"{"DOI": "10.1000/abc"}"#).unwrap();
        assert!(format_bibtex(&work).starts_with("@article{10.1000_abc,"));
    }

    #[test]
    fn test_bibtex_entry_layout() {
        let bibtex = format_bibtex(&sample_work());

        let expected = "@article{10.1000_xyz123,\n  author = {B, A},\n  title = {Sample},\n  journal = {J},\n  year = {2021},\n  volume = {1},\n  pages = {1-2},\n  doi = {10.1000/xyz123}\n}";
        assert_eq!(bibtex, expected);
    }

    #[test]
    fn test_bibtex_joins_authors_with_and() {
        let work: Work = serde_json::from_str(
            r#"{"author": [
                {"given": "A", "family": "B"},
                {"given": "C", "family": "D"}
            ]}"#,
        )
        .unwrap();

        assert!(format_bibtex(&work).contains("author = {B, A and D, C}"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let json = format_json(&sample_work()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Sample");
        assert_eq!(value["year"], "2021");
        assert_eq!(value["doi"], "10.1000/xyz123");
    }
}
