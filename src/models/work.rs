//! Work model mirroring the CrossRef works response schema.

use serde::{Deserialize, Serialize};

/// Top-level response wrapper returned by the works API
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Response status; only `"ok"` is treated as success
    pub status: String,

    /// Response payload
    pub message: Message,
}

/// Response payload: either a candidate list (fielded search) or a single
/// work (DOI lookup).
///
/// A message without an `items` key IS the single record, so the list
/// variant must be tried first.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Message {
    /// Multi-item response from a fielded search
    List(WorkList),
    /// Single work from an exact DOI lookup
    Single(Box<Work>),
}

/// Candidate list carried by a search response
#[derive(Debug, Clone, Deserialize)]
pub struct WorkList {
    pub items: Vec<Work>,
}

/// One bibliographic work as returned by CrossRef.
///
/// Every key is optional in the wire format; the accessor methods apply the
/// display defaults so callers never deal with partial records directly.
#[derive(Debug, Clone, Deserialize)]
pub struct Work {
    #[serde(default)]
    pub title: Vec<String>,

    #[serde(default)]
    pub author: Vec<Author>,

    #[serde(rename = "container-title", default)]
    pub container_title: Vec<String>,

    pub volume: Option<String>,

    pub page: Option<String>,

    #[serde(rename = "DOI")]
    pub doi: Option<String>,

    #[serde(rename = "URL")]
    pub url: Option<String>,

    pub publisher: Option<String>,

    #[serde(rename = "published-print")]
    pub published_print: Option<PartialDate>,

    #[serde(rename = "published-online")]
    pub published_online: Option<PartialDate>,
}

/// One contributor entry on a work
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub given: Option<String>,
    pub family: Option<String>,
}

/// CrossRef partial date: nested date-parts, first element of the first
/// part is the year. Inner elements are nullable on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct PartialDate {
    #[serde(rename = "date-parts", default)]
    pub date_parts: Vec<Vec<Option<i64>>>,
}

impl PartialDate {
    /// Year component, if present
    pub fn year(&self) -> Option<i64> {
        self.date_parts
            .first()
            .and_then(|parts| parts.first())
            .copied()
            .flatten()
    }
}

impl Work {
    /// Primary title, or `"No Title"` when the work carries none
    pub fn primary_title(&self) -> &str {
        self.title.first().map(String::as_str).unwrap_or("No Title")
    }

    /// Journal name (first container title), or `"N/A"`
    pub fn journal(&self) -> &str {
        self.container_title
            .first()
            .map(String::as_str)
            .unwrap_or("N/A")
    }

    /// Publication year: print date first, online date as fallback.
    ///
    /// Presence is decided by option-ness, so a literal year 0 on the wire
    /// is reported as 0 rather than treated as absent.
    pub fn year(&self) -> Option<i64> {
        self.published_print
            .as_ref()
            .and_then(PartialDate::year)
            .or_else(|| self.published_online.as_ref().and_then(PartialDate::year))
    }
}

impl Author {
    /// Display name as `"given family"`; `"N/A"` unless both parts are set
    pub fn display_name(&self) -> String {
        match (&self.given, &self.family) {
            (Some(given), Some(family)) => format!("{} {}", given, family),
            _ => "N/A".to_string(),
        }
    }

    /// BibTeX name as `"family, given"`; `"N/A"` unless both parts are set
    pub fn bibtex_name(&self) -> String {
        match (&self.given, &self.family) {
            (Some(given), Some(family)) => format!("{}, {}", family, given),
            _ => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work_from_json(json: &str) -> Work {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_single_message_deserializes() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"status": "ok", "message": {"DOI": "10.1/x", "title": ["Only"]}}"#,
        )
        .unwrap();

        assert_eq!(envelope.status, "ok");
        match envelope.message {
            Message::Single(work) => assert_eq!(work.primary_title(), "Only"),
            Message::List(_) => panic!("expected single work"),
        }
    }

    #[test]
    fn test_list_message_deserializes() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"status": "ok", "message": {"items": [{"title": ["A"]}, {"title": ["B"]}]}}"#,
        )
        .unwrap();

        match envelope.message {
            Message::List(list) => assert_eq!(list.items.len(), 2),
            Message::Single(_) => panic!("expected candidate list"),
        }
    }

    #[test]
    fn test_title_and_journal_defaults() {
        let work = work_from_json("{}");
        assert_eq!(work.primary_title(), "No Title");
        assert_eq!(work.journal(), "N/A");

        let work = work_from_json(r#"{"title": ["T"], "container-title": ["J"]}"#);
        assert_eq!(work.primary_title(), "T");
        assert_eq!(work.journal(), "J");
    }

    #[test]
    fn test_year_prefers_print_date() {
        let work = work_from_json(
            r#"{
                "published-print": {"date-parts": [[2020, 5]]},
                "published-online": {"date-parts": [[2019, 12]]}
            }"#,
        );
        assert_eq!(work.year(), Some(2020));
    }

    #[test]
    fn test_year_falls_back_to_online_date() {
        let work = work_from_json(r#"{"published-online": {"date-parts": [[2021]]}}"#);
        assert_eq!(work.year(), Some(2021));
    }

    #[test]
    fn test_year_absent() {
        assert_eq!(work_from_json("{}").year(), None);
        // Null inside date-parts is absent, but a literal 0 is a real year
        let work = work_from_json(r#"{"published-print": {"date-parts": [[null]]}}"#);
        assert_eq!(work.year(), None);
        let work = work_from_json(r#"{"published-print": {"date-parts": [[0]]}}"#);
        assert_eq!(work.year(), Some(0));
    }

    #[test]
    fn test_author_names() {
        let complete = Author {
            given: Some("Ada".to_string()),
            family: Some("Lovelace".to_string()),
        };
        assert_eq!(complete.display_name(), "Ada Lovelace");
        assert_eq!(complete.bibtex_name(), "Lovelace, Ada");

        let partial = Author {
            given: Some("Ada".to_string()),
            family: None,
        };
        assert_eq!(partial.display_name(), "N/A");
        assert_eq!(partial.bibtex_name(), "N/A");
    }
}
