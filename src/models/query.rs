//! Lookup query model and request-URL construction.

use serde::{Deserialize, Serialize};

/// Errors raised while building a lookup query
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The query value was empty after trimming
    #[error("query value must not be empty")]
    EmptyValue,
}

/// The field a lookup query targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryField {
    /// Exact DOI lookup (`{base}/{doi}`)
    Doi,
    /// Fielded search (`{base}?query.{field}={value}`). The field name is
    /// passed through verbatim; unknown fields are left to the API to reject.
    Field(String),
}

/// A single lookup request against the works API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkQuery {
    /// Field the query targets
    pub field: QueryField,

    /// Query value, trimmed. Non-empty.
    pub value: String,
}

impl WorkQuery {
    /// Create a query from raw CLI input.
    ///
    /// The field name is trimmed and lowercased; the value is trimmed.
    /// An empty value is rejected before any network traffic happens.
    pub fn new(field: &str, value: &str) -> Result<Self, QueryError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(QueryError::EmptyValue);
        }

        let field = match field.trim().to_lowercase().as_str() {
            "doi" => QueryField::Doi,
            other => QueryField::Field(other.to_string()),
        };

        Ok(Self {
            field,
            value: value.to_string(),
        })
    }

    /// Build the request URL for this query against the given API base.
    ///
    /// DOI values are appended verbatim, with no percent-encoding applied.
    pub fn target_url(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match &self.field {
            QueryField::Doi => format!("{}/{}", base, self.value),
            QueryField::Field(name) => format!("{}?query.{}={}", base, name, self.value),
        }
    }
}
