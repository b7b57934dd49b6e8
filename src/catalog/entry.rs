use serde::{Deserialize, Deserializer, Serialize};

/// One drug/dosage record of the catalog.
///
/// Accepts both `description`/`code` and the Z-Index sample file's
/// `prk_description`/`prk_code` field names. Codes stored as JSON integers
/// are normalized to strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(alias = "prk_description")]
    pub description: String,
    #[serde(alias = "prk_code", deserialize_with = "code_from_string_or_number")]
    pub code: String,
}

impl CatalogEntry {
    pub fn new(description: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            code: code.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
    Text(String),
    Number(u64),
}

fn code_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawCode::deserialize(deserializer)? {
        RawCode::Text(text) => text,
        RawCode::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod entry_tests;
