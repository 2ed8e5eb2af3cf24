use serde::ser::{Serialize, Serializer};

/// Separator used by the stored `symptoms_treated` column.
pub const SYMPTOM_SEPARATOR: &str = ", ";

/// One catalog entry as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineRecord {
    pub id: i64,
    pub name: String,
    pub dosage: String,
    pub expiry_months: u32,
    pub min_age: u32,
    pub usage: String,
    #[serde(rename = "symptomsTreated")]
    pub symptoms: SymptomList,
}

/// Symptom keywords for a medicine, split once when the record is loaded.
///
/// The raw delimited text is kept alongside the tokens because substring
/// search runs over the joined text, while chat matching runs per token.
/// A lower-cased copy of every token is precomputed for chat matching.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymptomList {
    raw: String,
    tokens: Vec<String>,
    folded: Vec<String>,
}

impl SymptomList {
    /// Split a stored symptom string on `", "`.
    ///
    /// Text without the separator becomes a single token. Empty tokens are
    /// dropped: an empty keyword would be a substring of every message.
    pub fn parse(raw: &str) -> Self {
        let tokens: Vec<String> = raw
            .split(SYMPTOM_SEPARATOR)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        let folded = tokens.iter().map(|t| t.to_lowercase()).collect();
        Self {
            raw: raw.to_string(),
            tokens,
            folded,
        }
    }

    /// Original delimited text, as stored.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Lower-cased tokens, index-aligned with `tokens()`.
    pub fn folded(&self) -> &[String] {
        &self.folded
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Serialize for SymptomList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.tokens)
    }
}
