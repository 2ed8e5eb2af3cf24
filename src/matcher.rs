//! Matcher: substring search and symptom keyword matching.
//!
//! Two read-only operations over a `CatalogStore` snapshot:
//! - `search`: every record whose name, usage or raw symptom text contains
//!   the query, in catalog order.
//! - `match_symptom`: one record chosen by a `SymptomMatcher` strategy from
//!   the records whose symptom tokens appear in a chat message.
//!
//! Case policy: search compares exactly unless configured with
//! `CaseFolding::Insensitive`; chat matching always lower-cases both the
//! message and the symptom tokens.

use std::str::FromStr;
use std::sync::Arc;

use crate::catalog::CatalogStore;
use crate::models::MedicineRecord;

/// How `search` compares the query with record text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFolding {
    #[default]
    Exact,
    Insensitive,
}

impl CaseFolding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Insensitive => "insensitive",
        }
    }
}

impl FromStr for CaseFolding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" | "sensitive" => Ok(Self::Exact),
            "insensitive" | "fold" => Ok(Self::Insensitive),
            other => Err(format!("unknown case folding '{other}'")),
        }
    }
}

/// Selects the chat recommendation among catalog records.
///
/// `message` is already lower-cased. Implementations compare it with
/// `SymptomList::folded()`.
pub trait SymptomMatcher: Send + Sync {
    fn select<'a>(
        &self,
        records: &'a [MedicineRecord],
        message: &str,
    ) -> Option<&'a MedicineRecord>;
}

/// First record, in catalog order, with any symptom token inside the message.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMatch;

impl SymptomMatcher for FirstMatch {
    fn select<'a>(
        &self,
        records: &'a [MedicineRecord],
        message: &str,
    ) -> Option<&'a MedicineRecord> {
        records.iter().find(|r| mentions_symptom(r, message))
    }
}

/// Whether any of the record's (folded) symptom tokens occurs in `message`.
pub fn mentions_symptom(record: &MedicineRecord, message: &str) -> bool {
    record
        .symptoms
        .folded()
        .iter()
        .any(|token| message.contains(token.as_str()))
}

/// Whether `query` occurs in the record's name, usage or raw symptom text.
pub fn record_contains(record: &MedicineRecord, query: &str, case: CaseFolding) -> bool {
    let fields = [
        record.name.as_str(),
        record.usage.as_str(),
        record.symptoms.raw(),
    ];
    match case {
        CaseFolding::Exact => fields.iter().any(|f| f.contains(query)),
        CaseFolding::Insensitive => {
            let query = query.to_lowercase();
            fields.iter().any(|f| f.to_lowercase().contains(&query))
        }
    }
}

pub struct Matcher {
    catalog: Arc<CatalogStore>,
    strategy: Box<dyn SymptomMatcher>,
    search_case: CaseFolding,
}

impl Matcher {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self {
            catalog,
            strategy: Box::new(FirstMatch),
            search_case: CaseFolding::default(),
        }
    }

    /// Replace the chat selection strategy.
    pub fn with_strategy(mut self, strategy: impl SymptomMatcher + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn with_search_case(mut self, case: CaseFolding) -> Self {
        self.search_case = case;
        self
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn search_case(&self) -> CaseFolding {
        self.search_case
    }

    /// Records containing `query`, in catalog order. An empty query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&MedicineRecord> {
        self.catalog
            .all()
            .iter()
            .filter(|r| record_contains(r, query, self.search_case))
            .collect()
    }

    /// Record recommended for a free-text chat message, if any.
    pub fn match_symptom(&self, message: &str) -> Option<&MedicineRecord> {
        let message = message.to_lowercase();
        self.strategy.select(self.catalog.all(), &message)
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("records", &self.catalog.len())
            .field("search_case", &self.search_case)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::seed_records;
    use crate::models::SymptomList;

    fn seeded_matcher() -> Matcher {
        Matcher::new(Arc::new(CatalogStore::from_records(seed_records())))
    }

    fn names(records: &[&MedicineRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    fn record(id: i64, name: &str, usage: &str, symptoms: &str) -> MedicineRecord {
        MedicineRecord {
            id,
            name: name.into(),
            dosage: "1 tablet".into(),
            expiry_months: 12,
            min_age: 12,
            usage: usage.into(),
            symptoms: SymptomList::parse(symptoms),
        }
    }

    // -- search ------------------------------------------------------------

    #[test]
    fn empty_query_returns_every_record_in_order() {
        let matcher = seeded_matcher();
        let all = matcher.search("");
        assert_eq!(all.len(), matcher.catalog().len());
        let ids: Vec<i64> = all.iter().map(|r| r.id).collect();
        let expected: Vec<i64> = matcher.catalog().all().iter().map(|r| r.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn pain_matches_usage_and_symptom_text_in_seed_order() {
        let matcher = seeded_matcher();
        let found = names(&matcher.search("pain"));
        let para = found.iter().position(|n| n == "Paracetamol").unwrap();
        let ibu = found.iter().position(|n| n == "Ibuprofen").unwrap();
        assert!(para < ibu);
    }

    #[test]
    fn search_results_always_contain_the_query() {
        let matcher = seeded_matcher();
        for q in ["pain", "cough", "acid", "Vitamin", "e", "xyz", "daily"] {
            for r in matcher.search(q) {
                assert!(
                    r.name.contains(q) || r.usage.contains(q) || r.symptoms.raw().contains(q),
                    "{} returned for {q}",
                    r.name
                );
            }
        }
    }

    #[test]
    fn search_excludes_only_non_matching_records() {
        let matcher = seeded_matcher();
        let q = "infection";
        let found: Vec<i64> = matcher.search(q).iter().map(|r| r.id).collect();
        for r in matcher.catalog().all() {
            let hit = record_contains(r, q, CaseFolding::Exact);
            assert_eq!(found.contains(&r.id), hit, "{}", r.name);
        }
    }

    #[test]
    fn search_is_case_sensitive_by_default() {
        let matcher = seeded_matcher();
        assert!(matcher.search("paracetamol").is_empty());
        assert_eq!(names(&matcher.search("Paracetamol")), vec!["Paracetamol"]);
    }

    #[test]
    fn insensitive_search_folds_both_sides() {
        let matcher = seeded_matcher().with_search_case(CaseFolding::Insensitive);
        assert_eq!(names(&matcher.search("PARACETAMOL")), vec!["Paracetamol"]);
    }

    #[test]
    fn search_spans_separator_in_raw_symptom_text() {
        let matcher = seeded_matcher();
        assert_eq!(names(&matcher.search("fever, headache")), vec!["Paracetamol"]);
    }

    #[test]
    fn unmatched_query_is_empty() {
        assert!(seeded_matcher().search("unobtainium").is_empty());
    }

    #[test]
    fn full_symptom_token_finds_loperamide() {
        let matcher = seeded_matcher();
        assert_eq!(names(&matcher.search("diarrhea")), vec!["Loperamide"]);
    }

    // -- match_symptom -----------------------------------------------------

    #[test]
    fn headache_message_recommends_paracetamol() {
        let matcher = seeded_matcher();
        let med = matcher.match_symptom("I have a headache").unwrap();
        assert_eq!(med.name, "Paracetamol");
    }

    #[test]
    fn unrelated_message_has_no_match() {
        assert!(seeded_matcher().match_symptom("unrelated text").is_none());
    }

    #[test]
    fn empty_message_has_no_match() {
        assert!(seeded_matcher().match_symptom("").is_none());
    }

    #[test]
    fn message_is_lower_cased_before_matching() {
        let matcher = seeded_matcher();
        let med = matcher.match_symptom("HEADACHE since morning").unwrap();
        assert_eq!(med.name, "Paracetamol");
    }

    #[test]
    fn diarrhea_message_recommends_loperamide() {
        let matcher = seeded_matcher();
        let med = matcher.match_symptom("diarrhea").unwrap();
        assert_eq!(med.name, "Loperamide");
    }

    #[test]
    fn first_seeded_record_wins_on_overlap() {
        // "joint pain" is listed by Ibuprofen and Volini Spray.
        let matcher = seeded_matcher();
        let med = matcher.match_symptom("my joint pain is bad").unwrap();
        assert_eq!(med.name, "Ibuprofen");
    }

    #[test]
    fn upper_case_stored_tokens_still_match() {
        let catalog = CatalogStore::from_records(vec![record(1, "Acme", "x", "GERD")]);
        let matcher = Matcher::new(Arc::new(catalog));
        assert_eq!(matcher.match_symptom("gerd flare").unwrap().name, "Acme");
    }

    #[test]
    fn record_without_symptoms_never_matches_chat() {
        let catalog = CatalogStore::from_records(vec![record(1, "Blank", "x", "")]);
        let matcher = Matcher::new(Arc::new(catalog));
        assert!(matcher.match_symptom("anything at all").is_none());
    }

    struct LastMatch;

    impl SymptomMatcher for LastMatch {
        fn select<'a>(
            &self,
            records: &'a [MedicineRecord],
            message: &str,
        ) -> Option<&'a MedicineRecord> {
            records.iter().rev().find(|r| mentions_symptom(r, message))
        }
    }

    #[test]
    fn strategy_can_be_replaced() {
        let matcher = seeded_matcher().with_strategy(LastMatch);
        let med = matcher.match_symptom("my joint pain is bad").unwrap();
        assert_eq!(med.name, "Volini Spray");
    }

    #[test]
    fn case_folding_parses_from_config_strings() {
        assert_eq!("exact".parse::<CaseFolding>().unwrap(), CaseFolding::Exact);
        assert_eq!(
            " Insensitive ".parse::<CaseFolding>().unwrap(),
            CaseFolding::Insensitive
        );
        assert!("loose".parse::<CaseFolding>().is_err());
    }
}
