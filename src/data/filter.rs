// ============================================================
// Layer 4 — Match Filter
// ============================================================
// Builds the candidate pool from the (already shuffled) dataset.
//
// A record is a candidate iff:
//   1. its id is not in the labeled-id set, AND
//   2. some search field contains an include term, AND
//   3. no search field contains an exclude term.
//
// With no include terms nothing matches (see matcher.rs), so
// an empty include set always yields an empty pool.
//
// Every search field and the id field are looked up on every
// unlabeled record, whether or not an earlier field already
// decided the outcome. A record missing any of them aborts
// the whole filter with a schema error: the dataset is
// expected to share one schema and we would rather stop than
// quietly review a subset.
//
// The filter is a pure function of its inputs. It keeps the
// input order and has no randomness; shuffling happens once,
// before the first filter, in shuffle.rs.

use anyhow::Result;
use std::collections::HashSet;

use crate::data::matcher::TermMatcher;
use crate::domain::record::Record;

/// The fixed part of the filter: which fields to scan and
/// which field identifies a record.
#[derive(Debug, Clone)]
pub struct MatchFilter {
    search_fields: Vec<String>,
    id_field:      String,
}

impl MatchFilter {
    pub fn new(search_fields: Vec<String>, id_field: impl Into<String>) -> Self {
        Self {
            search_fields,
            id_field: id_field.into(),
        }
    }

    /// Compute the candidate pool, preserving `dataset` order.
    pub fn candidates(
        &self,
        dataset:     &[Record],
        includes:    &[String],
        excludes:    &[String],
        labeled_ids: &HashSet<String>,
    ) -> Result<Vec<Record>> {
        let include = TermMatcher::new(includes);
        let exclude = TermMatcher::new(excludes);

        let mut pool = Vec::new();
        for record in dataset {
            if labeled_ids.contains(&record.id_key(&self.id_field)?) {
                continue;
            }

            let mut included = false;
            let mut excluded = false;
            for field in &self.search_fields {
                let value = record.text(field)?;
                included |= include.matches(&value);
                excluded |= exclude.matches(&value);
            }

            if included && !excluded {
                pool.push(record.clone());
            }
        }

        tracing::debug!(
            "Filter kept {} of {} records ({} includes, {} excludes, {} labeled)",
            pool.len(),
            dataset.len(),
            includes.len(),
            excludes.len(),
            labeled_ids.len(),
        );
        Ok(pool)
    }

    /// Collect the id keys of already labeled records.
    pub fn labeled_ids(&self, labeled: &[Record]) -> Result<HashSet<String>> {
        let mut ids = HashSet::with_capacity(labeled.len());
        for record in labeled {
            ids.insert(record.id_key(&self.id_field)?);
        }
        Ok(ids)
    }

    pub fn id_field(&self) -> &str {
        &self.id_field
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AnnotateError;
    use serde_json::{json, Value};

    fn records(values: Vec<Value>) -> Vec<Record> {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Record::from_value(v, i + 1).unwrap())
            .collect()
    }

    fn sample() -> Vec<Record> {
        records(vec![
            json!({"id": 1, "text": "abc"}),
            json!({"id": 2, "text": "bcd"}),
            json!({"id": 3, "text": "cde"}),
        ])
    }

    fn terms(t: &[&str]) -> Vec<String> {
        t.iter().map(|s| s.to_string()).collect()
    }

    fn text_filter() -> MatchFilter {
        MatchFilter::new(terms(&["text"]), "id")
    }

    #[test]
    fn test_include_and_exclude() {
        let pool = text_filter()
            .candidates(&sample(), &terms(&["b"]), &terms(&["d"]), &HashSet::new())
            .unwrap();
        assert_eq!(pool, records(vec![json!({"id": 1, "text": "abc"})]));
    }

    #[test]
    fn test_empty_includes_yield_empty_pool() {
        let pool = text_filter()
            .candidates(&sample(), &[], &[], &HashSet::new())
            .unwrap();
        assert!(pool.is_empty());
    }

    #[test]
    fn test_labeled_ids_never_returned() {
        let filter = text_filter();
        let labeled = records(vec![json!({"id": 1, "text": "abc", "label": "X"})]);
        let ids = filter.labeled_ids(&labeled).unwrap();

        let pool = filter
            .candidates(&sample(), &terms(&["c"]), &[], &ids)
            .unwrap();
        let got: Vec<String> = pool.iter().map(|r| r.id_key("id").unwrap()).collect();
        assert_eq!(got, vec!["2", "3"]);
    }

    #[test]
    fn test_any_search_field_can_include_and_any_can_exclude() {
        let data = records(vec![
            json!({"id": 1, "title": "rust", "body": "fine"}),
            json!({"id": 2, "title": "go",   "body": "rust too"}),
            json!({"id": 3, "title": "rust", "body": "spam"}),
        ]);
        let filter = MatchFilter::new(terms(&["title", "body"]), "id");
        let pool = filter
            .candidates(&data, &terms(&["RUST"]), &terms(&["spam"]), &HashSet::new())
            .unwrap();
        let got: Vec<String> = pool.iter().map(|r| r.id_key("id").unwrap()).collect();
        assert_eq!(got, vec!["1", "2"]);
    }

    #[test]
    fn test_preserves_input_order() {
        let data = records(vec![
            json!({"id": "c", "text": "x"}),
            json!({"id": "a", "text": "x"}),
            json!({"id": "b", "text": "x"}),
        ]);
        let pool = text_filter()
            .candidates(&data, &terms(&["x"]), &[], &HashSet::new())
            .unwrap();
        assert_eq!(pool, data);
    }

    #[test]
    fn test_idempotent() {
        let filter = text_filter();
        let data = sample();
        let a = filter.candidates(&data, &terms(&["c"]), &terms(&["e"]), &HashSet::new()).unwrap();
        let b = filter.candidates(&data, &terms(&["c"]), &terms(&["e"]), &HashSet::new()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_search_field_is_fatal() {
        let data = records(vec![
            json!({"id": 1, "text": "abc"}),
            json!({"id": 2, "body": "abc"}),
        ]);
        let err = text_filter()
            .candidates(&data, &terms(&["a"]), &[], &HashSet::new())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnnotateError>(),
            Some(AnnotateError::MissingField { field, .. }) if field == "text"
        ));
    }

    #[test]
    fn test_missing_id_field_is_fatal() {
        let data = records(vec![json!({"text": "abc"})]);
        assert!(text_filter()
            .candidates(&data, &terms(&["a"]), &[], &HashSet::new())
            .is_err());
    }
}
