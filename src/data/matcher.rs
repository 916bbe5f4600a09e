// ============================================================
// Layer 4 — Term Matcher
// ============================================================
// Decides whether one field value contains any of a set of
// terms. Matching is a case-insensitive substring test and
// nothing more: no tokenisation, no ranking, no fuzziness.
//
//   matches("Hello World", ["world"])  → true
//   matches("Hello World", ["xyz"])    → false
//   matches("Hello World", [])         → false   (empty set never matches)
//
// An empty *term* ("") is a substring of everything, so a
// set containing "" matches every value.

/// A term set with its terms lowercased once up front,
/// so filtering a large dataset does not re-lowercase them
/// for every record.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    lowered: Vec<String>,
}

impl TermMatcher {
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Self {
        Self {
            lowered: terms.iter().map(|t| t.as_ref().to_lowercase()).collect(),
        }
    }

    /// True iff at least one term occurs in `value`, ignoring case.
    pub fn matches(&self, value: &str) -> bool {
        if self.lowered.is_empty() {
            return false;
        }
        let value = value.to_lowercase();
        self.lowered.iter().any(|t| value.contains(t.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }
}

/// One-shot form of [`TermMatcher::matches`].
pub fn matches<S: AsRef<str>>(value: &str, terms: &[S]) -> bool {
    TermMatcher::new(terms).matches(value)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match() {
        assert!(matches("abc", &["a"]));
        assert!(!matches("abc", &["d"]));
    }

    #[test]
    fn test_case_insensitive_both_ways() {
        assert!(matches("Hello World", &["WORLD"]));
        assert!(matches("HELLO", &["hello"]));
    }

    #[test]
    fn test_any_term_is_enough() {
        assert!(matches("storm warning", &["sun", "storm"]));
    }

    #[test]
    fn test_empty_term_set_never_matches() {
        let none: [&str; 0] = [];
        assert!(!matches("anything", &none));
        assert!(!matches("", &none));
        assert!(TermMatcher::new(&none).is_empty());
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(matches("abc", &[""]));
        assert!(matches("", &[""]));
    }

    #[test]
    fn test_agrees_with_lowercase_containment() {
        // matches(v, T) ⇔ ∃ t ∈ T: lower(t) ⊆ lower(v)
        let values = ["Rust", "rUsTaCeAn", "trust", "", "ÉCOLE", "ecole"];
        let sets: [&[&str]; 4] = [&["rust"], &["ACE", "zz"], &["école"], &["t", "e"]];
        for v in values {
            for set in sets {
                let expected = set
                    .iter()
                    .any(|t| v.to_lowercase().contains(&t.to_lowercase()));
                assert_eq!(matches(v, set), expected, "value={v:?} set={set:?}");
            }
        }
    }
}
