// ============================================================
// Layer 3 — Operator Commands
// ============================================================
// The two prompts in the annotator each accept a tiny command
// language. Parsing a raw input line into one of these enums is
// the only place that language is defined, so the review loop
// and the term editor can match on values instead of strings.
//
// Review prompt:
//   <n>  assign labels[n]
//   i    edit include terms
//   e    edit exclude terms
//   q    quit
//
// Term-editor prompt:
//   <n>  delete term n
//   a    add a term
//   q    done editing
//
// Anything else is Invalid and simply re-prompts.

/// One command read at the review prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewCommand {
    /// Assign the label at this index (already bounds-checked)
    Label(usize),
    EditIncludes,
    EditExcludes,
    Quit,
    /// Unparseable, negative, or out-of-range input
    Invalid(String),
}

impl ReviewCommand {
    /// Parse one line of operator input.
    /// `label_count` is the size of the label menu; indices at or
    /// beyond it are Invalid rather than an error.
    pub fn parse(input: &str, label_count: usize) -> Self {
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return if n < label_count {
                Self::Label(n)
            } else {
                Self::Invalid(trimmed.to_string())
            };
        }
        match trimmed {
            "i" => Self::EditIncludes,
            "e" => Self::EditExcludes,
            "q" => Self::Quit,
            _   => Self::Invalid(trimmed.to_string()),
        }
    }
}

/// One command read at the term-editor prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermCommand {
    /// Delete the term at this index; out of range is a no-op
    Remove(usize),
    Add,
    Done,
    Invalid(String),
}

impl TermCommand {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return Self::Remove(n);
        }
        match trimmed {
            "a" => Self::Add,
            "q" => Self::Done,
            _   => Self::Invalid(trimmed.to_string()),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_label_in_bounds() {
        assert_eq!(ReviewCommand::parse("1", 3), ReviewCommand::Label(1));
        assert_eq!(ReviewCommand::parse(" 0 \n", 3), ReviewCommand::Label(0));
    }

    #[test]
    fn test_review_label_out_of_bounds_is_invalid() {
        assert_eq!(ReviewCommand::parse("3", 3), ReviewCommand::Invalid("3".into()));
        assert_eq!(ReviewCommand::parse("-1", 3), ReviewCommand::Invalid("-1".into()));
    }

    #[test]
    fn test_review_letters() {
        assert_eq!(ReviewCommand::parse("i", 2), ReviewCommand::EditIncludes);
        assert_eq!(ReviewCommand::parse("e", 2), ReviewCommand::EditExcludes);
        assert_eq!(ReviewCommand::parse("q", 2), ReviewCommand::Quit);
        assert_eq!(ReviewCommand::parse("x", 2), ReviewCommand::Invalid("x".into()));
        assert_eq!(ReviewCommand::parse("", 2), ReviewCommand::Invalid(String::new()));
    }

    #[test]
    fn test_term_commands() {
        assert_eq!(TermCommand::parse("0"), TermCommand::Remove(0));
        assert_eq!(TermCommand::parse("99"), TermCommand::Remove(99));
        assert_eq!(TermCommand::parse("a"), TermCommand::Add);
        assert_eq!(TermCommand::parse("q"), TermCommand::Done);
        assert_eq!(TermCommand::parse("zz"), TermCommand::Invalid("zz".into()));
    }
}
