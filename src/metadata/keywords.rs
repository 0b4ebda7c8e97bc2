use indexmap::IndexSet;

/// Deduplicated keywords accumulated from comma-separated answers
///
/// Iteration follows first insertion, so output lists are stable for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: IndexSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `answer` on commas and add every non-blank trimmed token
    pub fn extend_from_answer(&mut self, answer: &str) {
        for token in answer.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            self.words.insert(token.to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupes_across_answers() {
        let mut set = KeywordSet::new();
        set.extend_from_answer("a,b,a");
        set.extend_from_answer("b,c");
        assert_eq!(set.len(), 3);
        assert!(["a", "b", "c"].iter().all(|w| set.contains(w)));
    }

    #[test]
    fn test_trims_and_skips_blank_tokens() {
        let mut set = KeywordSet::new();
        set.extend_from_answer(" cli , ,node,, ");
        assert_eq!(set.to_vec(), vec!["cli", "node"]);
    }

    #[test]
    fn test_empty_answer_adds_nothing() {
        let mut set = KeywordSet::new();
        set.extend_from_answer("");
        assert!(set.is_empty());
    }
}
