//! Keyword list for the jurisprudence form.

use serde::Serialize;

/// Suggestions offered below the keyword field.
pub const SUGGESTED_KEYWORDS: [&str; 10] = [
    "dano moral",
    "indenização",
    "responsabilidade civil",
    "contrato",
    "consumidor",
    "trabalhista",
    "família",
    "sucessões",
    "propriedade",
    "execução",
];

/// Ordered, duplicate-free list of trimmed keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyword. Returns `false` when it is empty after trimming or
    /// already present.
    pub fn add(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() || self.contains(keyword) {
            return false;
        }
        self.0.push(keyword.to_string());
        true
    }

    pub fn remove(&mut self, keyword: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|k| k != keyword);
        self.0.len() != before
    }

    /// Remove the most recently added keyword.
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.iter().any(|k| k == keyword)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for k in iter {
            set.add(k.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_ignores_duplicates() {
        let mut set = KeywordSet::new();
        assert!(set.add("  dano moral "));
        assert!(!set.add("dano moral"));
        assert!(!set.add("   "));
        assert!(set.add("contrato"));
        assert_eq!(set.iter().collect::<Vec<_>>(), ["dano moral", "contrato"]);
    }

    #[test]
    fn remove_pop_and_clear() {
        let mut set: KeywordSet = ["a", "b", "c"].into_iter().collect();
        assert!(set.remove("b"));
        assert!(!set.remove("b"));
        assert_eq!(set.pop().as_deref(), Some("c"));
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn serializes_as_plain_array() {
        let set: KeywordSet = ["x", "y"].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["x","y"]"#);
    }

    #[test]
    fn suggestions_are_unique() {
        let set: KeywordSet = SUGGESTED_KEYWORDS.into_iter().collect();
        assert_eq!(set.len(), SUGGESTED_KEYWORDS.len());
    }
}
