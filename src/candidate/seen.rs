use std::collections::HashSet;

/// Canonical strings already handled during one search run.
///
/// Lives for exactly one run and is passed by `&mut` to whatever needs it.
#[derive(Debug, Default, Clone)]
pub struct SeenSet {
    keys: HashSet<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `key` was already present, otherwise records it and returns `false`.
    pub fn check_and_mark(&mut self, key: &str) -> bool {
        if self.keys.contains(key) {
            return true;
        }
        self.keys.insert(key.to_string());
        false
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
