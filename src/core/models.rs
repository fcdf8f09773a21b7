use std::collections::HashMap;

/// Maximum number of entries kept for display and export.
pub const TOP_LIST_LIMIT: usize = 20;

/// Word -> occurrence count. Keys are remembered in the order they were first
/// counted; the ranker relies on that order to break ties.
#[derive(Debug, Clone, Default)]
pub struct WordCount {
    index: HashMap<String, usize>,
    entries: Vec<(String, u32)>,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&idx) => self.entries[idx].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.index.get(word).map(|&idx| self.entries[idx].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens that were counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| *count as usize).sum()
    }

    /// Iterates in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

// Equality is mapping equality; encounter order is not compared.
impl PartialEq for WordCount {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(word, count)| other.get(word) == Some(count))
    }
}

impl Eq for WordCount {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: String,
    pub count: u32,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self { word: word.into(), count }
    }
}

/// All entries of a [`WordCount`], sorted by count descending.
pub type RankedList = Vec<RankedEntry>;

/// The ranked result currently shown and exportable, at most [`TOP_LIST_LIMIT`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopList {
    entries: Vec<RankedEntry>,
}

impl TopList {
    pub fn from_ranked(mut ranked: RankedList) -> Self {
        ranked.truncate(TOP_LIST_LIMIT);
        Self { entries: ranked }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_count(&self) -> u32 {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub top_list: TopList,
    pub total_tokens: usize,
    pub unique_words: usize,
}
