use super::models::{
    RankedEntry,
    RankedList,
    TopList,
    WordCount,
};

/// Sorts by count descending. The sort is stable, so equal counts keep the
/// order in which the words were first counted.
pub fn rank(counts: &WordCount) -> RankedList {
    let mut entries: RankedList =
        counts.iter().map(|(word, count)| RankedEntry::new(word, count)).collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

pub fn top_list(counts: &WordCount) -> TopList {
    TopList::from_ranked(rank(counts))
}
