use super::{
    counter::count_words,
    models::AnalysisResult,
    ranker::top_list,
};

/// Counts and ranks one fetched document. The raw text and the full word
/// count are dropped once the top list is built.
pub fn analyze_text(text: &str) -> AnalysisResult {
    let counts = count_words(text);
    let total_tokens = counts.total();
    let unique_words = counts.len();

    AnalysisResult { top_list: top_list(&counts), total_tokens, unique_words }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_text_summary() {
        let result = analyze_text("The cat sat on the mat. THE CAT ran.");

        assert_eq!(result.total_tokens, 9);
        assert_eq!(result.unique_words, 6);
        assert_eq!(result.top_list.len(), 6);
        assert_eq!(result.top_list.entries()[0].word, "the");
    }

    #[test]
    fn test_analyze_empty_text() {
        let result = analyze_text("");

        assert_eq!(result.total_tokens, 0);
        assert_eq!(result.unique_words, 0);
        assert!(result.top_list.is_empty());
    }
}
