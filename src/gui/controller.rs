use std::sync::Arc;

use tracing::{
    debug,
    error,
    info,
};

use crate::core::{
    export::to_csv,
    http::{
        DocumentFetcher,
        HttpFetcher,
    },
    tasks::{
        TaskManager,
        TaskResult,
    },
    AnalysisResult,
    TopList,
    WordHistError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    Loaded { url: String },
    /// `retryable` is set when the document could not be retrieved, as opposed
    /// to the load itself breaking.
    Failed { url: String, error: String, retryable: bool },
}

/// Owns the current top list. Only [`poll`](Self::poll) replaces it, and only
/// with the result of a successful load.
pub struct HistogramController<F: DocumentFetcher = HttpFetcher> {
    fetcher: Arc<F>,
    task_manager: TaskManager,
    current: Option<AnalysisResult>,
    pending: usize,
    last_error: Option<String>,
}

impl<F: DocumentFetcher> HistogramController<F> {
    pub fn new(fetcher: F) -> Result<Self, WordHistError> {
        Ok(Self {
            fetcher: Arc::new(fetcher),
            task_manager: TaskManager::new()?,
            current: None,
            pending: 0,
            last_error: None,
        })
    }

    pub fn load(&mut self, source_location: &str) {
        info!("Loading document from {}", source_location);

        self.pending += 1;
        self.last_error = None;
        self.task_manager.load_document(Arc::clone(&self.fetcher), source_location.to_string());
    }

    /// Applies finished loads in arrival order.
    pub fn poll(&mut self) -> Vec<LoadEvent> {
        let mut events = Vec::new();

        for result in self.task_manager.poll_results() {
            debug!("Task finished: {}", result.task_type());

            match result {
                TaskResult::DocumentLoaded { url, result } => {
                    self.pending = self.pending.saturating_sub(1);

                    match result {
                        Ok(analysis) => {
                            self.current = Some(analysis);
                            events.push(LoadEvent::Loaded { url });
                        }
                        Err(e) => {
                            error!("Error fetching data from {}: {}", url, e);
                            let retryable = e.is_retrieval();
                            let error = e.to_string();
                            self.last_error = Some(error.clone());
                            events.push(LoadEvent::Failed { url, error, retryable });
                        }
                    }
                }
            }
        }

        events
    }

    pub fn phase(&self) -> LoadPhase {
        if self.pending > 0 {
            LoadPhase::Loading
        } else if self.current.is_some() {
            LoadPhase::Ready
        } else {
            LoadPhase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.current.as_ref()
    }

    pub fn top_list(&self) -> Option<&TopList> {
        self.current.as_ref().map(|analysis| &analysis.top_list)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Export needs at least one ranked word; an empty document shows a
    /// notice instead.
    pub fn can_export(&self) -> bool {
        self.top_list().is_some_and(|top| !top.is_empty())
    }

    /// CSV for the current top list, or `None` while there is nothing to export.
    pub fn export_current(&self) -> Option<String> {
        self.top_list().filter(|top| !top.is_empty()).map(to_csv)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        thread,
        time::Duration,
    };

    use tokio::sync::Notify;

    use super::*;

    struct StaticFetcher(&'static str);

    impl DocumentFetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, WordHistError> {
            Ok(self.0.to_string())
        }
    }

    /// Succeeds for urls ending in `.txt` or `.empty`, fails with a 404 otherwise.
    struct RoutedFetcher;

    impl DocumentFetcher for RoutedFetcher {
        async fn fetch(&self, url: &str) -> Result<String, WordHistError> {
            if url.ends_with(".txt") {
                Ok("alpha beta alpha".to_string())
            } else if url.ends_with(".empty") {
                Ok(String::new())
            } else {
                Err(WordHistError::HttpStatus { status: 404, url: url.to_string() })
            }
        }
    }

    /// Holds each load until the test releases it, so arrival order is chosen
    /// by the test rather than by the scheduler.
    struct GatedFetcher {
        first: Arc<Notify>,
        second: Arc<Notify>,
    }

    impl DocumentFetcher for GatedFetcher {
        async fn fetch(&self, url: &str) -> Result<String, WordHistError> {
            match url {
                "mem://first" => {
                    self.first.notified().await;
                    Ok("first first first".to_string())
                }
                "mem://second" => {
                    self.second.notified().await;
                    Ok("second".to_string())
                }
                other => Err(WordHistError::Custom(format!("unexpected url {}", other))),
            }
        }
    }

    struct PanickingFetcher;

    impl DocumentFetcher for PanickingFetcher {
        async fn fetch(&self, url: &str) -> Result<String, WordHistError> {
            panic!("fetch of {} blew up", url)
        }
    }

    fn wait_for_event<F: DocumentFetcher>(controller: &mut HistogramController<F>) -> LoadEvent {
        for _ in 0..500 {
            if let Some(event) = controller.poll().pop() {
                return event;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("no load finished");
    }

    fn top_word<F: DocumentFetcher>(controller: &HistogramController<F>) -> Option<String> {
        controller.top_list().and_then(|top| top.entries().first()).map(|e| e.word.clone())
    }

    fn settle<F: DocumentFetcher>(controller: &mut HistogramController<F>) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        for _ in 0..500 {
            events.extend(controller.poll());
            if !controller.is_loading() {
                return events;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("load did not finish");
    }

    #[test]
    fn test_starts_idle_without_export() {
        let controller = HistogramController::new(StaticFetcher("x")).unwrap();

        assert_eq!(controller.phase(), LoadPhase::Idle);
        assert!(!controller.can_export());
        assert_eq!(controller.export_current(), None);
        assert!(controller.top_list().is_none());
    }

    #[test]
    fn test_successful_load_becomes_ready() {
        let mut controller =
            HistogramController::new(StaticFetcher("The cat sat on the mat. THE CAT ran.")).unwrap();

        controller.load("mem://sample");
        assert_eq!(controller.phase(), LoadPhase::Loading);

        let events = settle(&mut controller);
        assert_eq!(events, vec![LoadEvent::Loaded { url: "mem://sample".to_string() }]);
        assert_eq!(controller.phase(), LoadPhase::Ready);

        let csv = controller.export_current().unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Word,Count"));
        assert_eq!(lines.next(), Some("the,3"));

        let analysis = controller.analysis().unwrap();
        assert_eq!(analysis.total_tokens, 9);
        assert_eq!(analysis.unique_words, 6);
    }

    #[test]
    fn test_failure_from_idle_stays_idle() {
        let mut controller = HistogramController::new(RoutedFetcher).unwrap();

        controller.load("http://example.invalid/missing");
        let events = settle(&mut controller);

        assert!(matches!(events.as_slice(), [LoadEvent::Failed { retryable: true, .. }]));
        assert_eq!(controller.phase(), LoadPhase::Idle);
        assert!(!controller.can_export());
        assert!(controller.last_error().unwrap().contains("404"));
    }

    #[test]
    fn test_failure_keeps_previous_top_list() {
        let mut controller = HistogramController::new(RoutedFetcher).unwrap();

        controller.load("http://example.invalid/doc.txt");
        settle(&mut controller);
        let before = controller.top_list().cloned();
        assert!(before.is_some());

        controller.load("http://example.invalid/missing");
        settle(&mut controller);

        assert_eq!(controller.phase(), LoadPhase::Ready);
        assert_eq!(controller.top_list().cloned(), before);
        assert!(controller.can_export());
        assert!(controller.last_error().is_some());
    }

    #[test]
    fn test_next_load_clears_error() {
        let mut controller = HistogramController::new(RoutedFetcher).unwrap();

        controller.load("http://example.invalid/missing");
        settle(&mut controller);
        assert!(controller.last_error().is_some());

        controller.load("http://example.invalid/doc.txt");
        assert!(controller.last_error().is_none());
        settle(&mut controller);
        assert_eq!(controller.top_list().map(|t| t.entries()[0].word.clone()), Some("alpha".into()));
    }

    #[test]
    fn test_empty_document_offers_no_export() {
        let mut controller = HistogramController::new(StaticFetcher("... !!!")).unwrap();

        controller.load("mem://empty");
        settle(&mut controller);

        assert_eq!(controller.phase(), LoadPhase::Ready);
        assert!(controller.top_list().is_some_and(|top| top.is_empty()));
        assert!(!controller.can_export());
        assert_eq!(controller.export_current(), None);
    }

    #[test]
    fn test_empty_document_replaces_previous_list() {
        let mut controller = HistogramController::new(RoutedFetcher).unwrap();

        controller.load("http://example.invalid/doc.txt");
        settle(&mut controller);
        assert!(controller.can_export());

        controller.load("http://example.invalid/blank.empty");
        settle(&mut controller);

        assert_eq!(controller.phase(), LoadPhase::Ready);
        assert_eq!(controller.top_list().map(|top| top.len()), Some(0));
        assert!(!controller.can_export());
        assert_eq!(controller.export_current(), None);
    }

    #[test]
    fn test_overlapping_loads_apply_in_arrival_order() {
        let first = Arc::new(Notify::new());
        let second = Arc::new(Notify::new());
        let fetcher = GatedFetcher { first: Arc::clone(&first), second: Arc::clone(&second) };
        let mut controller = HistogramController::new(fetcher).unwrap();

        controller.load("mem://first");
        controller.load("mem://second");
        assert_eq!(controller.phase(), LoadPhase::Loading);

        second.notify_one();
        assert_eq!(wait_for_event(&mut controller), LoadEvent::Loaded { url: "mem://second".into() });
        assert_eq!(top_word(&controller).as_deref(), Some("second"));
        assert_eq!(controller.phase(), LoadPhase::Loading);

        // The earlier request finishes last, so its list is the one kept.
        first.notify_one();
        assert_eq!(wait_for_event(&mut controller), LoadEvent::Loaded { url: "mem://first".into() });
        assert_eq!(top_word(&controller).as_deref(), Some("first"));
        assert_eq!(controller.phase(), LoadPhase::Ready);
        assert_eq!(controller.export_current().as_deref(), Some("Word,Count\nfirst,3"));
    }

    #[test]
    fn test_panicking_load_does_not_stay_loading() {
        let mut controller = HistogramController::new(PanickingFetcher).unwrap();

        controller.load("mem://broken");
        let events = settle(&mut controller);

        assert!(matches!(events.as_slice(), [LoadEvent::Failed { retryable: false, .. }]));
        assert_eq!(controller.phase(), LoadPhase::Idle);
        assert!(controller.last_error().is_some());
    }
}
