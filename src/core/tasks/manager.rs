use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;
use tracing::{
    debug,
    error,
    info,
};

use super::{
    types::LoadResult,
    TaskResult,
};
use crate::core::{
    http::DocumentFetcher,
    pipeline::analyze_text,
    WordHistError,
};

pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Result<Self, WordHistError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender })
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Fetches `url` on a background thread, then counts and ranks the text.
    /// Counting only starts once the whole document has arrived.
    pub fn load_document<F: DocumentFetcher>(&self, fetcher: Arc<F>, url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let completion = LoadCompletion { sender: Some(sender), url: url.clone() };

            let result = runtime.block_on(async {
                let text = fetcher.fetch(&url).await?;
                debug!("Fetched {} bytes from {}", text.len(), url);
                Ok::<_, WordHistError>(analyze_text(&text))
            });

            if let Ok(analysis) = &result {
                info!(
                    "Analyzed {}: {} words, {} distinct",
                    url, analysis.total_tokens, analysis.unique_words
                );
            }

            completion.finish(result);
        });
    }
}

/// Delivers exactly one result per load. Dropped without [`finish`](Self::finish),
/// e.g. while the load thread unwinds, it reports the load as failed.
struct LoadCompletion {
    sender: Option<mpsc::Sender<TaskResult>>,
    url: String,
}

impl LoadCompletion {
    fn finish(mut self, result: LoadResult) {
        self.send(result);
    }

    fn send(&mut self, result: LoadResult) {
        if let Some(sender) = self.sender.take() {
            let url = std::mem::take(&mut self.url);
            let _ = sender.send(TaskResult::DocumentLoaded { url, result });
        }
    }
}

impl Drop for LoadCompletion {
    fn drop(&mut self) {
        if self.sender.is_some() {
            error!("Load task for {} stopped without a result", self.url);
            let message = format!("Load task for {} stopped unexpectedly", self.url);
            self.send(Err(WordHistError::Custom(message)));
        }
    }
}
