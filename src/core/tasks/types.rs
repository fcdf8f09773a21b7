use crate::core::{
    models::AnalysisResult,
    WordHistError,
};

pub type LoadResult = Result<AnalysisResult, WordHistError>;

#[derive(Debug)]
pub enum TaskResult {
    DocumentLoaded { url: String, result: LoadResult },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::DocumentLoaded { .. } => "document_loaded",
        }
    }
}
