pub mod counter;
pub mod errors;
pub mod export;
pub mod http;
pub mod models;
pub mod pipeline;
pub mod ranker;
pub mod tasks;

pub use errors::WordHistError;
pub use models::{
    AnalysisResult,
    RankedEntry,
    RankedList,
    TopList,
    WordCount,
};
