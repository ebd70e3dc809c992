pub mod analyzer;
pub mod pipeline;

pub use analyzer::RepoAnalyzer;
pub use pipeline::ScanPipeline;
