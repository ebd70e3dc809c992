pub mod client;
pub mod content;
pub mod host;

pub use client::GitHubClient;
pub use content::FileContent;
pub use host::RepositoryHost;
