pub mod repository;
pub mod tag;
pub mod analysis;
pub mod scan;

pub use repository::*;
pub use tag::*;
pub use analysis::*;
pub use scan::*;
