pub mod error;
pub mod models;

pub use error::ChainError;
pub use models::{Line, Section, SectionChain, Sections, Station, Stations};
