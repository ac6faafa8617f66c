mod id;
mod line;
mod section;
mod section_chain;
mod station;

pub use id::generate_id;
pub use line::Line;
pub use section::Section;
pub use section_chain::{SectionChain, Sections, Stations};
pub use station::Station;
