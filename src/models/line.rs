use serde::{Deserialize, Serialize};

use crate::error::ChainError;
use crate::models::id::generate_id;
use crate::models::section::Section;
use crate::models::section_chain::{SectionChain, Sections, Stations};
use crate::models::station::Station;

/// A named subway route owning one segment chain.
///
/// The service layer talks to the line; the line only forwards to its chain.
/// The chain lives and dies with the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    id: u64,
    name: String,
    color: String,
    sections: SectionChain,
}

impl Line {
    /// A new line seeded with its initial section.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>, initial: Section) -> Self {
        Self::with_id(generate_id(), name, color, initial)
    }

    /// A line rehydrated under an existing id, e.g. from storage.
    #[must_use]
    pub fn with_id(
        id: u64,
        name: impl Into<String>,
        color: impl Into<String>,
        initial: Section,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            sections: SectionChain::from_section(initial),
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn sections(&self) -> &SectionChain {
        &self.sections
    }

    /// Rename/recolor the line. Sections are untouched.
    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }

    pub fn add_section(&mut self, section: Section) -> Result<(), ChainError> {
        self.sections.add(section)
    }

    pub fn remove_station(&mut self, station: &Station) -> Result<(), ChainError> {
        self.sections.remove_station(station)
    }

    pub fn ordered_stations(&self) -> Result<Vec<Station>, ChainError> {
        self.sections.ordered_stations()
    }

    pub fn distance_between(&self, a: &Station, b: &Station) -> Result<u32, ChainError> {
        self.sections.distance_between(a, b)
    }
}
