use serde::{Deserialize, Serialize};

use crate::error::ChainError;
use crate::models::section::Section;

mod sections;
mod stations;

pub use sections::Sections;
pub use stations::Stations;

/// The segment chain of one line: an unordered collection of directed
/// sections that always forms exactly one simple path.
///
/// Storage order is insertion order, not travel order; every query
/// reconstructs travel order by scanning for the head (the one station that
/// never appears as a down-station) and following up -> down links. Lines
/// hold a handful of sections, so the linear scans stay cheap and no index
/// structure is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionChain {
    sections: Vec<Section>,
}

impl SectionChain {
    /// A chain with no sections yet. Only valid transiently, before the
    /// line's first section is registered.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A chain seeded with the initial section of a new line.
    #[must_use]
    pub fn from_section(section: Section) -> Self {
        Self { sections: vec![section] }
    }

    /// Build a chain by registering each section in turn, so bulk
    /// construction enforces the same invariants as incremental `add`.
    pub fn of(sections: impl IntoIterator<Item = Section>) -> Result<Self, ChainError> {
        let mut chain = Self::empty();
        for section in sections {
            chain.add(section)?;
        }
        Ok(chain)
    }

    /// The stored sections, in storage (not travel) order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Index of the head section: the one whose up-station is nobody's
    /// down-station. A cyclic collection has no such section, so a corrupt
    /// chain surfaces here instead of looping.
    pub(crate) fn first_section_index(&self) -> Result<usize, ChainError> {
        self.sections
            .iter()
            .position(|s| !self.sections.iter().any(|o| o.ends_at(s.up_station())))
            .ok_or(ChainError::EmptyChain)
    }

    /// Index of the tail section: the one whose down-station is nobody's
    /// up-station.
    pub(crate) fn last_section_index(&self) -> Result<usize, ChainError> {
        self.sections
            .iter()
            .position(|s| !self.sections.iter().any(|o| o.starts_at(s.down_station())))
            .ok_or(ChainError::EmptyChain)
    }

    /// The sections in travel order, head to tail.
    ///
    /// The walk is bounded by the section count, so even a corrupt collection
    /// terminates; a break before all sections are visited leaves the
    /// unreachable ones out, and position lookups on the result report the
    /// corruption as a not-found error.
    pub(crate) fn ordered_sections(&self) -> Result<Vec<&Section>, ChainError> {
        let first = self.first_section_index()?;
        let mut ordered = Vec::with_capacity(self.sections.len());
        ordered.push(&self.sections[first]);

        while ordered.len() < self.sections.len() {
            let last_down = ordered[ordered.len() - 1].down_station();
            match self.sections.iter().find(|s| s.starts_at(last_down)) {
                Some(next) => ordered.push(next),
                None => break,
            }
        }
        Ok(ordered)
    }
}
