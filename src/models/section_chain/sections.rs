use super::{SectionChain, Stations};
use crate::error::ChainError;
use crate::models::section::Section;
use crate::models::station::Station;

/// Mutations on the section collection of a [`SectionChain`].
pub trait Sections {
    /// Register a new section, splitting an existing one when the new
    /// section's endpoints partially overlap it.
    fn add(&mut self, section: Section) -> Result<(), ChainError>;

    /// Remove a station, splicing its neighboring sections back together.
    fn remove_station(&mut self, station: &Station) -> Result<(), ChainError>;
}

impl Sections for SectionChain {
    fn add(&mut self, section: Section) -> Result<(), ChainError> {
        validate_not_duplicated(self, &section)?;
        validate_connects_to_chain(self, &section)?;
        validate_has_split_anchor(self, &section)?;

        // At most one section shares each side of the new one on a well-formed
        // path. The up-side anchor is adjusted before the down-side one.
        if let Some(idx) = self
            .sections
            .iter()
            .position(|s| s.starts_at(section.up_station()))
        {
            let shrunk = self.sections[idx].shrunk_from_front(&section)?;
            log::debug!(
                "splitting {} -> {} behind {}",
                self.sections[idx].up_station(),
                self.sections[idx].down_station(),
                section.down_station(),
            );
            self.sections[idx] = shrunk;
        }

        if let Some(idx) = self
            .sections
            .iter()
            .position(|s| s.ends_at(section.down_station()))
        {
            let shrunk = self.sections[idx].shrunk_from_back(&section)?;
            log::debug!(
                "splitting {} -> {} ahead of {}",
                self.sections[idx].up_station(),
                self.sections[idx].down_station(),
                section.up_station(),
            );
            self.sections[idx] = shrunk;
        }

        self.sections.push(section);
        Ok(())
    }

    fn remove_station(&mut self, station: &Station) -> Result<(), ChainError> {
        let not_allowed = || ChainError::RemovalNotAllowed {
            station: station.name().to_string(),
        };

        // A line keeps at least one section for as long as it exists.
        if self.sections.len() <= 1 {
            return Err(not_allowed());
        }
        if !self.contains_station(station) {
            return Err(not_allowed());
        }

        let head_idx = self.first_section_index()?;
        if self.sections[head_idx].starts_at(station) {
            self.sections.remove(head_idx);
            return Ok(());
        }

        let tail_idx = self.last_section_index()?;
        if self.sections[tail_idx].ends_at(station) {
            self.sections.remove(tail_idx);
            return Ok(());
        }

        // Interior station: extend the section ending at it to absorb the one
        // starting at it.
        let up_idx = self
            .sections
            .iter()
            .position(|s| s.ends_at(station))
            .ok_or_else(not_allowed)?;
        let down_idx = self
            .sections
            .iter()
            .position(|s| s.starts_at(station))
            .ok_or_else(not_allowed)?;

        let merged = self.sections[up_idx].merged_with(&self.sections[down_idx]);
        log::debug!(
            "splicing out {}: merged section {} -> {}",
            station,
            merged.up_station(),
            merged.down_station(),
        );
        self.sections[up_idx] = merged;
        self.sections.remove(down_idx);
        Ok(())
    }
}

/// The exact `(up, down)` pair may appear only once.
fn validate_not_duplicated(chain: &SectionChain, section: &Section) -> Result<(), ChainError> {
    let duplicated = chain
        .sections
        .iter()
        .any(|s| s.starts_at(section.up_station()) && s.ends_at(section.down_station()));
    if duplicated {
        return Err(ChainError::DuplicateSection {
            up: section.up_station().name().to_string(),
            down: section.down_station().name().to_string(),
        });
    }
    Ok(())
}

/// On a non-empty chain at least one endpoint of the new section must already
/// be on the path, or the section would dangle.
fn validate_connects_to_chain(chain: &SectionChain, section: &Section) -> Result<(), ChainError> {
    if chain.sections.is_empty() {
        return Ok(());
    }
    if chain.sections.iter().any(|s| s.touches(section)) {
        return Ok(());
    }
    Err(ChainError::StationsNotFound {
        up: section.up_station().name().to_string(),
        down: section.down_station().name().to_string(),
    })
}

/// When both endpoints are already on the path, the section is only
/// insertable if it aligns with an existing endpoint for splitting: an
/// existing section sharing the new one's up-station, or one sharing its
/// down-station. Without such an anchor the section would just reconnect two
/// stations that already have a full path between them.
fn validate_has_split_anchor(chain: &SectionChain, section: &Section) -> Result<(), ChainError> {
    if chain.sections.is_empty() {
        return Ok(());
    }

    let up_known = chain.contains_station(section.up_station());
    let down_known = chain.contains_station(section.down_station());
    if !(up_known && down_known) {
        return Ok(());
    }

    let up_anchor = chain
        .sections
        .iter()
        .any(|s| s.starts_at(section.up_station()));
    let down_anchor = chain
        .sections
        .iter()
        .any(|s| s.ends_at(section.down_station()));
    if up_anchor || down_anchor {
        return Ok(());
    }

    Err(ChainError::StationsAlreadyExist {
        up: section.up_station().name().to_string(),
        down: section.down_station().name().to_string(),
    })
}
