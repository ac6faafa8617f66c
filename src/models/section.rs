use serde::{Deserialize, Serialize};

use crate::error::ChainError;
use crate::models::station::Station;

/// A directed, distance-weighted edge between two stations on one line.
///
/// Sections are value objects: the split performed during insertion never
/// mutates a stored section in place, it produces a shrunk replacement via
/// [`Section::shrunk_from_front`] / [`Section::shrunk_from_back`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    up_station: Station,
    down_station: Station,
    distance: u32,
}

impl Section {
    /// Build a section, rejecting zero distance up front.
    pub fn new(up_station: Station, down_station: Station, distance: u32) -> Result<Self, ChainError> {
        if distance == 0 {
            return Err(ChainError::InvalidDistance { distance });
        }
        Ok(Self { up_station, down_station, distance })
    }

    #[must_use]
    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    #[must_use]
    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    #[must_use]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    #[must_use]
    pub fn starts_at(&self, station: &Station) -> bool {
        &self.up_station == station
    }

    #[must_use]
    pub fn ends_at(&self, station: &Station) -> bool {
        &self.down_station == station
    }

    /// Whether either endpoint of `other` appears in this section.
    #[must_use]
    pub fn touches(&self, other: &Section) -> bool {
        self.starts_at(other.up_station())
            || self.starts_at(other.down_station())
            || self.ends_at(other.up_station())
            || self.ends_at(other.down_station())
    }

    /// The shrunk remainder after `inserted` takes over the leading portion:
    /// this section's up endpoint advances to `inserted`'s down station.
    ///
    /// Fails when the inserted distance would leave no room for the remainder.
    pub fn shrunk_from_front(&self, inserted: &Section) -> Result<Self, ChainError> {
        let remainder = self.remaining_distance(inserted)?;
        Self::new(inserted.down_station.clone(), self.down_station.clone(), remainder)
    }

    /// The shrunk remainder after `inserted` takes over the trailing portion:
    /// this section's down endpoint retracts to `inserted`'s up station.
    pub fn shrunk_from_back(&self, inserted: &Section) -> Result<Self, ChainError> {
        let remainder = self.remaining_distance(inserted)?;
        Self::new(self.up_station.clone(), inserted.up_station.clone(), remainder)
    }

    /// The splice of this section with the one that follows it, absorbing the
    /// shared interior station: `(self.up, next.down, self.d + next.d)`.
    #[must_use]
    pub fn merged_with(&self, next: &Section) -> Self {
        Self {
            up_station: self.up_station.clone(),
            down_station: next.down_station.clone(),
            distance: self.distance + next.distance,
        }
    }

    fn remaining_distance(&self, inserted: &Section) -> Result<u32, ChainError> {
        if inserted.distance >= self.distance {
            return Err(ChainError::InvalidDistance {
                distance: self.distance.saturating_sub(inserted.distance),
            });
        }
        Ok(self.distance - inserted.distance)
    }
}
