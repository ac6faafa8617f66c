use super::SectionChain;
use crate::error::ChainError;
use crate::models::station::Station;

/// Station-level queries on a [`SectionChain`].
pub trait Stations {
    /// The full visiting order from head to tail.
    ///
    /// Always one station longer than the section count.
    fn ordered_stations(&self) -> Result<Vec<Station>, ChainError>;

    /// Cumulative distance along the path between two stations, in either
    /// direction.
    fn distance_between(&self, a: &Station, b: &Station) -> Result<u32, ChainError>;

    /// Whether the station is an endpoint of any section on the chain.
    fn contains_station(&self, station: &Station) -> bool;
}

impl Stations for SectionChain {
    fn ordered_stations(&self) -> Result<Vec<Station>, ChainError> {
        let ordered = self.ordered_sections()?;

        let mut stations = Vec::with_capacity(ordered.len() + 1);
        stations.push(ordered[0].up_station().clone());
        for section in &ordered {
            stations.push(section.down_station().clone());
        }
        Ok(stations)
    }

    fn distance_between(&self, a: &Station, b: &Station) -> Result<u32, ChainError> {
        let not_covered = || ChainError::SectionNotFound {
            from: a.name().to_string(),
            to: b.name().to_string(),
        };

        let ordered = self.ordered_sections()?;
        let stations = self.ordered_stations()?;
        let pos_a = stations.iter().position(|s| s == a).ok_or_else(not_covered)?;
        let pos_b = stations.iter().position(|s| s == b).ok_or_else(not_covered)?;

        let (from, to) = if pos_a <= pos_b { (pos_a, pos_b) } else { (pos_b, pos_a) };
        Ok(ordered[from..to].iter().map(|s| s.distance()).sum())
    }

    fn contains_station(&self, station: &Station) -> bool {
        self.sections()
            .iter()
            .any(|s| s.starts_at(station) || s.ends_at(station))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::section::Section;

    fn station(id: u64, name: &str) -> Station {
        Station::new(id, name)
    }

    fn section(up: &Station, down: &Station, distance: u32) -> Section {
        Section::new(up.clone(), down.clone(), distance).expect("positive distance")
    }

    #[test]
    fn test_ordered_stations_on_empty_chain() {
        let chain = SectionChain::empty();
        assert_eq!(chain.ordered_stations(), Err(ChainError::EmptyChain));
    }

    #[test]
    fn test_ordered_stations_single_section() {
        let a = station(1, "A");
        let b = station(2, "B");
        let chain = SectionChain::from_section(section(&a, &b, 20));

        let stations = chain.ordered_stations().expect("non-empty chain");
        assert_eq!(stations, vec![a, b]);
    }

    #[test]
    fn test_ordered_stations_count_is_sections_plus_one() {
        let a = station(1, "A");
        let b = station(2, "B");
        let c = station(3, "C");
        let d = station(4, "D");
        let chain = SectionChain::of([
            section(&a, &b, 10),
            section(&b, &c, 5),
            section(&c, &d, 5),
        ])
        .expect("connected sections");

        let stations = chain.ordered_stations().expect("non-empty chain");
        assert_eq!(stations.len(), chain.len() + 1);
        assert_eq!(stations, vec![a, b, c, d]);
    }

    #[test]
    fn test_distance_between_adjacent_stations() {
        let a = station(1, "A");
        let b = station(2, "B");
        let chain = SectionChain::from_section(section(&a, &b, 20));

        assert_eq!(chain.distance_between(&a, &b), Ok(20));
    }

    #[test]
    fn test_distance_between_spans_multiple_sections() {
        let a = station(1, "A");
        let b = station(2, "B");
        let c = station(3, "C");
        let chain =
            SectionChain::of([section(&a, &b, 10), section(&b, &c, 5)]).expect("connected");

        assert_eq!(chain.distance_between(&a, &c), Ok(15));
    }

    #[test]
    fn test_distance_is_additive_along_the_path() {
        let a = station(1, "A");
        let b = station(2, "B");
        let c = station(3, "C");
        let d = station(4, "D");
        let chain = SectionChain::of([
            section(&a, &b, 10),
            section(&b, &c, 5),
            section(&c, &d, 7),
        ])
        .expect("connected");

        let ab = chain.distance_between(&a, &b).expect("on chain");
        let bd = chain.distance_between(&b, &d).expect("on chain");
        assert_eq!(chain.distance_between(&a, &d), Ok(ab + bd));
    }

    #[test]
    fn test_distance_between_works_in_reverse() {
        let a = station(1, "A");
        let b = station(2, "B");
        let c = station(3, "C");
        let chain =
            SectionChain::of([section(&a, &b, 10), section(&b, &c, 5)]).expect("connected");

        assert_eq!(chain.distance_between(&c, &a), Ok(15));
    }

    #[test]
    fn test_distance_between_same_station_is_zero() {
        let a = station(1, "A");
        let b = station(2, "B");
        let chain = SectionChain::from_section(section(&a, &b, 20));

        assert_eq!(chain.distance_between(&a, &a), Ok(0));
    }

    #[test]
    fn test_distance_between_unknown_station() {
        let a = station(1, "A");
        let b = station(2, "B");
        let elsewhere = station(9, "Elsewhere");
        let chain = SectionChain::from_section(section(&a, &b, 20));

        let result = chain.distance_between(&a, &elsewhere);
        assert!(matches!(result, Err(ChainError::SectionNotFound { .. })));
    }

    #[test]
    fn test_contains_station() {
        let a = station(1, "A");
        let b = station(2, "B");
        let elsewhere = station(9, "Elsewhere");
        let chain = SectionChain::from_section(section(&a, &b, 20));

        assert!(chain.contains_station(&a));
        assert!(chain.contains_station(&b));
        assert!(!chain.contains_station(&elsewhere));
    }
}
