//! Algorithm enum for selecting the generation engine strategy.
//!
//! Both strategies produce the same next generation; they differ only in how
//! neighbor counts are gathered.

use std::fmt;
use std::str::FromStr;

use super::{LiveSet, engine};
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Survival check on live cells, then one recount per deduplicated
    /// dead neighbor
    #[default]
    CandidateScan,
    /// Single pass over live cells accumulating counts in a map
    NeighborTally,
}

impl Algorithm {
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::CandidateScan, Algorithm::NeighborTally]
    }

    /// Display name for the control panel
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::CandidateScan => "Candidates",
            Algorithm::NeighborTally => "Tally",
        }
    }

    /// Identifier accepted in configuration
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::CandidateScan => "candidate-scan",
            Algorithm::NeighborTally => "neighbor-tally",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::CandidateScan => "Recount dead neighbors",
            Algorithm::NeighborTally => "Tally counts per live cell",
        }
    }

    /// The strategy after this one, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|&a| a == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Compute the next generation with this strategy
    pub fn advance(self, live: &LiveSet) -> LiveSet {
        match self {
            Algorithm::CandidateScan => engine::advance(live),
            Algorithm::NeighborTally => engine::advance_tallied(live),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(wanted) || a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_candidate_scan() {
        assert_eq!(Algorithm::default(), Algorithm::CandidateScan);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = Algorithm::all().iter().map(|a| a.name()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_descriptions_fit_panel() {
        let descriptions: Vec<_> = Algorithm::all().iter().map(|a| a.description()).collect();
        assert!(descriptions.iter().all(|d| !d.is_empty() && d.len() <= 28));
        assert_ne!(descriptions[0], descriptions[1]);
    }

    #[test]
    fn test_parse_ids_and_names() {
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.id().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.name().to_uppercase().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(
            "hashlife".parse::<Algorithm>(),
            Err(ConfigError::UnknownAlgorithm("hashlife".into()))
        );
    }

    #[test]
    fn test_next_cycles_through_all() {
        let start = Algorithm::default();
        let mut seen = vec![start];
        let mut current = start.next();
        while current != start {
            seen.push(current);
            current = current.next();
        }
        assert_eq!(seen, Algorithm::all());
    }

    #[test]
    fn test_dispatch_matches_engine() {
        let blinker = LiveSet::from([(0, 0), (1, 0), (2, 0)]);
        for algorithm in Algorithm::all() {
            assert_eq!(algorithm.advance(&blinker), engine::advance(&blinker));
        }
    }
}
