/// State of a single coordinate for one generation.
/// On the sparse plane a cell is `Alive` iff its coordinate is in the LiveSet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Conway's rule (B3/S23):
    /// 1. Live cell with 2 or 3 live neighbors survives
    /// 2. Dead cell with exactly 3 live neighbors is born
    /// 3. Everything else is dead next generation
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_cell_transitions() {
        let next: Vec<bool> = (0..=8).map(|n| Cell::Alive.evolve(n).is_alive()).collect();
        assert_eq!(
            next,
            [false, false, true, true, false, false, false, false, false]
        );
    }

    #[test]
    fn test_dead_cell_transitions() {
        let born: Vec<u8> = (0..=8).filter(|&n| Cell::Dead.evolve(n).is_alive()).collect();
        assert_eq!(born, [3]);
    }

    #[test]
    fn test_from_membership() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
    }
}
