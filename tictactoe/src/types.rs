//! Canonical mark and cell types for the project.

/// The mark a player places. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn to_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    /// The mark that moves on the given step (X on even steps).
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Self::X
        } else {
            Self::O
        }
    }
}

impl Cell {
    pub fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::X => Some(Mark::X),
            Self::O => Some(Mark::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    pub fn to_char(self) -> char {
        self.mark().map_or(' ', Mark::to_char)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Self::X,
            Mark::O => Self::O,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_for_step_alternates() {
        assert_eq!(Mark::for_step(0), Mark::X);
        assert_eq!(Mark::for_step(1), Mark::O);
        assert_eq!(Mark::for_step(8), Mark::X);
    }

    #[test]
    fn test_cell_mark_round_trip() {
        assert_eq!(Cell::from(Mark::O).mark(), Some(Mark::O));
        assert_eq!(Cell::Empty.mark(), None);
        assert!(Cell::default().is_empty());
    }
}
