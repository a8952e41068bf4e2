use serde::{Deserialize, Serialize};

/// One of the four resting positions inside the container.
///
/// Ordinals are stable: neighbours are found by wrapping around
/// TopLeft -> BottomLeft -> BottomRight -> TopRight -> TopLeft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Corner {
    #[default]
    TopLeft = 0,
    BottomLeft = 1,
    BottomRight = 2,
    TopRight = 3,
}

pub const CORNER_COUNT: usize = 4;

impl Corner {
    /// All corners in ordinal order
    pub const ALL: [Corner; CORNER_COUNT] = [
        Corner::TopLeft,
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::TopRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Corner> {
        Self::ALL.get(index).copied()
    }

    /// Next corner counter-clockwise on screen (wraps)
    pub fn next(self) -> Corner {
        Self::ALL[(self.index() + 1) % CORNER_COUNT]
    }

    /// Previous corner (wraps)
    pub fn previous(self) -> Corner {
        Self::ALL[(self.index() + CORNER_COUNT - 1) % CORNER_COUNT]
    }

    pub fn opposite(self) -> Corner {
        Self::ALL[(self.index() + 2) % CORNER_COUNT]
    }

    /// Corners sharing an edge of the container
    pub fn is_adjacent(self, other: Corner) -> bool {
        self.next() == other || self.previous() == other
    }

    #[inline]
    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    #[inline]
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    pub fn from_sides(left: bool, top: bool) -> Corner {
        match (left, top) {
            (true, true) => Corner::TopLeft,
            (true, false) => Corner::BottomLeft,
            (false, false) => Corner::BottomRight,
            (false, true) => Corner::TopRight,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
            Corner::TopRight => "top-right",
        }
    }
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
