//! Compass geometry

/// Compass point named to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    /// All four points in heading order
    pub const ALL: [Cardinal; 4] = [
        Cardinal::North,
        Cardinal::East,
        Cardinal::South,
        Cardinal::West,
    ];

    /// Nearest cardinal point for a heading
    ///
    /// Quadrants are half-open and centred on the point:
    /// [315, 45) north, [45, 135) east, [135, 225) south, [225, 315) west.
    /// Headings outside [0, 360) are wrapped first.
    pub fn from_heading(heading: i32) -> Self {
        match heading.rem_euclid(360) {
            45..=134 => Cardinal::East,
            135..=224 => Cardinal::South,
            225..=314 => Cardinal::West,
            _ => Cardinal::North,
        }
    }

    /// Heading of the point itself
    pub fn heading(&self) -> i32 {
        match self {
            Cardinal::North => 0,
            Cardinal::East => 90,
            Cardinal::South => 180,
            Cardinal::West => 270,
        }
    }

    /// Name shown on the display
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinal::North => "NORTH",
            Cardinal::East => "EAST",
            Cardinal::South => "SOUTH",
            Cardinal::West => "WEST",
        }
    }
}

/// Absolute difference between two angles, no wrap handling
pub fn raw_distance(a: i32, b: i32) -> i32 {
    (a - b).abs()
}

/// Shortest angular distance between two headings in [0, 360)
///
/// Result is in [0, 180].
pub fn circular_distance(a: i32, b: i32) -> i32 {
    let diff = raw_distance(a, b);
    if diff > 180 {
        360 - diff
    } else {
        diff
    }
}
