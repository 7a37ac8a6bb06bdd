use std::fmt;

// Edge and corner overlay markers. Each carries the quarter-turn angle the
// rotate-then-paint scheme would have used; the painter maps coordinates
// directly these days (see tile.rs) but the angle still selects which edge
// or corner the paint lands on.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Left,
    Right,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    Side(Side),
    Corner(Corner),
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Left, Side::Right, Side::Bottom];

    // Quarter turn in degrees, counter-clockwise, that brings this side up
    // to the top row before painting.
    pub fn angle(self) -> i32 {
        match self {
            Side::Top => 0,
            Side::Left => -90,
            Side::Right => 90,
            Side::Bottom => 180,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Left => "left",
            Side::Right => "right",
            Side::Bottom => "bottom",
        }
    }
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    // Quarter turn that brings this corner into the top-left cell.
    pub fn angle(self) -> i32 {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 90,
            Corner::BottomRight => 180,
            Corner::BottomLeft => 270,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Corner::TopLeft => "top_left",
            Corner::TopRight => "top_right",
            Corner::BottomRight => "bottom_right",
            Corner::BottomLeft => "bottom_left",
        }
    }

    // The two sides this corner touches. A corner block is redundant when
    // either of them already carries a full border.
    pub fn adjacent_sides(self) -> [Side; 2] {
        match self {
            Corner::TopLeft => [Side::Top, Side::Left],
            Corner::TopRight => [Side::Top, Side::Right],
            Corner::BottomRight => [Side::Bottom, Side::Right],
            Corner::BottomLeft => [Side::Bottom, Side::Left],
        }
    }
}

impl Decoration {
    // Canonical marker order, sides before corners. Combination enumeration
    // and tile names both follow it.
    pub const ALL: [Decoration; 8] = [
        Decoration::Side(Side::Top),
        Decoration::Side(Side::Left),
        Decoration::Side(Side::Right),
        Decoration::Side(Side::Bottom),
        Decoration::Corner(Corner::TopLeft),
        Decoration::Corner(Corner::TopRight),
        Decoration::Corner(Corner::BottomRight),
        Decoration::Corner(Corner::BottomLeft),
    ];

    pub fn angle(self) -> i32 {
        match self {
            Decoration::Side(side) => side.angle(),
            Decoration::Corner(corner) => corner.angle(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Decoration::Side(side) => side.label(),
            Decoration::Corner(corner) => corner.label(),
        }
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// "center" for the undecorated base, otherwise the labels joined with '-'.
pub fn combo_label(decorations: &[Decoration]) -> String {
    if decorations.is_empty() {
        "center".to_string()
    } else {
        decorations
            .iter()
            .map(|d| d.label())
            .collect::<Vec<_>>()
            .join("-")
    }
}
