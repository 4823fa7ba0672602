//! Preset formations.
//!
//! Presets are laid out for team1 (attacking left to right); team2 gets the
//! mirrored layout when a preset is applied.

use crate::geometry::Position;

/// A named preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formation {
    pub name: &'static str,
    pub positions: &'static [Position],
}

const fn p(left: f64, top: f64) -> Position {
    Position::new(left, top)
}

const F_4_4_2: &[Position] = &[
    p(50.0, 250.0),
    p(150.0, 100.0),
    p(150.0, 200.0),
    p(150.0, 300.0),
    p(150.0, 400.0),
    p(300.0, 100.0),
    p(300.0, 200.0),
    p(300.0, 300.0),
    p(300.0, 400.0),
    p(450.0, 150.0),
    p(450.0, 350.0),
];

const F_4_3_3: &[Position] = &[
    p(50.0, 250.0),
    p(150.0, 50.0),
    p(150.0, 150.0),
    p(150.0, 350.0),
    p(150.0, 450.0),
    p(300.0, 150.0),
    p(300.0, 250.0),
    p(300.0, 350.0),
    p(450.0, 100.0),
    p(450.0, 250.0),
    p(450.0, 400.0),
];

const F_3_5_2: &[Position] = &[
    p(50.0, 250.0),
    p(150.0, 100.0),
    p(150.0, 250.0),
    p(150.0, 400.0),
    p(300.0, 50.0),
    p(300.0, 150.0),
    p(300.0, 250.0),
    p(300.0, 350.0),
    p(300.0, 450.0),
    p(450.0, 150.0),
    p(450.0, 350.0),
];

// Twelve entries; the lone striker is dropped when applied.
const F_4_2_3_1: &[Position] = &[
    p(50.0, 250.0),
    p(150.0, 50.0),
    p(150.0, 150.0),
    p(150.0, 350.0),
    p(150.0, 450.0),
    p(300.0, 200.0),
    p(300.0, 300.0),
    p(450.0, 100.0),
    p(450.0, 200.0),
    p(450.0, 300.0),
    p(450.0, 400.0),
    p(600.0, 250.0),
];

const PRESETS: &[Formation] = &[
    Formation {
        name: "4-4-2",
        positions: F_4_4_2,
    },
    Formation {
        name: "4-3-3",
        positions: F_4_3_3,
    },
    Formation {
        name: "3-5-2",
        positions: F_3_5_2,
    },
    Formation {
        name: "4-2-3-1",
        positions: F_4_2_3_1,
    },
];

/// Read-only lookup over the preset table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationCatalog {
    presets: &'static [Formation],
}

impl Default for FormationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FormationCatalog {
    pub const fn builtin() -> Self {
        Self { presets: PRESETS }
    }

    /// Returns the preset positions, or `None` for an unknown name.
    pub fn lookup(&self, name: &str) -> Option<&'static [Position]> {
        self.presets
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.positions)
    }

    /// Preset names in display order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.presets.iter().map(|f| f.name)
    }
}
