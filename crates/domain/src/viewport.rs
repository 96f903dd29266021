use serde::Serialize;

/// Logical widths strictly below this are narrow.
pub const NARROW_BREAKPOINT: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportMode {
    Narrow,
    #[default]
    Wide,
}

impl ViewportMode {
    /// Non-finite widths never compare below the breakpoint and fall back to `Wide`.
    pub fn from_width(width: f32) -> Self {
        if width < NARROW_BREAKPOINT {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Self::Narrow
    }
}
