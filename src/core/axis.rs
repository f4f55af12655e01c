use serde::{Deserialize, Serialize};

/// Which axis label sets are computed and drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    None,
    X,
    Y,
    #[default]
    XY,
}

impl Axis {
    #[must_use]
    pub const fn has_x(self) -> bool {
        matches!(self, Self::X | Self::XY)
    }

    #[must_use]
    pub const fn has_y(self) -> bool {
        matches!(self, Self::Y | Self::XY)
    }
}
