use serde::{Deserialize, Serialize};

/// Which sides of the parent's resize border a filter lets through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSides {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl BorderSides {
    pub const ALL: Self = Self {
        left: true,
        right: true,
        top: true,
        bottom: true,
    };

    pub const NONE: Self = Self {
        left: false,
        right: false,
        top: false,
        bottom: false,
    };

    pub const fn only_top() -> Self {
        Self {
            top: true,
            ..Self::NONE
        }
    }

    pub const fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

impl Default for BorderSides {
    fn default() -> Self {
        Self::ALL
    }
}
