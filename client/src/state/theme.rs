//! UI theme state.
//!
//! DESIGN
//! ======
//! Two looks only: the public civic look and the denser "monitoring" look used
//! by control-room screens. The value lives in `RwSignal<Theme>` context; the
//! browser side effects (`data-theme`, `localStorage`) live in `util::theme`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// Active UI theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Public,
    Monitoring,
}

impl Theme {
    /// Value stored in `localStorage` and written to `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Monitoring => "monitoring",
        }
    }

    /// Parse a stored value. Missing or unknown values fall back to `Public`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("monitoring") => Self::Monitoring,
            _ => Self::Public,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Public => Self::Monitoring,
            Self::Monitoring => Self::Public,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
