#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Following any navigation link dismisses the overlay.
    pub fn after_link_selected(self) -> Self {
        Self::Closed
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Closed => "Open menu",
            Self::Open => "Close menu",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Closed => "☰",
            Self::Open => "✕",
        }
    }
}
