//! Panel selection, profile menu overlay, and route choice.
//!
//! DESIGN
//! ======
//! The active tab and the menu flag are orthogonal: selecting a tab never
//! touches the menu, and every menu item closes the menu. All transitions are
//! total over closed enums and cannot fail.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// One of the three mutually exclusive content panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Routes,
    Updates,
    Places,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Routes, Self::Updates, Self::Places];

    /// Wire name stored with feedback records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Routes => "routes",
            Self::Updates => "updates",
            Self::Places => "places",
        }
    }
}

/// Entries of the profile dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Profile,
    Settings,
    Logout,
}

/// Which panel is shown and whether the profile menu is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    active_tab: Tab,
    profile_menu_open: bool,
}

impl ViewState {
    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    #[must_use]
    pub fn profile_menu_open(&self) -> bool {
        self.profile_menu_open
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn toggle_profile_menu(&mut self) {
        self.profile_menu_open = !self.profile_menu_open;
    }

    pub fn close_profile_menu(&mut self) {
        self.profile_menu_open = false;
    }
}

/// Route preference shown on the routes panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RouteChoice {
    Fast,
    #[default]
    Calm,
}

impl RouteChoice {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Calm => "calm",
        }
    }
}
