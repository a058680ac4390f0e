//! Navigation: the site's pages and the mobile menu toggle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Collapsed/expanded condition of the mobile navigation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Collapsed,
    Expanded,
}

impl MenuState {
    /// Flip between collapsed and expanded.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        };
    }

    /// A link inside the menu was followed; the menu closes behind it.
    pub fn follow_link(&mut self) {
        *self = Self::Collapsed;
    }

    #[must_use]
    pub fn toggled(mut self) -> Self {
        self.toggle();
        self
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// A routable page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Services,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Self; 4] = [Self::Home, Self::Services, Self::About, Self::Contact];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Services => "/services",
            Self::About => "/about",
            Self::Contact => "/contact",
        }
    }

    /// Label used in navigation links.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|page| page.path() == normalized)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub page: Page,
    pub label: &'static str,
    pub href: &'static str,
    /// The link points at the page being viewed.
    pub active: bool,
}

/// Navigation bar shared by every page: brand link, desktop links, and the
/// mobile menu with its toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub current: Page,
    pub menu: MenuState,
}

impl Navigation {
    #[must_use]
    pub fn new(current: Page, menu: MenuState) -> Self {
        Self { current, menu }
    }

    fn link(&self, page: Page) -> NavLink {
        NavLink {
            page,
            label: page.title(),
            href: page.path(),
            active: page == self.current,
        }
    }

    /// Links shown in the wide-screen bar. Home is reached through the brand.
    #[must_use]
    pub fn links(&self) -> Vec<NavLink> {
        [Page::Services, Page::About, Page::Contact]
            .into_iter()
            .map(|page| self.link(page))
            .collect()
    }

    /// Links listed in the expanded mobile menu. Empty while collapsed.
    #[must_use]
    pub fn mobile_links(&self) -> Vec<NavLink> {
        if !self.menu.is_expanded() {
            return Vec::new();
        }
        Page::ALL.into_iter().map(|page| self.link(page)).collect()
    }

    /// State the menu will be in after the toggle button is pressed.
    #[must_use]
    pub fn after_toggle(&self) -> MenuState {
        self.menu.toggled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_collapsed() {
        assert_eq!(MenuState::default(), MenuState::Collapsed);
    }

    #[test]
    fn should_return_to_collapsed_after_two_toggles() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_expanded());
        menu.toggle();
        assert_eq!(menu, MenuState::Collapsed);
    }

    #[test]
    fn should_collapse_when_link_followed() {
        let mut menu = MenuState::Expanded;
        menu.follow_link();
        assert_eq!(menu, MenuState::Collapsed);

        menu.follow_link();
        assert_eq!(menu, MenuState::Collapsed);
    }

    #[test]
    fn should_map_paths_to_pages() {
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/services/"), Some(Page::Services));
        assert_eq!(Page::from_path("/contact"), Some(Page::Contact));
        assert_eq!(Page::from_path("/privacy"), None);
    }

    #[test]
    fn should_hide_mobile_links_while_collapsed() {
        let nav = Navigation::new(Page::About, MenuState::Collapsed);
        assert!(nav.mobile_links().is_empty());
        assert_eq!(nav.links().len(), 3);
    }

    #[test]
    fn should_list_every_page_in_expanded_mobile_menu() {
        let nav = Navigation::new(Page::About, MenuState::Expanded);
        let links = nav.mobile_links();
        let labels: Vec<_> = links.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["Home", "Services", "About", "Contact"]);
        assert!(links.iter().filter(|l| l.active).all(|l| l.page == Page::About));
    }

    #[test]
    fn should_report_state_after_toggle() {
        let nav = Navigation::new(Page::Home, MenuState::Collapsed);
        assert_eq!(nav.after_toggle(), MenuState::Expanded);
    }
}
