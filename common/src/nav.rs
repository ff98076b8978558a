//! Site pages, active-link highlighting and the open/closed state of the
//! mobile drawer and dashboard sidebar.

use crate::error::Result;
use crate::keys;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Studio,
    Dashboard,
    AdminDashboard,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::Studio, Page::Dashboard, Page::AdminDashboard]
    }

    pub fn href(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Studio => "design-studio.html",
            Page::Dashboard => "dashboard.html",
            Page::AdminDashboard => "admin-dashboard.html",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Studio => "Design Studio",
            Page::Dashboard => "Dashboard",
            Page::AdminDashboard => "Admin",
        }
    }

    /// Page for a URL path. Unknown or empty paths map to the home page.
    pub fn from_path(path: &str) -> Page {
        let last = path.split('/').next_back().unwrap_or_default();
        let file = last.split(['#', '?']).next().unwrap_or_default();
        Page::all()
            .iter()
            .copied()
            .find(|p| p.href() == file)
            .unwrap_or(Page::Home)
    }

    /// The nav link highlighted while this page is open.
    pub fn nav_target(self) -> Page {
        match self {
            Page::AdminDashboard => Page::Dashboard,
            other => other,
        }
    }

    pub fn is_link_active(self, link: Page) -> bool {
        self.nav_target() == link
    }
}

/// Remember the last nav link the visitor followed.
pub fn remember_active_page<S: KeyValueStore + ?Sized>(store: &S, page: Page) -> Result<()> {
    store.set(keys::ACTIVE_PAGE, page.href())
}

pub fn last_active_page<S: KeyValueStore + ?Sized>(store: &S) -> Option<Page> {
    store
        .get(keys::ACTIVE_PAGE)
        .map(|href| Page::from_path(&href))
}

/// Drawer and sidebar visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellState {
    pub nav_open: bool,
    pub sidebar_open: bool,
}

impl ShellState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Following a drawer link closes the drawer.
    pub fn follow_link(&mut self) {
        self.nav_open = false;
    }

    pub fn escape(&mut self) {
        self.nav_open = false;
        self.sidebar_open = false;
    }

    /// Settled viewport width after a resize burst.
    pub fn resized(&mut self, width_px: u32, mobile_breakpoint_px: u32) {
        if width_px > mobile_breakpoint_px {
            self.sidebar_open = false;
        }
    }
}
