//! Local navbar state and the fixed link tables it renders.
//!
//! DESIGN
//! ======
//! No login flow is wired, so `logged_in` starts true and the identity shown
//! in the user menu is a static placeholder. The search string is held for
//! the input only and never submitted.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A single navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Short glyph rendered before the label.
    pub icon: &'static str,
}

/// Identity fields shown in the user menu header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserIdentity {
    pub name: &'static str,
    pub program: &'static str,
    pub email: &'static str,
    pub initials: &'static str,
}

pub const PLACEHOLDER_IDENTITY: UserIdentity = UserIdentity {
    name: "Alex Student",
    program: "Computer Science - 3rd Year",
    email: "alex@university.edu",
    initials: "AS",
};

/// Links shown in the bar when logged in, in display order.
pub const MEMBER_LINKS: [NavLink; 4] = [
    NavLink { label: "List Books", href: "/books/add", icon: "+" },
    NavLink { label: "Donate", href: "/donate", icon: "🎁" },
    NavLink { label: "Wishlist", href: "/wishlist", icon: "♡" },
    NavLink { label: "Messages", href: "/messages", icon: "💬" },
];

/// Links inside the user menu.
pub const USER_MENU_LINKS: [NavLink; 3] = [
    NavLink { label: "Profile", href: "/profile", icon: "👤" },
    NavLink { label: "My Books", href: "/my-books", icon: "🎓" },
    NavLink { label: "Settings", href: "/settings", icon: "⚙" },
];

/// Links shown when logged out.
pub const GUEST_LINKS: [NavLink; 2] = [
    NavLink { label: "Login", href: "/login", icon: "" },
    NavLink { label: "Join Community", href: "/signup", icon: "" },
];

#[derive(Clone, Debug)]
pub struct NavState {
    pub logged_in: bool,
    pub search_query: String,
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self { logged_in: true, search_query: String::new(), menu_open: false }
    }
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Links for the current session state.
    #[must_use]
    pub fn visible_links(&self) -> &'static [NavLink] {
        links_for(self.logged_in)
    }
}

#[must_use]
pub fn links_for(logged_in: bool) -> &'static [NavLink] {
    if logged_in { &MEMBER_LINKS } else { &GUEST_LINKS }
}
