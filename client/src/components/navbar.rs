//! Sticky site navigation bar with search box and user menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds no backend data. The search input and menu toggle are local signals;
//! nothing here is submitted anywhere. On mount every element marked
//! `nav-item` plays a one-time staggered drop-in.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::nav::{NavLink, NavState, PLACEHOLDER_IDENTITY, USER_MENU_LINKS, links_for};
use crate::util::transition::{STAGGER_MS, delay_style, stagger_delay};

/// Brand, search and the link group always animate; links and avatar follow.
const FIXED_MARKED_ITEMS: usize = 3;

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let entered = RwSignal::new(false);

    // Effects only run in the browser, after the first paint of the bar.
    Effect::new(move || entered.set(true));

    let logged_in = session_flag(nav);
    let link_list = session_links(logged_in);

    let marked = FIXED_MARKED_ITEMS + link_list.get_untracked().len() + 1;
    let delay_at = |index: usize| delay_style(stagger_delay(index, STAGGER_MS));

    // Rebuilt anchors replay the entrance, so only a session change may re-run this.
    let links = move || {
        link_list
            .get()
            .iter()
            .enumerate()
            .map(|(i, link)| {
                view! { <NavAnchor link=*link style=delay_at(FIXED_MARKED_ITEMS + i) entered=entered/> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a
                    href="/"
                    class="navbar__brand nav-item"
                    class:nav-item--entered=move || entered.get()
                    style=delay_at(0)
                >
                    <span class="navbar__logo" aria-hidden="true">"🎓"</span>
                    <span class="navbar__brand-text">
                        <span class="navbar__brand-name">"BookBazaar"</span>
                        <span class="navbar__brand-tagline">"Student Book Exchange"</span>
                    </span>
                </a>

                <div class="navbar__search nav-item" class:nav-item--entered=move || entered.get() style=delay_at(1)>
                    <span class="navbar__search-icon" aria-hidden="true">"⌕"</span>
                    <input
                        class="navbar__search-input"
                        type="search"
                        placeholder="Search textbooks, subjects, courses..."
                        prop:value=move || nav.with(|n| n.search_query.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            nav.update(|n| n.search_query = value);
                        }
                    />
                </div>

                <div class="navbar__actions nav-item" class:nav-item--entered=move || entered.get() style=delay_at(2)>
                    {links}
                    <Show when=move || logged_in.get()>
                        <UserMenu nav=nav entered=entered style=delay_at(marked - 1)/>
                    </Show>
                </div>
            </div>
        </nav>
    }
}

/// Login flag isolated from search and menu updates.
fn session_flag(nav: RwSignal<NavState>) -> Memo<bool> {
    Memo::new(move |_| nav.with(|n| n.logged_in))
}

fn session_links(logged_in: Memo<bool>) -> Memo<&'static [NavLink]> {
    Memo::new(move |_| links_for(logged_in.get()))
}

#[component]
fn NavAnchor(link: NavLink, style: String, entered: RwSignal<bool>) -> impl IntoView {
    view! {
        <a
            href=link.href
            class="btn btn--ghost navbar__link nav-item"
            class:nav-item--entered=move || entered.get()
            style=style
        >
            {(!link.icon.is_empty())
                .then(|| view! { <span class="navbar__link-icon" aria-hidden="true">{link.icon}</span> })}
            <span class="navbar__link-label">{link.label}</span>
        </a>
    }
}

/// Avatar button with a dropdown of placeholder identity and account links.
#[component]
fn UserMenu(nav: RwSignal<NavState>, entered: RwSignal<bool>, style: String) -> impl IntoView {
    let identity = PLACEHOLDER_IDENTITY;

    view! {
        <div class="user-menu">
            <button
                class="user-menu__avatar nav-item"
                class:nav-item--entered=move || entered.get()
                style=style
                aria-haspopup="menu"
                aria-expanded=move || nav.with(|n| n.menu_open).to_string()
                on:click=move |_| nav.update(NavState::toggle_menu)
            >
                {identity.initials}
            </button>
            <Show when=move || nav.with(|n| n.menu_open)>
                <div class="user-menu__content" role="menu">
                    <div class="user-menu__label">
                        <p class="user-menu__name">{identity.name}</p>
                        <p class="user-menu__meta">{identity.program}</p>
                        <p class="user-menu__meta">{identity.email}</p>
                    </div>
                    <hr class="user-menu__separator"/>
                    {USER_MENU_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="user-menu__item"
                                    role="menuitem"
                                    href=link.href
                                    on:click=move |_| nav.update(NavState::close_menu)
                                >
                                    <span aria-hidden="true">{link.icon}</span>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <hr class="user-menu__separator"/>
                    // No session backend yet; logging out only closes the menu.
                    <button
                        class="user-menu__item"
                        role="menuitem"
                        on:click=move |_| nav.update(NavState::close_menu)
                    >
                        "Log out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
