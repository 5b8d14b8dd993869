//! Site footer shown under the home page sections.

use leptos::prelude::*;

const FOOTER_LINKS: [(&str, &str); 4] = [
    ("Community", "/messages"),
    ("Donate", "/donate"),
    ("List Books", "/books/add"),
    ("Settings", "/settings"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__name">"BookBazaar"</span>
                <span class="footer__tagline">"Student Book Exchange"</span>
            </div>
            <nav class="footer__links">
                {FOOTER_LINKS
                    .iter()
                    .map(|(label, href)| view! { <a href=*href>{*label}</a> })
                    .collect::<Vec<_>>()}
            </nav>
        </footer>
    }
}
