//! Deferred mount wrapper for home-page sections.

use leptos::prelude::*;

use crate::pages::home::HomeSection;

/// Renders a min-height placeholder until the browser has painted, then swaps
/// in the section's content. Never server-renders the section itself.
#[component]
pub fn LazySection(section: HomeSection) -> impl IntoView {
    let mounted = RwSignal::new(false);

    // Effects only run client-side; wait one frame so the shell paints first.
    Effect::new(move || {
        request_animation_frame(move || mounted.set(true));
    });

    let load = section.load;
    let min_height = section.placeholder.min_height();

    view! {
        <div class="lazy-section" data-section=section.name>
            <Show
                when=move || mounted.get()
                fallback=move || view! { <div class="lazy-section__placeholder" style:min-height=min_height></div> }
            >
                {load()}
            </Show>
        </div>
    }
}
