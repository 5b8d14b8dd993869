//! Marketing home page composed from deferred sections.
//!
//! ARCHITECTURE
//! ============
//! `HOME_SECTIONS` is the whole composition: six records rendered in order.
//! Each section mounts only after the shell has painted in the browser, so
//! SSR emits just the reserved placeholders. The page holds no state and
//! fetches nothing.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::home_sections::{
    CategoriesSection, FeaturedBooksSection, HeroSection, HowItWorksSection, StatsSection, StudyAssistantSection,
};
use crate::components::lazy_section::LazySection;

/// Minimum height reserved for a section before its content mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderSize {
    /// 80% of the viewport.
    Tall,
    /// Half the viewport.
    Medium,
    /// A fifth of the viewport.
    Compact,
}

impl PlaceholderSize {
    #[must_use]
    pub fn min_height(self) -> &'static str {
        match self {
            Self::Tall => "80vh",
            Self::Medium => "50vh",
            Self::Compact => "20vh",
        }
    }
}

/// One entry in the home-page composition.
#[derive(Clone, Copy)]
pub struct HomeSection {
    pub name: &'static str,
    pub placeholder: PlaceholderSize,
    pub load: fn() -> AnyView,
}

impl std::fmt::Debug for HomeSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeSection")
            .field("name", &self.name)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

pub const HOME_SECTIONS: [HomeSection; 6] = [
    HomeSection { name: "hero", placeholder: PlaceholderSize::Tall, load: load_hero },
    HomeSection { name: "stats", placeholder: PlaceholderSize::Compact, load: load_stats },
    HomeSection { name: "assistant", placeholder: PlaceholderSize::Medium, load: load_assistant },
    HomeSection { name: "how-it-works", placeholder: PlaceholderSize::Compact, load: load_how_it_works },
    HomeSection { name: "categories", placeholder: PlaceholderSize::Compact, load: load_categories },
    HomeSection { name: "featured", placeholder: PlaceholderSize::Compact, load: load_featured },
];

fn load_hero() -> AnyView {
    view! { <HeroSection/> }.into_any()
}

fn load_stats() -> AnyView {
    view! { <StatsSection/> }.into_any()
}

fn load_assistant() -> AnyView {
    view! { <StudyAssistantSection/> }.into_any()
}

fn load_how_it_works() -> AnyView {
    view! { <HowItWorksSection/> }.into_any()
}

fn load_categories() -> AnyView {
    view! { <CategoriesSection/> }.into_any()
}

fn load_featured() -> AnyView {
    view! { <FeaturedBooksSection/> }.into_any()
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <main class="home-page__main">
                {HOME_SECTIONS.iter().map(|section| view! { <LazySection section=*section/> }).collect::<Vec<_>>()}
            </main>
            <Footer/>
        </div>
    }
}
