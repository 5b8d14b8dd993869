//! Presentational sections composed by the home page.
//!
//! Static content only; none of these read context or fetch data.

use leptos::prelude::*;

struct Stat {
    value: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: "12k+", label: "Books exchanged" },
    Stat { value: "3.4k", label: "Active students" },
    Stat { value: "85", label: "Campuses" },
    Stat { value: "60%", label: "Average savings" },
];

struct Step {
    title: &'static str,
    detail: &'static str,
}

const STEPS: [Step; 3] = [
    Step { title: "List your books", detail: "Snap a photo, set a price or mark it as a donation." },
    Step { title: "Connect with students", detail: "Chat with buyers on your campus and agree on a meetup." },
    Step { title: "Swap and save", detail: "Hand over the book and pass the savings on." },
];

const CATEGORIES: [(&str, &str); 6] = [
    ("Engineering", "📐"),
    ("Computer Science", "💻"),
    ("Medicine", "🩺"),
    ("Business", "📊"),
    ("Humanities", "📜"),
    ("Sciences", "🔬"),
];

struct FeaturedBook {
    title: &'static str,
    author: &'static str,
    course: &'static str,
    price: &'static str,
    condition: &'static str,
}

const FEATURED: [FeaturedBook; 4] = [
    FeaturedBook {
        title: "Clean Code",
        author: "Robert C. Martin",
        course: "Software Engineering",
        price: "$18",
        condition: "Like new",
    },
    FeaturedBook {
        title: "Calculus: Early Transcendentals",
        author: "James Stewart",
        course: "Mathematics I",
        price: "$35",
        condition: "Good",
    },
    FeaturedBook {
        title: "Campbell Biology",
        author: "Urry et al.",
        course: "Biology 101",
        price: "Free",
        condition: "Fair",
    },
    FeaturedBook {
        title: "Principles of Economics",
        author: "N. Gregory Mankiw",
        course: "Economics",
        price: "$22",
        condition: "Good",
    },
];

const ASSISTANT_PROMPTS: [&str; 3] = [
    "Which edition does my syllabus need?",
    "Summarise chapter 4 of my statistics text",
    "Find a cheaper copy of my reading list",
];

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Textbooks from students, for students"</h1>
            <p class="hero__subtitle">
                "Buy, sell and donate course books on your campus without the bookstore markup."
            </p>
            <div class="hero__actions">
                <a class="btn btn--primary" href="/books">
                    "Browse books"
                </a>
                <a class="btn btn--ghost" href="/messages">
                    "Join the community"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="stats">
            {STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="stats__item">
                            <span class="stats__value">{stat.value}</span>
                            <span class="stats__label">{stat.label}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}

#[component]
pub fn StudyAssistantSection() -> impl IntoView {
    view! {
        <section class="assistant">
            <h2 class="assistant__title">"Study assistant"</h2>
            <p class="assistant__subtitle">"Ask about editions, chapters and reading lists."</p>
            <ul class="assistant__prompts">
                {ASSISTANT_PROMPTS
                    .iter()
                    .map(|prompt| view! { <li class="assistant__prompt">{*prompt}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

#[component]
pub fn HowItWorksSection() -> impl IntoView {
    view! {
        <section class="how-it-works">
            <h2>"How it works"</h2>
            <ol class="how-it-works__steps">
                {STEPS
                    .iter()
                    .map(|step| {
                        view! {
                            <li class="how-it-works__step">
                                <h3>{step.title}</h3>
                                <p>{step.detail}</p>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </section>
    }
}

#[component]
pub fn CategoriesSection() -> impl IntoView {
    view! {
        <section class="categories">
            <h2>"Browse by subject"</h2>
            <div class="categories__grid">
                {CATEGORIES
                    .iter()
                    .map(|(name, icon)| {
                        view! {
                            <a class="categories__item" href="/books">
                                <span aria-hidden="true">{*icon}</span>
                                <span>{*name}</span>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn FeaturedBooksSection() -> impl IntoView {
    view! {
        <section class="featured">
            <h2>"Featured this week"</h2>
            <div class="featured__grid">
                {FEATURED
                    .iter()
                    .map(|book| {
                        view! {
                            <article class="book-card">
                                <h3 class="book-card__title">{book.title}</h3>
                                <p class="book-card__author">{book.author}</p>
                                <p class="book-card__course">{book.course}</p>
                                <div class="book-card__footer">
                                    <span class="book-card__price">{book.price}</span>
                                    <span class="book-card__condition">{book.condition}</span>
                                </div>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
