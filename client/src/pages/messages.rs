//! Community message board page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the message list once after hydration, then lets visitors append
//! posts. All transitions go through `MessageBoardState`; this module only
//! binds them to signals, async requests and the DOM.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::message_item::MessageItem;
use crate::net::types::NewMessage;
use crate::state::messages::{BoardView, MessageBoardState, SubmitAttempt};
use crate::util::dom::scroll_into_view;
use crate::util::transition::{ListTransition, ScrollBehavior, list_transition};

const GUIDELINES: [&str; 3] = [
    "Be respectful to all members",
    "Keep discussions book-related",
    "No spam or self-promotion",
];

/// Enter posts the message; Shift+Enter is left to the input.
fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Run `begin_submit` on the board, returning the payload to post.
///
/// An outstanding submission short-circuits without notifying subscribers.
fn start_submit(board: RwSignal<MessageBoardState>) -> Option<NewMessage> {
    if board.with_untracked(|s| s.sending) {
        return None;
    }
    match board.try_update(MessageBoardState::begin_submit)? {
        SubmitAttempt::Send(payload) => Some(payload),
        SubmitAttempt::InFlight | SubmitAttempt::Invalid => None,
    }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let board = RwSignal::new(MessageBoardState::default());
    let end_ref = NodeRef::<Div>::new();

    // SSR renders the loading state; the fetch runs once in the browser.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_messages().await;
        if let Err(e) = &result {
            log::warn!("message list fetch failed: {e}");
        }
        board.update(|s| s.finish_load(result));
    });

    let view_state = Memo::new(move |_| board.with(MessageBoardState::view));
    let rendered_ids = Memo::new(move |_| board.with(MessageBoardState::rendered_ids));

    // (rendered keys, directive derived from the previous keys)
    let transition = Memo::new(move |prev: Option<&(Vec<i64>, ListTransition)>| {
        let ids = rendered_ids.get();
        let previous = prev.map(|(ids, _)| ids.as_slice()).unwrap_or_default();
        let directive = list_transition(previous, &ids);
        (ids, directive)
    });

    Effect::new(move || {
        if transition.with(|(_, directive)| directive.scrolls()) {
            scroll_into_view(end_ref, ScrollBehavior::Smooth);
        }
    });

    let submit = move || {
        let Some(payload) = start_submit(board) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::post_message(&payload).await;
            if let Err(e) = &result {
                log::warn!("message post failed: {e}");
            }
            board.update(|s| s.finish_submit(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    let on_body_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            submit();
        }
    };

    let sending = move || board.with(|s| s.sending);

    view! {
        <div class="messages-page">
            <header class="messages-page__header">
                <h1>"BookBazaar Community"</h1>
                <p class="messages-page__subtitle">"Share your thoughts with fellow book lovers"</p>
            </header>

            <div class="message-board">
                <div class="message-board__list">
                    {move || match view_state.get() {
                        BoardView::Loading => {
                            view! {
                                <div class="message-board__center">
                                    <div class="spinner" role="status" aria-label="Loading messages"></div>
                                </div>
                            }
                                .into_any()
                        }
                        BoardView::Error => {
                            view! {
                                <div class="message-board__error">
                                    {board.with_untracked(|s| s.load_error.as_ref().map(ToString::to_string))}
                                </div>
                            }
                                .into_any()
                        }
                        BoardView::ReadyEmpty => {
                            view! {
                                <div class="message-board__center message-board__empty">
                                    "No messages yet. Be the first to share!"
                                </div>
                            }
                                .into_any()
                        }
                        BoardView::ReadyWithMessages => {
                            let directive = transition.with(|(_, directive)| directive.clone());
                            board
                                .with_untracked(|s| s.messages.clone())
                                .into_iter()
                                .enumerate()
                                .map(|(i, msg)| view! { <MessageItem message=msg enter_delay_ms=directive.delay_for(i)/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                    <div class="message-board__end" node_ref=end_ref></div>
                </div>

                <form class="message-board__form" on:submit=on_submit>
                    <Show when=move || board.with(|s| s.form_error.is_some())>
                        <div class="message-board__form-error">
                            {move || board.with(|s| s.form_error.as_ref().map(ToString::to_string))}
                        </div>
                    </Show>

                    <input
                        class="message-board__input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || board.with(|s| s.sender.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            board.update(|s| s.sender = value);
                        }
                        disabled=sending
                    />

                    <div class="message-board__compose">
                        <input
                            class="message-board__input message-board__input--body"
                            type="text"
                            placeholder="Share your book thoughts..."
                            prop:value=move || board.with(|s| s.body.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                board.update(|s| s.body = value);
                            }
                            on:keydown=on_body_keydown
                            disabled=sending
                        />
                        <button
                            class="btn btn--primary message-board__send"
                            type="submit"
                            disabled=move || !board.with(MessageBoardState::can_submit)
                        >
                            {move || if sending() { "Sending..." } else { "Post" }}
                        </button>
                    </div>
                </form>
            </div>

            <section class="guidelines">
                <h2 class="guidelines__title">"Community Guidelines"</h2>
                <ul class="guidelines__list">
                    {GUIDELINES.iter().map(|rule| view! { <li>{*rule}</li> }).collect::<Vec<_>>()}
                </ul>
            </section>
        </div>
    }
}
