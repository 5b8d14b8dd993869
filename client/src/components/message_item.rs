//! One rendered entry of the community message board.

use leptos::prelude::*;

use crate::net::types::Message;
use crate::util::time_format::format_time;
use crate::util::transition::delay_style;

/// Message card showing sender, formatted time and body.
///
/// `enter_delay_ms` is set while the list's entrance transition is playing.
#[component]
pub fn MessageItem(message: Message, enter_delay_ms: Option<u32>) -> impl IntoView {
    let Message { sender, message: body, timestamp, .. } = message;
    let time = format_time(&timestamp);
    let style = enter_delay_ms.map(delay_style).unwrap_or_default();

    view! {
        <div class="message-item" class:message-item--enter=enter_delay_ms.is_some() style=style>
            <div class="message-item__card">
                <div class="message-item__meta">
                    <span class="message-item__sender">{sender}</span>
                    <time class="message-item__time" datetime=timestamp>
                        {time}
                    </time>
                </div>
                <p class="message-item__body">{body}</p>
            </div>
        </div>
    }
}
