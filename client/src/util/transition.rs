//! Entrance-transition directives for lists and the navbar.
//!
//! These are pure functions of what was rendered before and what is rendered
//! now. Components turn the result into CSS classes and inline
//! `animation-delay` values; the keyframes live in the stylesheet.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

/// Delay between consecutive items of a staggered entrance.
pub const STAGGER_MS: u32 = 100;
/// Message items fade in from 20px below over 500ms.
pub const MESSAGE_ENTER_MS: u32 = 500;
/// Navbar items drop in from 20px above over 600ms.
pub const NAV_ENTER_MS: u32 = 600;

/// How to bring the newest entry into view after a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

/// What the message list should do after its contents were re-rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListTransition {
    /// Rendered keys are unchanged.
    Idle,
    /// Replay the entrance on every rendered item, then scroll to the end.
    Enter { delays_ms: Vec<u32>, scroll: ScrollBehavior },
}

impl ListTransition {
    /// Entrance delay for the item at `index`, if an entrance is playing.
    #[must_use]
    pub fn delay_for(&self, index: usize) -> Option<u32> {
        match self {
            Self::Idle => None,
            Self::Enter { delays_ms, .. } => delays_ms.get(index).copied(),
        }
    }

    #[must_use]
    pub fn scrolls(&self) -> bool {
        matches!(self, Self::Enter { .. })
    }
}

/// Compare previously rendered keys with the new ones.
#[must_use]
pub fn list_transition(previous: &[i64], next: &[i64]) -> ListTransition {
    if previous == next {
        return ListTransition::Idle;
    }
    ListTransition::Enter { delays_ms: stagger_delays(next.len(), STAGGER_MS), scroll: ScrollBehavior::Smooth }
}

/// Per-item start offsets for a staggered entrance of `count` items.
#[must_use]
pub fn stagger_delays(count: usize, stagger_ms: u32) -> Vec<u32> {
    (0..count).map(|i| stagger_delay(i, stagger_ms)).collect()
}

/// Start offset of the item at `index` in a staggered entrance.
#[must_use]
pub fn stagger_delay(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(stagger_ms)
}

/// Inline style fragment for one staggered item.
#[must_use]
pub fn delay_style(delay_ms: u32) -> String {
    format!("animation-delay: {delay_ms}ms")
}
