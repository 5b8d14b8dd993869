use super::*;

// =============================================================
// list_transition
// =============================================================

#[test]
fn unchanged_keys_are_idle() {
    assert_eq!(list_transition(&[1, 2, 3], &[1, 2, 3]), ListTransition::Idle);
    assert_eq!(list_transition(&[], &[]), ListTransition::Idle);
}

#[test]
fn initial_load_enters_every_item_in_order() {
    let transition = list_transition(&[], &[4, 5, 6]);
    assert_eq!(
        transition,
        ListTransition::Enter { delays_ms: vec![0, 100, 200], scroll: ScrollBehavior::Smooth }
    );
}

#[test]
fn append_replays_entrance_for_whole_list() {
    let transition = list_transition(&[1, 2], &[1, 2, 3]);
    assert_eq!(transition.delay_for(0), Some(0));
    assert_eq!(transition.delay_for(2), Some(200));
    assert_eq!(transition.delay_for(3), None);
    assert!(transition.scrolls());
}

#[test]
fn idle_has_no_delays_and_no_scroll() {
    let transition = ListTransition::Idle;
    assert_eq!(transition.delay_for(0), None);
    assert!(!transition.scrolls());
}

#[test]
fn load_failure_clearing_list_still_counts_as_change() {
    let transition = list_transition(&[1], &[]);
    assert_eq!(transition, ListTransition::Enter { delays_ms: Vec::new(), scroll: ScrollBehavior::Smooth });
}

// =============================================================
// stagger helpers
// =============================================================

#[test]
fn stagger_delays_are_multiples_of_step() {
    assert_eq!(stagger_delays(4, 100), vec![0, 100, 200, 300]);
    assert!(stagger_delays(0, 100).is_empty());
}

#[test]
fn stagger_delay_saturates_instead_of_overflowing() {
    assert_eq!(stagger_delay(3, 100), 300);
    assert_eq!(stagger_delay(usize::MAX, 100), u32::MAX);
}

#[test]
fn delay_style_formats_milliseconds() {
    assert_eq!(delay_style(300), "animation-delay: 300ms");
}
