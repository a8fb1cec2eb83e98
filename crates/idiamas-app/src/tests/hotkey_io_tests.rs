use std::collections::VecDeque;

use idiamas_types::{AppEvent, HotkeyAction};
use tokio_util::sync::CancellationToken;

use crate::io::forward_actions;

#[test]
fn test_actions_map_to_events() {
    let (tx, rx) = kanal::unbounded();
    let cancel = CancellationToken::new();
    let mut script: VecDeque<Option<HotkeyAction>> = VecDeque::from([
        None,
        Some(HotkeyAction::Translate),
        None,
        Some(HotkeyAction::Translate),
    ]);

    let stop = cancel.clone();
    forward_actions(
        |_| {
            let next = script.pop_front();
            if script.is_empty() {
                stop.cancel();
            }
            next.flatten()
        },
        &tx,
        &cancel,
    );

    let events: Vec<AppEvent> = std::iter::from_fn(|| rx.try_recv().ok().flatten()).collect();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| matches!(e, AppEvent::TriggerTranslate)));
}

#[test]
fn test_quit_stops_listener() {
    let (tx, rx) = kanal::unbounded();
    let cancel = CancellationToken::new();
    let mut script = VecDeque::from([HotkeyAction::Quit, HotkeyAction::Translate]);

    forward_actions(|_| script.pop_front(), &tx, &cancel);

    assert!(matches!(rx.try_recv(), Ok(Some(AppEvent::Quit))));
    assert!(matches!(rx.try_recv(), Ok(None)));
    assert_eq!(script.len(), 1);
}

#[test]
fn test_cancelled_before_start() {
    let (tx, rx) = kanal::unbounded();
    let cancel = CancellationToken::new();
    cancel.cancel();

    forward_actions(|_| Some(HotkeyAction::Translate), &tx, &cancel);

    assert!(matches!(rx.try_recv(), Ok(None)));
}
