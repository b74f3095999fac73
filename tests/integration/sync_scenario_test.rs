//! End-to-end sync scenarios driven through `SonicPlayer`

use super::helpers::{recording_player, tick_at, two_segment_table};
use sonic_sync::player::{LoopState, MediaEvent, PlayerOptions, SegmentTransition};
use sonic_sync::timeline::{default_table, BoundaryRule, Intensity, SegmentTable, VibrationSegment};

#[test]
fn time_sequence_produces_edge_actions_only() {
    let (mut player, calls) = recording_player(two_segment_table(), PlayerOptions::default());
    player.play();

    let mut log = Vec::new();
    for t in [5.9, 6.0, 6.05, 6.1, 6.2, 10.4, 10.5, 11.0, 12.0, 12.1] {
        let before = calls.borrow().len();
        tick_at(&mut player, t);
        for call in &calls.borrow()[before..] {
            log.push((call.clone(), t));
        }
    }

    assert_eq!(
        log,
        vec![
            (vec![1200], 6.0),
            (vec![0], 6.2),
            (vec![1500], 10.5),
            (vec![0], 12.1),
        ]
    );
}

#[test]
fn transitions_report_entry_and_exit() {
    let (mut player, _calls) = recording_player(two_segment_table(), PlayerOptions::default());
    player.play();

    assert!(tick_at(&mut player, 5.0).is_empty());
    assert_eq!(
        tick_at(&mut player, 6.0),
        vec![SegmentTransition::Entered {
            id: "a".to_string(),
            previous: None
        }]
    );
    assert_eq!(player.snapshot().active_segment.map(|s| s.id), Some("a".to_string()));
    assert_eq!(
        tick_at(&mut player, 7.0),
        vec![SegmentTransition::Exited { id: "a".to_string() }]
    );
    assert!(player.snapshot().active_segment.is_none());
}

#[test]
fn seek_into_segment_starts_on_next_tick() {
    let (mut player, calls) = recording_player(two_segment_table(), PlayerOptions::default());
    player.play();
    tick_at(&mut player, 1.0);

    assert!(player.seek(11.0 / 40.0));
    // Resolution waits for the tick
    assert!(calls.borrow().is_empty());

    let now = player.clock().current_time();
    tick_at(&mut player, now);
    assert_eq!(*calls.borrow(), vec![vec![1500]]);
}

#[test]
fn jump_between_segments_starts_new_pattern_directly() {
    let table = SegmentTable::new(
        vec![
            VibrationSegment::new("x", 1.0, 2.0, 300, "X", Intensity::Low),
            VibrationSegment::new("y", 2.5, 3.0, vec![100, 50, 100], "Y", Intensity::Medium),
        ],
        BoundaryRule::Inclusive,
    )
    .unwrap();
    let (mut player, calls) = recording_player(table, PlayerOptions::default());
    player.play();

    tick_at(&mut player, 1.5);
    let transitions = tick_at(&mut player, 2.7);

    assert_eq!(
        transitions,
        vec![SegmentTransition::Entered {
            id: "y".to_string(),
            previous: Some("x".to_string())
        }]
    );
    assert_eq!(*calls.borrow(), vec![vec![300], vec![100, 50, 100]]);
}

#[test]
fn disabling_haptics_mid_segment_stops_output_once() {
    let (mut player, calls) = recording_player(two_segment_table(), PlayerOptions::default());
    player.play();
    tick_at(&mut player, 10.6);

    player.toggle_haptics();
    assert_eq!(*calls.borrow(), vec![vec![1500], vec![0]]);

    // Visual state continues; no more actuator traffic
    tick_at(&mut player, 11.0);
    tick_at(&mut player, 12.5);
    assert_eq!(calls.borrow().len(), 2);
    assert!(!player.snapshot().haptics_enabled);
}

#[test]
fn reenabling_haptics_waits_for_next_entry() {
    let (mut player, calls) = recording_player(two_segment_table(), PlayerOptions::default());
    player.play();
    player.toggle_haptics();
    tick_at(&mut player, 6.0);
    assert!(calls.borrow().is_empty());

    player.toggle_haptics();
    tick_at(&mut player, 6.05);
    assert!(calls.borrow().is_empty());

    tick_at(&mut player, 7.0);
    tick_at(&mut player, 10.5);
    assert_eq!(*calls.borrow(), vec![vec![0], vec![1500]]);
}

#[test]
fn pause_inside_segment_cancels_output() {
    let (mut player, calls) = recording_player(two_segment_table(), PlayerOptions::default());
    player.play();
    tick_at(&mut player, 11.0);

    let exited = player.pause();
    assert_eq!(exited, Some(SegmentTransition::Exited { id: "b".to_string() }));
    assert_eq!(player.snapshot().loop_state, LoopState::Stopped);
    assert_eq!(calls.borrow().last(), Some(&vec![0]));

    // Frames requested before the pause are stale
    let before = calls.borrow().len();
    tick_at(&mut player, 11.5);
    assert_eq!(calls.borrow().len(), before);
}

#[test]
fn resume_in_same_segment_restarts_pattern() {
    let (mut player, calls) = recording_player(two_segment_table(), PlayerOptions::default());
    player.play();
    tick_at(&mut player, 11.0);
    player.pause();
    player.play();
    tick_at(&mut player, 11.2);

    assert_eq!(*calls.borrow(), vec![vec![1500], vec![0], vec![1500]]);
}

#[test]
fn end_of_media_loops_when_enabled() {
    let options = PlayerOptions {
        haptics_enabled: true,
        loop_playback: true,
    };
    let (mut player, _calls) = recording_player(two_segment_table(), options);
    player.play();
    tick_at(&mut player, 39.9);

    player.clock_mut().media_mut().time = 40.0;
    player.clock_mut().media_mut().events.push_back(MediaEvent::Ended);
    player.pump_media_events();

    assert!(player.is_playing());
    assert_eq!(player.clock().current_time(), 0.0);
    assert_eq!(player.snapshot().loop_state, LoopState::Running);
}

#[test]
fn end_of_media_stops_without_loop() {
    let (mut player, calls) = recording_player(two_segment_table(), PlayerOptions::default());
    player.play();
    tick_at(&mut player, 11.0);

    player.clock_mut().media_mut().events.push_back(MediaEvent::Ended);
    let transitions = player.pump_media_events();

    assert_eq!(transitions, vec![SegmentTransition::Exited { id: "b".to_string() }]);
    assert!(!player.is_playing());
    assert_eq!(calls.borrow().last(), Some(&vec![0]));
}

#[test]
fn refused_play_stays_paused_and_silent() {
    let (mut player, calls) = recording_player(two_segment_table(), PlayerOptions::default());
    player.clock_mut().media_mut().refuse_play = true;
    player.play();

    assert!(!player.is_playing());
    assert_eq!(player.snapshot().loop_state, LoopState::Stopped);
    assert!(tick_at(&mut player, 6.0).is_empty());
    assert!(calls.borrow().is_empty());
}

#[test]
fn teardown_cancels_and_is_idempotent() {
    let (mut player, calls) = recording_player(two_segment_table(), PlayerOptions::default());
    player.play();
    tick_at(&mut player, 6.0);

    player.teardown();
    player.teardown();
    assert_eq!(*calls.borrow(), vec![vec![1200], vec![0]]);

    player.play();
    assert!(!player.is_playing());
}

#[test]
fn dropping_the_player_cancels_output() {
    let (mut player, calls) = recording_player(two_segment_table(), PlayerOptions::default());
    player.play();
    tick_at(&mut player, 6.0);
    drop(player);

    assert_eq!(calls.borrow().last(), Some(&vec![0]));
}

#[test]
fn independent_players_do_not_share_state() {
    let (mut first, first_calls) = recording_player(two_segment_table(), PlayerOptions::default());
    let (mut second, second_calls) = recording_player(two_segment_table(), PlayerOptions::default());
    first.play();
    second.play();

    tick_at(&mut first, 6.0);
    tick_at(&mut second, 1.0);

    assert_eq!(*first_calls.borrow(), vec![vec![1200]]);
    assert!(second_calls.borrow().is_empty());
    assert!(second.snapshot().active_segment.is_none());
}

#[test]
fn built_in_timeline_drives_every_segment_once() {
    let (mut player, calls) = recording_player(default_table(), PlayerOptions::default());
    player.play();

    let mut t = 0.0;
    while t <= 40.0 {
        tick_at(&mut player, t);
        t += 1.0 / 60.0;
    }

    let starts = calls.borrow().iter().filter(|c| c.as_slice() != [0]).count();
    assert_eq!(starts, default_table().len());
}
