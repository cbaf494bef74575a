//! Integration tests for the sequencer's observable properties,
//! driven by a synthetic clock.

use std::time::Duration;

use sweet_surprise::sequencer::{Cue, Phase, Sequencer};

/// Advance in 25ms increments, collecting cues and tick run tokens.
fn drive(seq: &mut Sequencer, until_ms: u64, muted: bool) -> (Vec<Cue>, Vec<u64>) {
    let mut cues = Vec::new();
    let mut runs = Vec::new();
    let mut ms = 0;
    while ms <= until_ms {
        let tick = seq.tick_at(Duration::from_millis(ms), muted);
        runs.push(tick.run);
        cues.extend(tick.cues);
        ms += 25;
    }
    (cues, runs)
}

#[test]
fn full_armed_run_plays_the_complete_cue_track() {
    let mut seq = Sequencer::new(false);
    seq.start(true);
    let (cues, _) = drive(&mut seq, 6000, false);

    assert_eq!(cues, vec![Cue::Bite, Cue::Chew, Cue::Chew, Cue::Chew]);
    assert_eq!(seq.phase(), Phase::Satisfied);
    assert!(seq.is_finished());
}

#[test]
fn unarmed_run_is_silent_with_full_visuals() {
    let mut seq = Sequencer::new(false);
    seq.start(false);
    let (cues, _) = drive(&mut seq, 6000, false);

    assert!(cues.is_empty());
    assert_eq!(seq.phase(), Phase::Satisfied);
}

#[test]
fn armed_but_muted_run_is_silent_with_full_visuals() {
    let mut seq = Sequencer::new(false);
    seq.start(true);
    let (cues, _) = drive(&mut seq, 6000, true);

    assert!(cues.is_empty());
    assert_eq!(seq.phase(), Phase::Satisfied);
}

#[test]
fn reduced_motion_settles_at_500ms_with_nothing_else_observed() {
    let mut seq = Sequencer::new(true);
    seq.start(true);

    let mut observed = Vec::new();
    for ms in (0..=6000).step_by(25) {
        let tick = seq.tick_at(Duration::from_millis(ms), false);
        assert!(tick.cues.is_empty(), "no cue may ever fire");
        if tick.changed {
            observed.push((ms, seq.phase()));
        }
    }

    assert_eq!(observed, vec![(500, Phase::Satisfied)]);
}

#[test]
fn immediate_restart_yields_exactly_one_satisfied_transition() {
    let mut seq = Sequencer::new(false);
    seq.start(true);
    // Restart before the first step (100ms) can fire
    seq.start(true);
    let current_run = seq.run();

    let mut transitions = 0;
    let mut prev = seq.phase();
    for ms in (0..=6000).step_by(25) {
        let tick = seq.tick_at(Duration::from_millis(ms), false);
        assert_eq!(tick.run, current_run, "no stale-run effect may execute");
        if prev != Phase::Satisfied && seq.phase() == Phase::Satisfied {
            transitions += 1;
        }
        prev = seq.phase();
    }
    assert_eq!(transitions, 1);
}

#[test]
fn stopping_at_1500ms_leaves_no_pending_steps() {
    let mut seq = Sequencer::new(false);
    seq.start(true);
    drive(&mut seq, 1500, false);
    assert_eq!(seq.phase(), Phase::Bite);

    seq.stop();
    assert!(seq.is_finished());

    let tick = seq.tick_at(Duration::from_millis(10_000), false);
    assert!(!tick.changed);
    assert!(tick.cues.is_empty());
    assert_eq!(seq.phase(), Phase::Bite, "state is frozen, nothing fires");
}

#[test]
fn replay_after_completion_runs_the_full_schedule_again() {
    let mut seq = Sequencer::new(false);
    seq.start(true);
    let (first_cues, _) = drive(&mut seq, 6000, false);
    assert_eq!(first_cues.len(), 4);

    seq.start(true);
    assert_eq!(seq.phase(), Phase::Idle);
    let (second_cues, _) = drive(&mut seq, 6000, false);
    assert_eq!(second_cues, first_cues);
    assert_eq!(seq.phase(), Phase::Satisfied);
}
