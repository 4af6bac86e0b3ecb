mod common;

use common::*;
use swing_core::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn charge_is_monotonic_and_capped() {
    let mut h = Harness::new();
    h.toggle(true);
    let mut last = 0.0;
    for _ in 0..40 {
        h.step(0.1);
        let c = h.controller().charge();
        assert!(c >= last, "charge went down: {last} -> {c}");
        assert!(c <= 1.5, "charge above cap: {c}");
        last = c;
    }
    assert!(close(last, 1.5));
    assert!(h.physics.rotations.iter().all(|(b, m)| *b == GOLFER && *m >= 0.0 && *m <= 1.5));
    assert_eq!(h.physics.rotations.len(), 40);
}

#[test]
fn toggle_off_while_idle_is_noop() {
    let mut h = Harness::new();
    h.toggle(false);
    h.toggle(false);
    h.step(1.0);
    assert_eq!(h.controller().state(), SwingState::Idle);
    assert!(h.physics.rotations.is_empty());
    assert!(h.toggle.armed.is_empty());
    assert!(h.runtime.queue().is_empty());
    assert!(h.events.is_empty());
}

#[test]
fn one_second_of_charge_swings_once_at_full_unit() {
    let mut h = Harness::new();
    h.toggle(true);
    h.steps(10, 0.1);
    assert!(close(h.controller().charge(), 1.0));
    h.toggle(false);
    assert_eq!(h.controller().state(), SwingState::Swinging);
    let swings: Vec<_> = h.physics.rotations.iter().filter(|(_, m)| *m < 0.0).collect();
    assert_eq!(swings.len(), 1);
    assert_eq!(swings[0].0, GOLFER);
    assert!(close(swings[0].1, -10.0));
    assert_eq!(h.count(|e| matches!(e, SwingEvent::Swung { charge, .. } if close(*charge, 1.0))), 1);
    // Charge timer is gone; further time adds no charge.
    h.steps(5, 0.1);
    assert_eq!(h.physics.rotations.iter().filter(|(_, m)| *m < 0.0).count(), 1);
    assert_eq!(h.physics.rotations.len(), 11);
}

#[test]
fn release_hides_toggle() {
    let mut h = Harness::new();
    h.charge_and_swing(3);
    assert_eq!(h.toggle.armed, vec![false]);
}

#[test]
fn repeated_contact_rewards_and_resets_once() {
    let mut h = Harness::new();
    h.charge_and_swing(10);
    h.steps(2, 0.1);
    h.contact(TARGET);
    h.contact(TARGET);
    h.step(0.1);
    h.contact(TARGET);
    h.steps(40, 0.1);
    assert_eq!(h.reward.spurts, vec![(RewardKind::Spurt, 30)]);
    assert_eq!(h.physics.positions, vec![(BALL, BALL_START)]);
    assert_eq!(h.count(|e| matches!(e, SwingEvent::Sunk)), 1);
    assert_eq!(h.count(|e| matches!(e, SwingEvent::AttemptFinished { .. })), 1);
    assert_eq!(h.controller().sinks(), 1);
}

#[test]
fn settling_after_contact_does_not_reset() {
    let mut h = Harness::new();
    h.charge_and_swing(10);
    h.steps(6, 0.1); // settle poll is armed by now
    assert!(h.controller().is_settle_poll_active());
    h.contact(TARGET);
    assert!(!h.controller().is_settle_poll_active());
    h.physics.at_rest = true;
    h.steps(10, 0.1);
    assert!(h.physics.positions.is_empty(), "settle path reset ran after contact");
    h.steps(30, 0.1);
    assert_eq!(h.physics.positions.len(), 1);
    assert_eq!(h.count(|e| matches!(e, SwingEvent::ResetStarted { outcome: AttemptOutcome::Miss })), 0);
    assert_eq!(
        h.count(|e| matches!(e, SwingEvent::AttemptFinished { outcome: AttemptOutcome::Sunk })),
        1
    );
}

#[test]
fn contact_before_settle_poll_cancels_pending_arm() {
    let mut h = Harness::new();
    h.charge_and_swing(5);
    h.physics.at_rest = true;
    h.contact(TARGET);
    h.steps(10, 0.1);
    assert!(!h.controller().is_settle_poll_active());
    assert!(h.physics.positions.is_empty());
}

#[test]
fn sink_schedules_reward_then_reset() {
    let mut h = Harness::new();
    h.charge_and_swing(10);
    h.steps(3, 0.1);
    h.contact(TARGET);
    assert!(h.controller().contact());
    assert_eq!(h.controller().state(), SwingState::Resolved);

    h.steps(4, 0.1);
    assert!(h.reward.spurts.is_empty());
    h.step(0.1); // +0.5
    assert_eq!(h.reward.spurts.len(), 1);

    h.steps(29, 0.1); // +3.4
    assert!(h.physics.wakes.is_empty());
    h.step(0.1); // +3.5: wake and nudge
    assert_eq!(h.physics.wakes, vec![BALL]);
    assert!(h.physics.impulses.iter().any(|(b, i)| *b == BALL && close(i.y, 0.01) && close(i.x, 0.0)));
    assert!(h.physics.positions.is_empty(), "position written before the wake tick");

    h.step(0.1); // wake delay elapsed
    assert_eq!(h.physics.positions, vec![(BALL, BALL_START)]);
    assert!(!h.controller().contact());
    assert_eq!(h.controller().state(), SwingState::Idle);
    assert!(close(h.controller().charge(), 0.0));
    assert_eq!(h.toggle.armed.last(), Some(&true));
    assert!(h.runtime.queue().is_empty());
}

#[test]
fn miss_resets_once_ball_rests() {
    let mut h = Harness::new();
    h.charge_and_swing(8);
    for _ in 0..30 {
        h.step(0.1);
        assert!(!h.controller().contact());
    }
    assert!(h.physics.positions.is_empty());
    assert_eq!(h.controller().state(), SwingState::Swinging);

    h.physics.at_rest = true;
    h.step(0.1);
    assert!(!h.controller().is_settle_poll_active());
    assert_eq!(h.count(|e| matches!(e, SwingEvent::ResetStarted { outcome: AttemptOutcome::Miss })), 1);
    h.step(0.1);
    assert_eq!(h.physics.positions, vec![(BALL, BALL_START)]);
    assert!(!h.controller().contact());
    assert_eq!(h.controller().state(), SwingState::Idle);
    assert!(h.runtime.queue().is_empty());

    h.steps(20, 0.1);
    assert_eq!(h.physics.positions.len(), 1);
}

#[test]
fn charge_timer_and_settle_poll_never_overlap() {
    let mut h = Harness::new();
    h.toggle(true);
    for i in 0..60 {
        if i == 12 {
            h.toggle(false);
        }
        if i == 40 {
            h.physics.at_rest = true;
        }
        h.step(0.1);
        let c = h.controller();
        assert!(!(c.is_charge_timer_active() && c.is_settle_poll_active()));
        if c.state() == SwingState::Idle {
            assert!(!c.contact());
        }
    }
    assert_eq!(h.controller().attempts(), 1);
}

#[test]
fn contact_outside_swing_is_ignored() {
    let mut h = Harness::new();
    h.contact(TARGET);
    assert!(!h.controller().contact());
    h.toggle(true);
    h.step(0.1);
    h.contact(TARGET);
    assert!(!h.controller().contact());
    assert_eq!(h.controller().state(), SwingState::Charging);
}

#[test]
fn contact_with_other_bodies_is_ignored() {
    let mut h = Harness::new();
    h.charge_and_swing(4);
    h.contact(GRASS);
    h.contact(GOLFER);
    assert!(!h.controller().contact());
    assert_eq!(h.controller().state(), SwingState::Swinging);
}

#[test]
fn toggle_in_flight_is_ignored() {
    let mut h = Harness::new();
    h.charge_and_swing(4);
    h.toggle(true);
    h.steps(3, 0.1);
    assert_eq!(h.controller().state(), SwingState::Swinging);
    assert!(!h.controller().is_charge_timer_active());
    assert_eq!(h.physics.rotations.len(), 5);
}

#[test]
fn reactivating_while_charging_keeps_charge() {
    let mut h = Harness::new();
    h.toggle(true);
    h.steps(5, 0.1);
    h.toggle(true);
    h.steps(5, 0.1);
    assert!(close(h.controller().charge(), 1.0));
}

#[test]
fn release_before_first_tick_swings_with_zero_charge() {
    let mut h = Harness::new();
    h.toggle(true);
    h.toggle(false);
    assert_eq!(h.controller().state(), SwingState::Swinging);
    assert_eq!(h.physics.rotations.len(), 1);
    assert!(close(h.physics.rotations[0].1, 0.0));
}

#[test]
fn second_attempt_starts_clean() {
    let mut h = Harness::new();
    h.charge_and_swing(10);
    h.steps(2, 0.1);
    h.contact(TARGET);
    h.steps(40, 0.1);
    assert_eq!(h.controller().state(), SwingState::Idle);

    h.charge_and_swing(3);
    assert!(!h.controller().contact());
    assert_eq!(h.controller().attempts(), 2);
    assert!(close(h.controller().charge(), 0.3));
    h.steps(2, 0.1);
    h.contact(TARGET);
    assert_eq!(h.controller().sinks(), 2);
}

#[test]
fn custom_tuning_changes_delays() {
    let tuning = SwingTuning { reward_delay: 0.2, reset_delay: 1.0, charge_cap: 0.5, ..Default::default() };
    let mut h = Harness::with_tuning(tuning);
    h.toggle(true);
    h.steps(20, 0.1);
    assert!(close(h.controller().charge(), 0.5));
    h.toggle(false);
    h.step(0.1);
    h.contact(TARGET);
    h.steps(2, 0.1);
    assert_eq!(h.reward.spurts.len(), 1);
    h.steps(9, 0.1);
    assert_eq!(h.physics.positions.len(), 1);
}
