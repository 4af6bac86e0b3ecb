use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
use golf_swing::gameplay::swing::{SpurtRequested, SwingBridgePlugin, ToggleArmChanged, ToggleChanged};
use swing_core::{SwingBodies, SwingEvent, SwingFlowSet, SwingRuntime, SwingState, SwingTuning};
use swing_physics::PhysicsConfig;

const BALL_START: Vec2 = Vec2::new(455.0, 10.0);

#[derive(Resource, Default)]
struct Seen {
    spurts: Vec<u32>,
    arms: Vec<bool>,
    swing: Vec<SwingEvent>,
}

fn record(
    mut seen: ResMut<Seen>,
    mut spurts: EventReader<SpurtRequested>,
    mut arms: EventReader<ToggleArmChanged>,
    mut swing: EventReader<SwingEvent>,
) {
    seen.spurts.extend(spurts.read().map(|s| s.count));
    seen.arms.extend(arms.read().map(|a| a.armed));
    seen.swing.extend(swing.read().cloned());
}

struct Course {
    app: App,
    ball: Entity,
    golfer: Entity,
    target: Entity,
}

fn course() -> Course {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(PhysicsConfig::default())
        .init_resource::<Seen>()
        .add_event::<CollisionEvent>()
        .add_plugins(SwingBridgePlugin)
        .add_systems(Update, record.after(SwingFlowSet::Present));

    let world = app.world_mut();
    let ball = world
        .spawn((
            Transform::from_xyz(BALL_START.x, BALL_START.y, 0.0),
            ExternalImpulse::default(),
            Velocity::zero(),
            Sleeping::default(),
        ))
        .id();
    let golfer = world.spawn((Transform::default(), ExternalImpulse::default(), Velocity::zero())).id();
    let target = world.spawn(Transform::from_xyz(2600.0, 1.0, 0.0)).id();
    world.insert_resource(SwingRuntime::new(
        SwingTuning::default(),
        SwingBodies {
            projectile: ball.into(),
            target: target.into(),
            implement: golfer.into(),
            projectile_start: BALL_START,
        },
    ));
    app.update();
    Course { app, ball, golfer, target }
}

impl Course {
    fn toggle(&mut self, active: bool) {
        self.app.world_mut().send_event(ToggleChanged { active });
        self.app.update();
    }

    fn state(&self) -> SwingState {
        self.app.world().resource::<SwingRuntime>().state()
    }

    fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Step until the attempt is back at Idle; panics after `limit` frames.
    fn run_until_idle(&mut self, limit: usize) {
        for _ in 0..limit {
            if self.state() == SwingState::Idle {
                return;
            }
            self.app.update();
        }
        panic!("attempt never finished; state {:?}", self.state());
    }

    /// Move the ball somewhere down the fairway. No rapier world runs here,
    /// so the hit itself is covered by `tests/course_physics.rs`.
    fn knock_ball(&mut self) {
        let world = self.app.world_mut();
        world.get_mut::<Transform>(self.ball).unwrap().translation = Vec3::new(1800.0, 10.0, 0.0);
        world.get_mut::<Velocity>(self.ball).unwrap().linvel = Vec2::new(300.0, 0.0);
    }
}

#[test]
fn charge_spins_golfer_back_then_release_hides_toggle() {
    let mut c = course();
    c.toggle(true);
    assert_eq!(c.state(), SwingState::Charging);
    c.steps(10);
    let charge = c.app.world().resource::<SwingRuntime>().controller().charge();
    assert!(charge > 0.5 && charge <= 1.2, "charge {charge}");
    let spin = c.app.world().get::<Velocity>(c.golfer).unwrap().angvel;
    assert!(spin < 0.0, "backswing should spin clockwise, got {spin}");

    c.toggle(false);
    assert_eq!(c.state(), SwingState::Swinging);
    let after = c.app.world().get::<Velocity>(c.golfer).unwrap().angvel;
    assert!(after > 0.0, "release swings counter-clockwise, got {after}");
    assert_eq!(c.app.world().resource::<Seen>().arms, vec![false]);
}

#[test]
fn sink_rewards_once_and_resets_ball() {
    let mut c = course();
    c.toggle(true);
    c.steps(5);
    c.toggle(false);
    c.knock_ball();

    for _ in 0..2 {
        let (ball, target) = (c.ball, c.target);
        c.app
            .world_mut()
            .send_event(CollisionEvent::Started(target, ball, CollisionEventFlags::SENSOR));
        c.app.update();
    }
    assert_eq!(c.state(), SwingState::Resolved);

    c.run_until_idle(60);
    let seen = c.app.world().resource::<Seen>();
    assert_eq!(seen.spurts, vec![30]);
    assert_eq!(seen.arms, vec![false, true]);
    assert_eq!(seen.swing.iter().filter(|e| matches!(e, SwingEvent::Sunk)).count(), 1);

    let world = c.app.world();
    assert_eq!(world.get::<Transform>(c.ball).unwrap().translation.truncate(), BALL_START);
    assert_eq!(*world.get::<Velocity>(c.ball).unwrap(), Velocity::zero());
    let ctl = world.resource::<SwingRuntime>().controller();
    assert_eq!((ctl.attempts(), ctl.sinks()), (1, 1));
    assert!(!ctl.contact());
}

#[test]
fn miss_resets_once_ball_sleeps() {
    let mut c = course();
    c.toggle(true);
    c.steps(3);
    c.toggle(false);
    c.knock_ball();
    c.steps(10);
    assert_eq!(c.state(), SwingState::Swinging);

    c.app.world_mut().get_mut::<Sleeping>(c.ball).unwrap().sleeping = true;
    c.run_until_idle(10);

    let world = c.app.world();
    assert_eq!(world.get::<Transform>(c.ball).unwrap().translation.truncate(), BALL_START);
    assert!(!world.get::<Sleeping>(c.ball).unwrap().sleeping, "ball is woken before repositioning");
    let seen = world.resource::<Seen>();
    assert!(seen.spurts.is_empty());
    assert_eq!(seen.arms, vec![false, true]);
    let ctl = world.resource::<SwingRuntime>().controller();
    assert_eq!((ctl.attempts(), ctl.sinks()), (1, 0));
}

#[test]
fn collisions_with_other_bodies_do_nothing() {
    let mut c = course();
    c.toggle(true);
    c.toggle(false);
    let (ball, golfer) = (c.ball, c.golfer);
    c.app
        .world_mut()
        .send_event(CollisionEvent::Started(ball, golfer, CollisionEventFlags::empty()));
    c.app.update();
    assert_eq!(c.state(), SwingState::Swinging);
    assert_eq!(c.app.world().resource::<SwingRuntime>().controller().sinks(), 0);
}
