use bevy::prelude::*;
use bevy::transform::TransformSystem;
use bevy_rapier2d::plugin::PhysicsSet;

use crate::core::components::GolfBall;
use crate::core::config::GameConfig;
use crate::core::system::system_order::CameraFollowSet;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            PostUpdate,
            CameraFollowSet
                .after(PhysicsSet::Writeback)
                .before(TransformSystem::TransformPropagate),
        )
        .add_systems(Startup, setup_camera)
        .add_systems(PostUpdate, follow_ball.in_set(CameraFollowSet));
    }
}

#[derive(Component)]
pub struct FollowCamera;

fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    let start = cfg.course.ball_start();
    let target = follow_target(start, &cfg);
    commands.spawn((Camera2d, FollowCamera, Transform::from_xyz(target.x, target.y, 999.0)));
}

/// Where the camera wants to be for a ball at `ball`, kept inside the course.
pub fn follow_target(ball: Vec2, cfg: &GameConfig) -> Vec2 {
    let half_w = cfg.window.width * 0.5;
    let max_x = (cfg.course.ground_length - half_w).max(half_w);
    Vec2::new(ball.x.clamp(half_w, max_x), ball.y.max(cfg.camera.min_y))
}

fn follow_ball(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    q_ball: Query<&Transform, (With<GolfBall>, Without<FollowCamera>)>,
    mut q_cam: Query<&mut Transform, With<FollowCamera>>,
) {
    let (Ok(ball), Ok(mut cam)) = (q_ball.single(), q_cam.single_mut()) else {
        return;
    };
    let target = follow_target(ball.translation.truncate(), &cfg);
    let rate = cfg.camera.follow_rate;
    let t = if rate > 0.0 { 1.0 - (-rate * time.delta_secs()).exp() } else { 1.0 };
    let next = cam.translation.truncate().lerp(target, t);
    cam.translation.x = next.x;
    cam.translation.y = next.y;
}
