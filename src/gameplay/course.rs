use bevy::prelude::*;
use swing_core::{SwingBodies, SwingRuntime};
use swing_physics::{
    ball_body, fulcrum_body, golfer_body, ground_body, pivot_joint, target_body, wedge_body, PhysicsConfig,
};

use crate::core::components::{CourseGeometry, CupTarget, Flag, Fulcrum, GolfBall, Golfer};
use crate::core::config::{CourseConfig, GameConfig};

const LOG_TARGET: &str = "game::course";

const GRASS: Color = Color::srgb(0.22, 0.62, 0.25);
const GRASS_DARK: Color = Color::srgb(0.19, 0.55, 0.22);
const BALL: Color = Color::WHITE;
const GOLFER: Color = Color::srgb(0.85, 0.55, 0.3);
const CUP: Color = Color::srgb(0.1, 0.1, 0.12);
const POLE: Color = Color::srgb(0.6, 0.6, 0.6);
const PENNANT: Color = Color::srgb(0.95, 0.95, 0.9);

pub struct CoursePlugin;

impl Plugin for CoursePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_course);
    }
}

/// Entities of one spawned course.
#[derive(Debug, Clone, Copy)]
pub struct CourseEntities {
    pub ball: Entity,
    pub golfer: Entity,
    pub fulcrum: Entity,
    pub target: Entity,
}

impl CourseEntities {
    pub fn swing_bodies(&self, course: &CourseConfig) -> SwingBodies {
        SwingBodies {
            projectile: self.ball.into(),
            target: self.target.into(),
            implement: self.golfer.into(),
            projectile_start: course.ball_start(),
        }
    }
}

/// Physics bodies only. Visuals are attached separately so headless callers
/// can build a course without render assets.
pub fn spawn_course_bodies(commands: &mut Commands, course: &CourseConfig, physics: &PhysicsConfig) -> CourseEntities {
    let half_len = course.ground_length * 0.5;
    let half_depth = course.ground_depth * 0.5;
    commands.spawn((
        Name::new("Grass"),
        CourseGeometry,
        ground_body(Vec2::new(half_len, half_depth)),
        Transform::from_xyz(half_len, -half_depth, 0.0),
    ));

    // Two wedges rising towards the cup; the gap between them is the hole.
    let inner = course.hole_width * 0.5;
    let (l, h) = (course.wedge_length, course.wedge_height);
    for (name, a, b, c) in [
        ("WedgeLeft", Vec2::new(-inner - l, 0.0), Vec2::new(-inner, 0.0), Vec2::new(-inner, h)),
        ("WedgeRight", Vec2::new(inner, 0.0), Vec2::new(inner + l, 0.0), Vec2::new(inner, h)),
    ] {
        commands.spawn((
            Name::new(name),
            CourseGeometry,
            wedge_body(a, b, c),
            Transform::from_xyz(course.hole_x, 0.0, 0.0),
        ));
    }

    let target = commands
        .spawn((
            Name::new("CupTarget"),
            CupTarget,
            target_body(Vec2::new(inner, 1.0)),
            Transform::from_xyz(course.hole_x, 1.0, 0.5),
        ))
        .id();

    let ball_start = course.ball_start();
    let ball = commands
        .spawn((
            Name::new("Ball"),
            GolfBall,
            ball_body(physics),
            Transform::from_xyz(ball_start.x, ball_start.y, 2.0),
        ))
        .id();

    let fulcrum_pos = course.fulcrum();
    let fulcrum = commands
        .spawn((
            Name::new("Fulcrum"),
            Fulcrum,
            fulcrum_body(),
            Transform::from_xyz(fulcrum_pos.x, fulcrum_pos.y, 0.0),
        ))
        .id();

    let golfer_center = course.golfer_center();
    let golfer = commands
        .spawn((
            Name::new("Golfer"),
            Golfer,
            golfer_body(Vec2::from(course.golfer_half_extents), physics),
            pivot_joint(fulcrum, Vec2::ZERO, Vec2::Y * course.fulcrum_offset),
            Transform::from_xyz(golfer_center.x, golfer_center.y, 1.0),
        ))
        .id();

    CourseEntities { ball, golfer, fulcrum, target }
}

fn spawn_course(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GameConfig>,
) {
    let course = &cfg.course;
    let entities = spawn_course_bodies(&mut commands, course, &cfg.physics);

    // Striped grass like a mowed fairway; purely cosmetic sprites on top of the collider.
    let stripe = 50.0;
    let stripes = (course.ground_length / stripe).ceil() as u32;
    for i in 0..stripes {
        let color = if i % 2 == 0 { GRASS } else { GRASS_DARK };
        commands.spawn((
            CourseGeometry,
            Sprite::from_color(color, Vec2::new(stripe, course.ground_depth)),
            Transform::from_xyz(i as f32 * stripe + stripe * 0.5, -course.ground_depth * 0.5, -1.0),
        ));
    }

    let inner = course.hole_width * 0.5;
    let (l, h) = (course.wedge_length, course.wedge_height);
    let fill = materials.add(GRASS);
    for (a, b, c) in [
        (Vec2::new(-inner - l, 0.0), Vec2::new(-inner, 0.0), Vec2::new(-inner, h)),
        (Vec2::new(inner, 0.0), Vec2::new(inner + l, 0.0), Vec2::new(inner, h)),
    ] {
        commands.spawn((
            CourseGeometry,
            Mesh2d(meshes.add(Triangle2d::new(a, b, c))),
            MeshMaterial2d(fill.clone()),
            Transform::from_xyz(course.hole_x, 0.0, -0.5),
        ));
    }

    commands
        .entity(entities.target)
        .insert(Sprite::from_color(CUP, Vec2::new(course.hole_width, 2.0)));

    commands.entity(entities.ball).insert((
        Mesh2d(meshes.add(Circle::new(cfg.physics.ball_radius))),
        MeshMaterial2d(materials.add(BALL)),
    ));

    let half = Vec2::from(course.golfer_half_extents);
    commands
        .entity(entities.golfer)
        .insert(Sprite::from_color(GOLFER, half * 2.0));

    // Flag: pole standing in the cup with a pennant at the top. Not part of the physics world.
    commands
        .spawn((
            Flag,
            Sprite::from_color(POLE, Vec2::new(3.0, course.flag_height)),
            Transform::from_xyz(course.hole_x, course.flag_height * 0.5, -0.2),
        ))
        .with_children(|pole| {
            pole.spawn((
                Sprite::from_color(PENNANT, Vec2::new(70.0, 20.0)),
                Transform::from_xyz(36.5, course.flag_height * 0.5 - 10.0, 0.0),
            ));
        });

    commands.insert_resource(SwingRuntime::new(cfg.swing.clone(), entities.swing_bodies(course)));
    info!(
        target: LOG_TARGET,
        hole_x = course.hole_x,
        ball_x = course.ball_start[0],
        "course spawned"
    );
}
