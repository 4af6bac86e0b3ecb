//! Reward spurt: short-lived particles thrown upwards from above the cup.

use bevy::prelude::*;
use rand::Rng;
use swing_core::SwingFlowSet;

use crate::core::config::{EmitterConfig, GameConfig};
use crate::gameplay::swing::SpurtRequested;

const LOG_TARGET: &str = "game::emitter";

pub const SPURT_COLORS: [Color; 3] = [
    Color::srgb(0.9, 0.15, 0.15),
    Color::srgb(0.98, 0.85, 0.2),
    Color::srgb(0.98, 0.55, 0.1),
];

#[derive(Component, Debug, Clone, Copy)]
pub struct Particle {
    pub velocity: Vec2,
    pub age: f32,
    pub lifetime: f32,
}

/// Shared mesh and palette; only present when render assets exist.
#[derive(Resource)]
pub struct SpurtAssets {
    pub mesh: Handle<Mesh>,
    pub materials: Vec<Handle<ColorMaterial>>,
}

pub struct EmitterPlugin;

impl Plugin for EmitterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_spurt_assets)
            .add_systems(Update, (spawn_spurts, update_particles).chain().in_set(SwingFlowSet::Present));
    }
}

fn setup_spurt_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GameConfig>,
) {
    commands.insert_resource(SpurtAssets {
        mesh: meshes.add(Circle::new(cfg.emitter.particle_radius)),
        materials: SPURT_COLORS.iter().map(|c| materials.add(*c)).collect(),
    });
}

/// Launch velocity inside the cone around straight up.
pub fn launch_velocity(rng: &mut impl Rng, cfg: &EmitterConfig) -> Vec2 {
    let spread = cfg.spread_degrees.max(0.0);
    let angle = if spread > 0.0 { 90.0 + rng.gen_range(-spread..=spread) } else { 90.0 };
    let speed = if cfg.speed_min < cfg.speed_max {
        rng.gen_range(cfg.speed_min..=cfg.speed_max)
    } else {
        cfg.speed_min
    };
    Vec2::from_angle(angle.to_radians()) * speed * cfg.speed_scale
}

fn spawn_spurts(
    mut commands: Commands,
    mut requests: EventReader<SpurtRequested>,
    assets: Option<Res<SpurtAssets>>,
    cfg: Res<GameConfig>,
) {
    let origin = Vec2::new(cfg.course.hole_x, cfg.emitter.offset_y);
    let mut rng = rand::thread_rng();
    for req in requests.read() {
        info!(target: LOG_TARGET, count = req.count, "spurt");
        for _ in 0..req.count {
            let particle = Particle {
                velocity: launch_velocity(&mut rng, &cfg.emitter),
                age: 0.0,
                lifetime: cfg.emitter.lifetime,
            };
            let mut e = commands.spawn((particle, Transform::from_xyz(origin.x, origin.y, 3.0)));
            if let Some(assets) = &assets {
                let idx = rng.gen_range(0..assets.materials.len().max(1));
                if let Some(mat) = assets.materials.get(idx) {
                    e.insert((Mesh2d(assets.mesh.clone()), MeshMaterial2d(mat.clone())));
                }
            }
        }
    }
}

fn update_particles(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut q: Query<(Entity, &mut Particle, &mut Transform)>,
) {
    let dt = time.delta_secs();
    let g = cfg.emitter.gravity_y;
    for (e, mut p, mut tf) in &mut q {
        p.age += dt;
        if p.age >= p.lifetime {
            commands.entity(e).despawn();
            continue;
        }
        p.velocity.y += g * dt;
        tf.translation += (p.velocity * dt).extend(0.0);
        // Shrink over the last third of the lifetime.
        let remaining = 1.0 - p.age / p.lifetime;
        tf.scale = Vec3::splat((remaining * 3.0).min(1.0));
    }
}
