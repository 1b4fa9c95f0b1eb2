//! Bevy viewer for the stepping oracle
//!
//! Wires the scene (camera, lights), runs the one-shot atom-creation phase,
//! and drives the Sync Loop: advance the oracle one step, log positions,
//! publish one linear tween per atom, all on a fixed start-to-start cadence
//! of one nominal period. Tween progression is a separate per-frame system,
//! so animations run concurrently with subsequent iterations.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use bevy::math::primitives::Sphere;
use bevy::prelude::*;

use crate::simulation::oracle::SimulationOracle;
use crate::simulation::states::NVec3;
use crate::trace::logger::TraceLogger;
use crate::visualization::animation::PositionTween;
use crate::visualization::appearance::style_for;

/// Component tagging each sphere with its atom id
#[derive(Component)]
pub struct AtomId(pub u32);

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 10.0;

/// Bevy resource owning the stepping oracle
#[derive(Resource)]
pub struct SimulationHandle {
    pub oracle: Box<dyn SimulationOracle + Send + Sync>,
}

/// Bevy resource mapping atom id -> spawned visual entity
///
/// Keyed by id rather than positional index, so a reordering of the
/// oracle's internal arrays between steps cannot misdirect an animation.
#[derive(Resource, Default)]
pub struct AtomRegistry {
    pub by_id: HashMap<u32, Entity>,
}

/// Bevy resource scheduling the Sync Loop
///
/// A single repeating timer of the nominal period, ticked with frame time
/// and never reset. Frame deltas already contain the time an iteration
/// spent inside its frame, so ticking alone keeps the start-to-start
/// cadence at exactly one period; overshoot carries over, so an overrun
/// iteration fires again immediately.
#[derive(Resource)]
pub struct SyncSchedule {
    pub period: Duration, // nominal time between simulation steps
    pub timer: Timer, // repeating period timer driving iterations
}

impl SyncSchedule {
    /// Schedule with the first iteration due immediately
    pub fn new(period: Duration) -> Self {
        let mut timer = Timer::new(period, TimerMode::Repeating);
        timer.set_elapsed(period);
        Self {
            period,
            timer,
        }
    }
}

/// Convenience entrypoint: build the app and block until terminated
pub fn run_viewer(
    oracle: Box<dyn SimulationOracle + Send + Sync>,
    delay_time: f64,
    trace: TraceLogger,
) {
    println!("run_viewer: starting Bevy viewer with {} atoms", oracle.particle_count());

    App::new()
        .insert_resource(SimulationHandle { oracle })
        .insert_resource(AtomRegistry::default())
        .insert_resource(SyncSchedule::new(Duration::from_secs_f64(delay_time)))
        .insert_resource(trace)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, (setup_scene, create_atoms))
        .add_systems(Update, (sync_loop, animate_atoms))
        .run();
}

/// Simulation space -> render space (f64 -> f32, 1:1 units)
fn render_pos(x: &NVec3) -> Vec3 {
    Vec3::new(x.x as f32, x.y as f32, x.z as f32)
}

/// Startup system: spawn camera and the fixed lighting rig
fn setup_scene(mut commands: Commands) {
    // Simple 3D camera looking at the origin
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)), // pure black
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 2.0, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // Point light to make atom details visible
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            color: Color::srgb(0.7, 0.7, 0.7),
            intensity: 3.0e9,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(100.0, 100.0, 100.0),
        ..Default::default()
    });

    // Second point light to brighten the "dark side"
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            color: Color::srgb(0.7, 0.7, 0.7),
            intensity: 3.0e9,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(-100.0, -100.0, -100.0),
        ..Default::default()
    });

    // Ambient light to make things more visible
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.4, 0.4, 0.4),
        brightness: 500.0,
    });
}

/// Startup system: the one-shot atom-creation phase
///
/// Spawns one sphere per atom (all sharing one mesh), styles it from the
/// appearance table, places it at its starting simulated position with no
/// animation, and records it in the registry. Runs exactly once, before
/// the Sync Loop's first iteration.
pub fn create_atoms(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<SimulationHandle>,
    mut registry: ResMut<AtomRegistry>,
) {
    let ids = sim.oracle.read_ids();
    let type_tags = sim.oracle.read_type_tags();
    let positions = sim.oracle.read_positions();

    // One shared sphere mesh for every atom; styles scale it per entity
    let sphere = meshes.add(Sphere::new(1.0).mesh());

    for (i, &id) in ids.iter().enumerate() {
        let style = style_for(type_tags[i]);

        let material = match style {
            Some(s) => materials.add(StandardMaterial {
                base_color: Color::srgb(s.color[0], s.color[1], s.color[2]),
                ..Default::default()
            }),
            // Unmapped type: keep the renderer default appearance
            None => materials.add(StandardMaterial::default()),
        };
        let scale = style.map_or(1.0, |s| s.scale);

        let entity = commands
            .spawn((
                PbrBundle {
                    mesh: sphere.clone(),
                    material,
                    transform: Transform::from_translation(render_pos(&positions[i]))
                        .with_scale(Vec3::splat(scale)),
                    ..Default::default()
                },
                AtomId(id),
            ))
            .id();

        registry.by_id.insert(id, entity);
    }

    info!("create_atoms: spawned {} atoms", ids.len());
}

/// Update system: one Sync Loop iteration when the schedule timer fires
///
/// Advance -> read -> log -> publish tweens, all synchronous within one
/// frame. A failed step is fatal. The repeating timer keeps the
/// start-to-start cadence at one nominal period; an overrun iteration
/// warns and fires again immediately instead of skipping steps.
pub fn sync_loop(
    time: Res<Time>,
    mut schedule: ResMut<SyncSchedule>,
    mut sim: ResMut<SimulationHandle>,
    mut trace: ResMut<TraceLogger>,
    registry: Res<AtomRegistry>,
    transforms: Query<&Transform, With<AtomId>>,
    mut commands: Commands,
    mut exit: EventWriter<AppExit>,
) {
    schedule.timer.tick(time.delta());
    if !schedule.timer.finished() {
        return;
    }

    let start = Instant::now();

    // Advance the oracle by exactly one discrete step
    if let Err(err) = sim.oracle.advance_one_step() {
        error!("simulation step failed: {err:#}");
        exit.send(AppExit::error());
        return;
    }

    // Re-read the refreshed id/position arrays
    let ids = sim.oracle.read_ids().to_vec();
    let positions = sim.oracle.read_positions();

    // One StepRecord per atom
    for (i, &id) in ids.iter().enumerate() {
        trace.record(id, sim.oracle.map_id(id), &positions[i]);
    }
    trace.flush();

    // Publish one tween per atom: from its current rendered position to
    // its new simulated position, over one nominal period
    let duration = schedule.period.as_secs_f32();
    for (i, &id) in ids.iter().enumerate() {
        let Some(&entity) = registry.by_id.get(&id) else {
            warn!("atom id {id} not present in the registry, skipping");
            continue;
        };
        let Ok(transform) = transforms.get(entity) else {
            warn!("visual object for atom id {id} has no transform, skipping");
            continue;
        };
        let target = render_pos(&positions[i]);
        commands
            .entity(entity)
            .insert(PositionTween::new(transform.translation, target, duration));
    }

    // The repeating timer is never reset here: the time this iteration
    // spent arrives in the next frame's delta, so compensation falls out
    // of the ticking itself and the period stays fixed start-to-start
    let elapsed = start.elapsed();
    if elapsed >= schedule.period {
        warn!(
            "sync iteration took {elapsed:?}, exceeding the {:?} period; next step fires immediately",
            schedule.period
        );
    }
}

/// Update system: per-frame tween progression, owned by the renderer side
/// Runs independently of the Sync Loop's scheduling; finished tweens snap
/// to their target and are removed
pub fn animate_atoms(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut Transform, &mut PositionTween)>,
) {
    let dt = time.delta_seconds();
    for (entity, mut transform, mut tween) in &mut query {
        tween.advance(dt);
        transform.translation = tween.sample();
        if tween.finished() {
            commands.entity(entity).remove::<PositionTween>();
        }
    }
}
