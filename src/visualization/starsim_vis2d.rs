use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2};

/// Component tagging each circle with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} stars", scenario.system.bodies.len());

    let width = scenario.parameters.spawn_width as f32;
    let height = scenario.parameters.spawn_height as f32;

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "starsim".into(),
                resolution: WindowResolution::new(width, height),
                ..Default::default()
            }),
            ..Default::default()
        }))
        // Frame order: integrate, project, draw trails, then apply one
        // batch of input events
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                physics_step_system,
                sync_transforms_system,
                draw_trails_system,
                keyboard_system,
            )
                .chain(),
        )
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera on a black sky
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..Default::default()
        },
        ..Default::default()
    });

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        spawn_body(&mut commands, &mut meshes, &mut materials, i, body);
    }
}

/// Spawn the filled-circle entity for one body
fn spawn_body(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    i: usize,
    body: &Body,
) {
    let [r, g, b] = body.color;

    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
            material: materials.add(ColorMaterial::from(Color::srgb(r, g, b))),
            transform: Transform::from_xyz(body.x.x as f32, body.x.y as f32, 0.0),
            ..Default::default()
        },
        BodyIndex(i),
    ));
}

/// Per-frame integration; a no-op while paused. Steps by wall-clock
/// frame time unless a fixed step was configured.
fn physics_step_system(mut scenario: ResMut<Scenario>, time: Res<Time>) {
    scenario.tick(time.delta_seconds() as f64);
}

/// Map each body through the viewport transform into its screen-space
/// transform. Runs while paused too, so pan/zoom stay live.
fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let zoom = scenario.viewport.zoom as f32;

    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let screen = scenario.viewport.project(&b.x);
            transform.translation.x = screen.x as f32;
            transform.translation.y = screen.y as f32;
            // Circle meshes were built at radius for zoom 1
            transform.scale = Vec3::splat(zoom);
        }
    }
}

/// Draw each body's trail as a polyline through its recorded past
/// positions, ending at the current position.
fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    for body in &scenario.system.bodies {
        if body.trail().is_empty() {
            continue;
        }

        let [r, g, b] = body.color;
        let points = body
            .trail()
            .iter()
            .chain(std::iter::once(&body.x))
            .map(|p: &NVec2| {
                let screen = scenario.viewport.project(p);
                Vec2::new(screen.x as f32, screen.y as f32)
            });

        gizmos.linestrip_2d(points, Color::srgba(r, g, b, 0.4));
    }
}

/// Apply this frame's batch of discrete input events:
/// - Space      pause / unpause
/// - R          reset to fresh random stars (keeps the viewport)
/// - Z / X      zoom in / out
/// - arrows     pan the view, zoom-independent apparent speed
/// - Escape     quit
fn keyboard_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    body_entities: Query<Entity, With<BodyIndex>>,
    mut exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
        return;
    }

    if keys.just_pressed(KeyCode::Space) {
        scenario.toggle_running();
    }

    if keys.just_pressed(KeyCode::KeyR) {
        scenario.reset();
        info!("reset: {} fresh stars", scenario.system.bodies.len());

        // The new bodies have new radii and colors; rebuild their entities
        for entity in &body_entities {
            commands.entity(entity).despawn();
        }
        for (i, body) in scenario.system.bodies.iter().enumerate() {
            spawn_body(&mut commands, &mut meshes, &mut materials, i, body);
        }
    }

    let factor = scenario.parameters.zoom_factor;
    if keys.just_pressed(KeyCode::KeyZ) {
        scenario.viewport.zoom_in(factor);
    }
    if keys.just_pressed(KeyCode::KeyX) {
        scenario.viewport.zoom_out(factor);
    }

    // Arrows move the view; bodies shift the opposite way on screen
    let step = scenario.parameters.pan_step;
    if keys.just_pressed(KeyCode::ArrowLeft) {
        scenario.viewport.pan_by(1.0, 0.0, step);
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        scenario.viewport.pan_by(-1.0, 0.0, step);
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        scenario.viewport.pan_by(0.0, -1.0, step);
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        scenario.viewport.pan_by(0.0, 1.0, step);
    }
}
