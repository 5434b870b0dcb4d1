use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use log::info;

use crate::simulation::integrator::euler_step;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2};

/// Component tagging each circle with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Label showing a body's name, below the body
#[derive(Component)]
struct NameLabel(pub usize);

/// Label showing a body's distance to the reference body, above the body
#[derive(Component)]
struct DistanceLabel(pub usize);

const NAME_FONT_SIZE: f32 = 42.0;
const DISTANCE_FONT_SIZE: f32 = 32.0;
const NAME_OFFSET: f32 = 42.0;
const DISTANCE_OFFSET: f32 = 56.0;

pub fn run_2d(scenario: Scenario) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    let view = scenario.view.clone();

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        // Physics rate is fixed and independent of the render frame rate
        .insert_resource(Time::<Fixed>::from_hz(view.steps_per_second))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planet Simulator".into(),
                resolution: (view.width, view.height).into(),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, (sync_transforms_system, draw_trails_system, sync_labels_system))
        .run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera, world origin at the window center
    commands.spawn(Camera2dBundle::default());

    let scale = scenario.view.scale;

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let pos = screen_pos(body.x, scale);
        let color = body_color(body);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(pos.x, pos.y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        if body.labeled {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        body.name.clone(),
                        TextStyle {
                            font_size: NAME_FONT_SIZE,
                            color,
                            ..Default::default()
                        },
                    ),
                    transform: Transform::from_xyz(pos.x, pos.y - NAME_OFFSET, 2.0),
                    ..Default::default()
                },
                NameLabel(i),
            ));
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(
                        String::new(),
                        TextStyle {
                            font_size: DISTANCE_FONT_SIZE,
                            color: Color::srgb(0.0, 1.0, 0.0),
                            ..Default::default()
                        },
                    ),
                    transform: Transform::from_xyz(pos.x, pos.y + DISTANCE_OFFSET, 2.0),
                    ..Default::default()
                },
                DistanceLabel(i),
            ));
        }
    }
}

/// One fixed-timestep physics tick
fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        forces,
        ..
    } = &mut *scenario;

    euler_step(system, forces, parameters);
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let scale = scenario.view.scale;
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let pos = screen_pos(b.x, scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

/// Draw each body's orbit history as a polyline once it holds enough points
fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let scale = scenario.view.scale;
    for body in &scenario.system.bodies {
        if body.trail.len() > 2 {
            gizmos.linestrip_2d(
                body.trail.iter().map(|p| screen_pos(*p, scale)),
                body_color(body),
            );
        }
    }
}

/// Keep labels attached to their bodies and rewrite the distance text
fn sync_labels_system(
    scenario: Res<Scenario>,
    mut names: Query<(&NameLabel, &mut Transform), Without<DistanceLabel>>,
    mut distances: Query<(&DistanceLabel, &mut Transform, &mut Text), Without<NameLabel>>,
) {
    let scale = scenario.view.scale;

    for (NameLabel(i), mut transform) in &mut names {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let pos = screen_pos(b.x, scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y - NAME_OFFSET;
        }
    }

    for (DistanceLabel(i), mut transform, mut text) in &mut distances {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let pos = screen_pos(b.x, scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y + DISTANCE_OFFSET;
            // Distance in millions of kilometers (1e9 m)
            text.sections[0].value = format!("{:.2} mln km", b.dist_to_ref / 1e9);
        }
    }
}

/// World position (meters) to screen position (pixels)
fn screen_pos(x: NVec2, scale: f64) -> Vec2 {
    Vec2::new((x.x * scale) as f32, (x.y * scale) as f32)
}

fn body_color(b: &Body) -> Color {
    Color::srgb_u8(b.color[0], b.color[1], b.color[2])
}
