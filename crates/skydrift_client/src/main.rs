use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use skydrift_controller::{collision, spawn_winged_character, CharacterControllerPlugin, Player};

mod camera;
mod rendering;

use camera::CameraPlugin;
use rendering::VisualSyncPlugin;

fn main() {
    skydrift_controller::logger::init_console_logger();

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "SKYDRIFT - Controller Sandbox".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Rapier в fixed schedule (контроллер выстроен до physics step)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        .insert_resource(TimestepMode::Fixed {
            dt: 1.0 / 60.0,
            substeps: 1,
        })
        // Controller core
        .add_plugins(CharacterControllerPlugin)
        // Visual sync + camera
        .add_plugins(VisualSyncPlugin)
        .add_plugins(CameraPlugin)
        // Setup scene
        .add_systems(Startup, setup_scene)
        .run();
}

/// Spawn ground, platforms, light, camera and the player character
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Ground plane (40x40m, визуал)
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(20.0)))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Ground collider (верхняя грань на y = 0)
    commands.spawn((
        Transform::from_xyz(0.0, -0.1, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(20.0, 0.1, 20.0),
        collision::ground_groups(),
    ));

    // Платформы для прыжков/glide
    spawn_platform(&mut commands, meshes.as_mut(), materials.as_mut(), Vec3::new(4.0, 0.5, -4.0));
    spawn_platform(&mut commands, meshes.as_mut(), materials.as_mut(), Vec3::new(-5.0, 1.5, -7.0));
    spawn_platform(&mut commands, meshes.as_mut(), materials.as_mut(), Vec3::new(0.0, 3.0, -12.0));

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
        affects_lightmapped_meshes: false,
    });

    // Camera (orbit, follows player)
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(6.0, 5.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
        camera::OrbitCamera::default(),
    ));

    // Player: расширенный вариант (walk/run/jump + полёт/glide + interact)
    let player = spawn_winged_character(&mut commands, Vec3::new(0.0, 1.0, 0.0));
    commands
        .entity(player)
        .insert((Player, rendering::NeedsVisual));
}

/// Spawn box platform (walkable, слой земли)
fn spawn_platform(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) {
    const HALF: Vec3 = Vec3::new(1.5, 0.25, 1.5);

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::from_size(HALF * 2.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.5, 0.45, 0.4))),
        Transform::from_translation(position),
        RigidBody::Fixed,
        Collider::cuboid(HALF.x, HALF.y, HALF.z),
        collision::ground_groups(),
    ));
}
