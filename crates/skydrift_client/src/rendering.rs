use bevy::prelude::*;

use skydrift_controller::motion::{CAPSULE_HALF_HEIGHT, CAPSULE_RADIUS};
use skydrift_controller::{AnimationTrigger, CharacterModel};

pub struct VisualSyncPlugin;

impl Plugin for VisualSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (attach_visuals, log_animation_triggers));
    }
}

/// Marker: controller entity needs visual representation
#[derive(Component)]
pub struct NeedsVisual;

/// Attach model hierarchy to new controller entities
///
/// Model root — отдельный child с [`CharacterModel`]: его вращает
/// facing-система, физическое тело остаётся без вращения.
fn attach_visuals(
    mut commands: Commands,
    query: Query<Entity, With<NeedsVisual>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for entity in query.iter() {
        let body_material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.3, 0.4, 0.8),
            ..default()
        });
        let nose_material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.9, 0.7, 0.2),
            ..default()
        });

        let model = commands
            .spawn((
                CharacterModel,
                Transform::default(),
                Visibility::default(),
            ))
            .with_children(|parent| {
                // Body capsule
                parent.spawn((
                    Mesh3d(meshes.add(Capsule3d::new(CAPSULE_RADIUS, CAPSULE_HALF_HEIGHT * 2.0))),
                    MeshMaterial3d(body_material),
                    Transform::default(),
                ));
                // Nose: куда смотрит модель
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::new(0.15, 0.15, 0.3))),
                    MeshMaterial3d(nose_material),
                    Transform::from_xyz(0.0, 0.3, -(CAPSULE_RADIUS + 0.1)),
                ));
            })
            .id();

        commands
            .entity(entity)
            .remove::<NeedsVisual>()
            // Корень иерархии обязан нести Visibility для propagation
            .insert(Visibility::default())
            .add_child(model);
    }
}

/// Host-engine boundary: триггеры анимации здесь только логируются;
/// реальная игра скормила бы их AnimationPlayer-у
fn log_animation_triggers(mut triggers: EventReader<AnimationTrigger>) {
    for trigger in triggers.read() {
        skydrift_controller::log_info(&format!(
            "Animation trigger {:?} for {:?}",
            trigger.kind, trigger.entity
        ));
    }
}
