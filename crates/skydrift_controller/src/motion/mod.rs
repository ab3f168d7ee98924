//! Motion domain — системы движения персонажа
//!
//! Содержит:
//! - ground: сферический probe, landing side effects, drag
//! - locomotion: горизонтальная velocity от intent
//! - jump: cooldown тик + JumpIntent
//! - flight: полёт и glide (Wings)
//! - interact: interaction gesture (InteractAbility)
//! - headless: stand-in системы без Rapier
//! - events: JumpIntent, InteractIntent, AnimationTrigger

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::collision;
use crate::components::{
    AnimatorParams, Facing, GroundSensor, InteractAbility, JumpAbility, Locomotion, Wings,
};
use crate::input::MoveIntent;

pub mod events;
pub mod flight;
pub mod ground;
pub mod headless;
pub mod interact;
pub mod jump;
pub mod locomotion;

// Re-export систем и событий
pub use events::{AnimationTrigger, InteractIntent, JumpIntent, TriggerKind};
pub use flight::{fly_ascend, glide_clamp, update_flight_state};
pub use ground::{apply_drag, probe_ground, settle_on_landing};
pub use headless::{flat_ground_sensor, integrate_ballistics};
pub use interact::handle_interact_intents;
pub use jump::{handle_jump_intents, tick_action_cooldowns};
pub use locomotion::apply_locomotion;

/// Полувысота цилиндрической части капсулы персонажа (м)
pub const CAPSULE_HALF_HEIGHT: f32 = 0.5;

/// Радиус капсулы персонажа (м)
pub const CAPSULE_RADIUS: f32 = 0.4;

/// Spawn helper: базовый вариант персонажа (walk/run/jump)
///
/// Создаёт entity с полным набором компонентов:
/// - Transform
/// - Контроллер: MoveIntent, Locomotion, GroundSensor, JumpAbility,
///   Facing, AnimatorParams
/// - Rapier: Dynamic body + capsule collider, velocity/impulse/gravity/
///   damping, rotation axes залочены (вращается только модель-child)
pub fn spawn_character(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            // Bevy transform
            Transform::from_translation(position),
            // Контроллер
            MoveIntent::default(),
            Locomotion::default(),
            GroundSensor::default(),
            JumpAbility::default(),
            Facing::default(),
            AnimatorParams::default(),
            // Rapier physics
            RigidBody::Dynamic,
            Collider::capsule_y(CAPSULE_HALF_HEIGHT, CAPSULE_RADIUS),
            Velocity::default(),
            ExternalImpulse::default(),
            GravityScale(1.0),
            Damping::default(),
            LockedAxes::ROTATION_LOCKED,
            // Collision groups (персонажи коллайдят с землёй и друг другом)
            collision::character_groups(),
        ))
        .id()
}

/// Spawn helper: расширенный вариант (+ полёт/glide + interaction gesture)
pub fn spawn_winged_character(commands: &mut Commands, position: Vec3) -> Entity {
    let entity = spawn_character(commands, position);
    commands
        .entity(entity)
        .insert((Wings::default(), InteractAbility::default()));
    entity
}
