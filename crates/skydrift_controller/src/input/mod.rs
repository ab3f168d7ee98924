//! Input polling → движенческий intent
//!
//! # Архитектура
//!
//! **Контроллер не читает клавиатуру в физических системах!**
//! - `gather_input` (Update): polling `ButtonInput<KeyCode>` → `MoveIntent`
//!   + edge events (JumpIntent / InteractIntent)
//! - FixedUpdate системы читают только intent, не raw input
//!
//! **Headless:** ресурса `ButtonInput` нет → система инертна; тесты и
//! scripted driver пишут `MoveIntent` напрямую (mock input через компонент).

use bevy::prelude::*;

use crate::components::Player;
use crate::motion::events::{InteractIntent, JumpIntent};

/// Key bindings контроллера (rebindable resource)
#[derive(Resource, Debug, Clone, Copy)]
pub struct InputBindings {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub run: KeyCode,
    pub interact: KeyCode,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            back: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            jump: KeyCode::Space,
            run: KeyCode::ShiftLeft,
            interact: KeyCode::KeyF,
        }
    }
}

/// Горизонтальная ориентация камеры (XZ plane, normalized)
///
/// Пишет клиентская camera system, контроллер только читает.
/// Default смотрит в −Z (Bevy forward) — достаточно для headless.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraOrientation {
    pub forward: Vec3,
    pub right: Vec3,
}

impl Default for CameraOrientation {
    fn default() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }
}

impl CameraOrientation {
    /// Снять ориентацию с камеры: forward/right проецируются на XZ
    /// и нормализуются (вертикальная составляющая взгляда отбрасывается)
    pub fn from_camera_transform(transform: &Transform) -> Self {
        let forward = flatten(transform.forward().as_vec3());
        let right = flatten(transform.right().as_vec3());
        Self { forward, right }
    }
}

fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

/// Per-frame polled intent персонажа
///
/// Перезаписывается каждый frame системой `gather_input`; stale input
/// не переживает кадр. Для headless тестов — mock input через этот компонент.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MoveIntent {
    /// Мировое направление движения (XZ, normalized или ZERO)
    pub direction: Vec3,
    /// Run key удерживается
    pub run: bool,
    /// Jump key удерживается (для полёта)
    pub jump_held: bool,
}

/// System: polling клавиатуры → intent + edge events
///
/// Направление camera-relative: WS вдоль `CameraOrientation::forward`,
/// AD вдоль `right`. Противоположные клавиши взаимно гасятся до ZERO.
pub fn gather_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    bindings: Res<InputBindings>,
    camera: Res<CameraOrientation>,
    mut players: Query<(Entity, &mut MoveIntent), With<Player>>,
    mut jump_events: EventWriter<JumpIntent>,
    mut interact_events: EventWriter<InteractIntent>,
) {
    // Guard: headless без InputPlugin
    let Some(keys) = keys else {
        return;
    };

    for (entity, mut intent) in players.iter_mut() {
        let mut axes = Vec2::ZERO; // x = strafe, y = forward
        if keys.pressed(bindings.forward) {
            axes.y += 1.0;
        }
        if keys.pressed(bindings.back) {
            axes.y -= 1.0;
        }
        if keys.pressed(bindings.right) {
            axes.x += 1.0;
        }
        if keys.pressed(bindings.left) {
            axes.x -= 1.0;
        }

        intent.direction = (camera.forward * axes.y + camera.right * axes.x).normalize_or_zero();
        intent.run = keys.pressed(bindings.run);
        intent.jump_held = keys.pressed(bindings.jump);

        if keys.just_pressed(bindings.jump) {
            jump_events.write(JumpIntent { entity });
        }
        if keys.just_pressed(bindings.interact) {
            interact_events.write(InteractIntent { entity });
        }
    }
}
