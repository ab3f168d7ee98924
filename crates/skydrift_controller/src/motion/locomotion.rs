//! Горизонтальное движение: intent → rigid-body velocity
//!
//! Прямое управление velocity (FPS-style), не силы:
//! - WASD intent → linvel.x/z = direction * speed
//! - Y velocity не трогаем (gravity / jump / flight владеют вертикалью)

use bevy::prelude::*;
use bevy_rapier3d::dynamics::Velocity;

use crate::components::{InteractAbility, Locomotion};
use crate::input::MoveIntent;

/// System: применение горизонтальной velocity от intent
///
/// Работает в FixedUpdate до rapier step. Interaction gesture активен →
/// горизонтальную velocity не перезаписываем (drag продолжает действовать).
pub fn apply_locomotion(
    mut query: Query<(
        &MoveIntent,
        &Locomotion,
        Option<&InteractAbility>,
        &mut Velocity,
    )>,
) {
    for (intent, locomotion, interact, mut velocity) in query.iter_mut() {
        // Interaction lockout
        if interact.map(|i| i.is_busy()).unwrap_or(false) {
            continue;
        }

        if intent.direction.length_squared() > 0.01 {
            let speed = locomotion.target_speed(intent.run);

            // Горизонтальная скорость (X, Z); Y остаётся как есть
            velocity.linvel.x = intent.direction.x * speed;
            velocity.linvel.z = intent.direction.z * speed;
        } else {
            // Нет input → останавливаем горизонтальное движение
            velocity.linvel.x = 0.0;
            velocity.linvel.z = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locomotion_preserves_vertical_velocity() {
        // Логика движения напрямую (без App schedule)
        let intent = MoveIntent {
            direction: Vec3::Z,
            run: false,
            jump_held: false,
        };
        let locomotion = Locomotion::default();
        let mut velocity = Velocity {
            linvel: Vec3::new(0.0, -3.0, 0.0),
            ..default()
        };

        if intent.direction.length_squared() > 0.01 {
            let speed = locomotion.target_speed(intent.run);
            velocity.linvel.x = intent.direction.x * speed;
            velocity.linvel.z = intent.direction.z * speed;
        }

        assert_eq!(velocity.linvel.z, 2.0);
        assert_eq!(velocity.linvel.y, -3.0, "Y velocity принадлежит гравитации");
    }
}
