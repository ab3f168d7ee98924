//! Model rotation heuristic — визуальный доворот модели к движению
//!
//! Физическое тело не вращается (rotation axes залочены); slerp-ится
//! только child-иерархия с маркером [`CharacterModel`]. Работает в
//! Update — это визуальный слой, не физика.

use bevy::prelude::*;

use crate::components::{CharacterModel, Facing};
use crate::input::MoveIntent;

/// System: slerp модели к направлению движения
///
/// Intent с незначимой длиной (len² ≤ 0.01) модель не трогает —
/// персонаж сохраняет последний facing, snap-back'а нет.
pub fn rotate_character_model(
    time: Res<Time>,
    characters: Query<(&MoveIntent, &Facing, &Children)>,
    mut models: Query<&mut Transform, With<CharacterModel>>,
) {
    let delta = time.delta_secs();

    for (intent, facing, children) in characters.iter() {
        if intent.direction.length_squared() <= 0.01 {
            continue;
        }

        let target = Transform::default()
            .looking_to(intent.direction, Vec3::Y)
            .rotation;
        let t = (facing.turn_speed * delta).min(1.0);

        let mut iter = models.iter_many_mut(children);
        while let Some(mut model) = iter.fetch_next() {
            model.rotation = model.rotation.slerp(target, t);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slerp_converges_to_move_direction() {
        // Логика доворота напрямую (без App schedule)
        let facing = Facing::default();
        let direction = Vec3::X;
        let target = Transform::default().looking_to(direction, Vec3::Y).rotation;

        let mut rotation = Quat::IDENTITY;
        for _ in 0..120 {
            let t = (facing.turn_speed * (1.0 / 60.0)).min(1.0);
            rotation = rotation.slerp(target, t);
        }

        // За 2 секунды модель доезжает до цели
        assert!(rotation.angle_between(target) < 0.01);
    }

    #[test]
    fn test_full_step_snaps_instantly() {
        // turn_speed * delta >= 1 → slerp factor клампится в 1
        let facing = Facing { turn_speed: 10.0 };
        let t: f32 = (facing.turn_speed * 0.5).min(1.0);
        assert_eq!(t, 1.0);
    }
}
