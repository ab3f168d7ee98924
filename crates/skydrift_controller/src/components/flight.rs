//! Wings component — полёт и glide (расширенный вариант контроллера)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Полёт + glide. Опциональный компонент: базовый вариант персонажа
/// (walk/run/jump) его не несёт, и flight-системы такой entity пропускают.
///
/// Семантика:
/// - jump key удерживается в воздухе → `flying = true`, gravity scale 0,
///   вертикальная velocity пишется напрямую (= `fly_force`)
/// - key отпущен → `flying = false`, gravity scale 1
/// - не летим и не на земле → fall speed клампится до `glide_fall_speed`
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Wings {
    /// Вертикальная скорость набора высоты (m/s)
    pub fly_force: f32,

    /// Предельная скорость падения при glide (m/s, отрицательная)
    pub glide_fall_speed: f32,

    /// Активен ли полёт (transient)
    pub flying: bool,
}

impl Default for Wings {
    fn default() -> Self {
        Self {
            fly_force: 6.0,
            glide_fall_speed: -2.0,
            flying: false,
        }
    }
}

impl Wings {
    /// Glide-кламп вертикальной скорости: падаем не быстрее glide_fall_speed.
    /// Никогда не добавляет энергию — только поднимает слишком быстрое падение.
    pub fn clamp_fall(&self, vertical_velocity: f32) -> f32 {
        vertical_velocity.max(self.glide_fall_speed)
    }
}
