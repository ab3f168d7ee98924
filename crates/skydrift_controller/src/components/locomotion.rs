//! Locomotion tunables: скорости ходьбы/бега и ground drag

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Скорости горизонтального движения персонажа (метры/сек)
///
/// Применяется `apply_locomotion`: target speed выбирается по run-флагу
/// из `MoveIntent`, горизонтальная velocity пишется напрямую в rigid body.
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Locomotion {
    /// Скорость ходьбы (m/s)
    pub walk_speed: f32,
    /// Скорость бега (m/s), активна пока удерживается run key
    pub run_speed: f32,
    /// Linear damping тела на земле (в воздухе drag = 0)
    pub ground_drag: f32,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            run_speed: 4.0,
            ground_drag: 5.0,
        }
    }
}

impl Locomotion {
    /// Целевая скорость для текущего intent
    pub fn target_speed(&self, running: bool) -> f32 {
        if running {
            self.run_speed
        } else {
            self.walk_speed
        }
    }
}
