//! Animation parameter surface — то что читал бы animation graph хоста
//!
//! Architecture:
//! - Контроллер ТОЛЬКО пишет параметры (smoothed speed + state booleans)
//! - One-shot триггеры (Jump/Interact) идут отдельными событиями
//! - Blending/graph authoring — ответственность хоста (non-goal)

use bevy::prelude::*;

/// Порог вертикальной скорости ниже которого airborne считается падением
pub const FALL_VELOCITY_THRESHOLD: f32 = -0.1;

/// Параметры анимации персонажа
///
/// `speed` сглаживается экспоненциально (damp time = `smoothing`),
/// booleans копируются из состояния контроллера каждый frame.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct AnimatorParams {
    /// Сглаженная горизонтальная скорость (m/s) для locomotion blend
    pub speed: f32,
    /// Damp time сглаживания speed (секунды)
    pub smoothing: f32,
    /// На земле
    pub grounded: bool,
    /// Падает (airborne, velocity.y < threshold, не летит)
    pub falling: bool,
    /// Летит
    pub flying: bool,
}

impl Default for AnimatorParams {
    fn default() -> Self {
        Self {
            speed: 0.0,
            smoothing: 0.1,
            grounded: false,
            falling: false,
            flying: false,
        }
    }
}

impl AnimatorParams {
    /// Экспоненциальное сглаживание speed к target (аналог damped SetFloat)
    pub fn damp_speed(&mut self, target: f32, delta: f32) {
        if self.smoothing <= 0.0 {
            self.speed = target;
            return;
        }
        let t = (delta / self.smoothing).min(1.0);
        self.speed += (target - self.speed) * t;
    }
}
