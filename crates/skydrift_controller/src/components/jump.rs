//! JumpAbility component — прыжок с cooldown

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Прыжок: импульс вверх + cooldown против re-entry
///
/// ECS хранит: impulse, cooldown (game state).
/// Rapier выполняет: интеграцию импульса в velocity.
///
/// Инвариант: ровно один активный cooldown таймер на действие —
/// `cooldown_timer` и есть этот таймер, прыжок гейтится на нём.
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct JumpAbility {
    /// Импульс прыжка (N·s, масса тела = 1)
    pub impulse: f32,

    /// Cooldown между прыжками (секунды)
    pub cooldown: f32,

    /// Текущий cooldown таймер (уменьшается до 0)
    pub cooldown_timer: f32,

    /// В полёте после прыжка (сбрасывается при приземлении)
    pub jumping: bool,
}

impl Default for JumpAbility {
    fn default() -> Self {
        Self {
            impulse: 4.0,
            cooldown: 0.25,
            cooldown_timer: 0.0,
            jumping: false,
        }
    }
}

impl JumpAbility {
    /// Может ли прыгнуть (cooldown == 0)
    pub fn can_jump(&self) -> bool {
        self.cooldown_timer <= 0.0
    }

    /// Начать прыжок (взвести cooldown)
    pub fn start_jump(&mut self) {
        self.cooldown_timer = self.cooldown;
        self.jumping = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_cooldown() {
        let mut jump = JumpAbility::default();
        assert!(jump.can_jump());

        jump.start_jump();
        assert!(!jump.can_jump());
        assert!(jump.jumping);
        assert_eq!(jump.cooldown_timer, 0.25);

        // Simulate ticks
        jump.cooldown_timer -= 0.1;
        assert!(!jump.can_jump());

        jump.cooldown_timer -= 0.15;
        assert!(jump.can_jump());
    }
}
