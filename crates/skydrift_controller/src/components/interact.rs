//! InteractAbility component — interaction gesture с lockout таймером

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Interaction gesture (расширенный вариант контроллера, опциональный).
///
/// Один таймер делает обе работы: пока он тикает, жест считается активным
/// (движение подавлено, прыжок/полёт отклоняются) И повторный interact
/// отклоняется. Отдельного "cancel" нет — жест заканчивается только
/// по истечении таймера.
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct InteractAbility {
    /// Длительность жеста = cooldown повторного входа (секунды)
    pub lockout: f32,

    /// Текущий таймер (уменьшается до 0)
    pub timer: f32,
}

impl Default for InteractAbility {
    fn default() -> Self {
        Self {
            lockout: 1.0,
            timer: 0.0,
        }
    }
}

impl InteractAbility {
    /// Жест активен (движение заблокировано, re-entry запрещён)
    pub fn is_busy(&self) -> bool {
        self.timer > 0.0
    }

    /// Начать жест (взвести таймер)
    pub fn start(&mut self) {
        self.timer = self.lockout;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_timer_locks_and_gates() {
        let mut interact = InteractAbility::default();
        assert!(!interact.is_busy());

        interact.start();
        assert!(interact.is_busy());
        assert_eq!(interact.timer, 1.0);

        interact.timer -= 0.5;
        assert!(interact.is_busy());

        interact.timer -= 0.5;
        assert!(!interact.is_busy());
    }
}
