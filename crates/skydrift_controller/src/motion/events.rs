//! Controller events

use bevy::prelude::*;

/// Event: намерение прыгнуть (jump intent)
///
/// Генерируется:
/// - `gather_input` (jump key just-pressed)
/// - Scripted driver / тесты
///
/// Обрабатывается:
/// - `handle_jump_intents`: проверяет grounded + cooldown + interact lockout,
///   применяет импульс
#[derive(Event, Debug, Clone)]
pub struct JumpIntent {
    pub entity: Entity,
}

/// Event: намерение выполнить interaction gesture
///
/// Обрабатывается `handle_interact_intents` (grounded, не летим, не busy).
#[derive(Event, Debug, Clone)]
pub struct InteractIntent {
    pub entity: Entity,
}

/// One-shot анимационные триггеры (аналог SetTrigger у хостового графа)
///
/// События, а не залипающие booleans: хост читает и забывает,
/// reset-прохода не требуется.
#[derive(Event, Debug, Clone)]
pub struct AnimationTrigger {
    pub entity: Entity,
    pub kind: TriggerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    Jump,
    Interact,
}
