//! Jump systems: cooldown тик + обработка JumpIntent

use bevy::prelude::*;
use bevy_rapier3d::dynamics::{ExternalImpulse, Velocity};

use crate::components::{GroundSensor, InteractAbility, JumpAbility};
use crate::logger;
use crate::motion::events::{AnimationTrigger, JumpIntent, TriggerKind};

/// System: обновление action cooldown таймеров (jump + interact)
///
/// Работает в FixedUpdate для детерминизма.
pub fn tick_action_cooldowns(
    time: Res<Time<Fixed>>,
    mut jumps: Query<&mut JumpAbility>,
    mut interacts: Query<&mut InteractAbility>,
) {
    let delta = time.delta_secs();

    for mut jump in jumps.iter_mut() {
        if jump.cooldown_timer > 0.0 {
            jump.cooldown_timer = (jump.cooldown_timer - delta).max(0.0);
        }
    }

    for mut interact in interacts.iter_mut() {
        if interact.timer > 0.0 {
            interact.timer = (interact.timer - delta).max(0.0);
        }
    }
}

/// System: обработка JumpIntent событий
///
/// Gate: grounded ∧ cooldown готов ∧ жест не активен. Intent в воздухе
/// или во время жеста молча отбрасывается.
///
/// Эффект: вертикальная velocity обнуляется (высота прыжка не зависит от
/// прежнего падения), затем импульс вверх через ExternalImpulse.
pub fn handle_jump_intents(
    mut intents: EventReader<JumpIntent>,
    mut query: Query<(
        &GroundSensor,
        &mut JumpAbility,
        Option<&InteractAbility>,
        &mut Velocity,
        &mut ExternalImpulse,
    )>,
    mut triggers: EventWriter<AnimationTrigger>,
) {
    for intent in intents.read() {
        let Ok((sensor, mut jump, interact, mut velocity, mut impulse)) =
            query.get_mut(intent.entity)
        else {
            logger::log_warning(&format!(
                "JumpIntent для entity без jump-контроллера: {:?}",
                intent.entity
            ));
            continue;
        };

        if !sensor.grounded || !jump.can_jump() {
            continue;
        }
        if interact.map(|i| i.is_busy()).unwrap_or(false) {
            continue;
        }

        // Reset вертикальной скорости перед импульсом
        velocity.linvel.y = 0.0;
        impulse.impulse += Vec3::Y * jump.impulse;

        jump.start_jump();

        triggers.write(AnimationTrigger {
            entity: intent.entity,
            kind: TriggerKind::Jump,
        });

        logger::log(&format!("Jump: {:?}", intent.entity));
    }
}
