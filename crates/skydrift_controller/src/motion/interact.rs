//! Interaction gesture system

use bevy::prelude::*;

use crate::components::{GroundSensor, InteractAbility, Wings};
use crate::logger;
use crate::motion::events::{AnimationTrigger, InteractIntent, TriggerKind};

/// System: обработка InteractIntent событий
///
/// Gate: grounded ∧ не летим ∧ жест не активен. Таймер жеста одновременно
/// блокирует движение (см. `apply_locomotion`) и гейтит re-entry;
/// сбрасывается только по истечении.
pub fn handle_interact_intents(
    mut intents: EventReader<InteractIntent>,
    mut query: Query<(&GroundSensor, &mut InteractAbility, Option<&Wings>)>,
    mut triggers: EventWriter<AnimationTrigger>,
) {
    for intent in intents.read() {
        let Ok((sensor, mut interact, wings)) = query.get_mut(intent.entity) else {
            // Базовый вариант без InteractAbility — intent просто игнорируем
            continue;
        };

        if !sensor.grounded || interact.is_busy() {
            continue;
        }
        if wings.map(|w| w.flying).unwrap_or(false) {
            continue;
        }

        interact.start();

        triggers.write(AnimationTrigger {
            entity: intent.entity,
            kind: TriggerKind::Interact,
        });

        logger::log(&format!("Interact: {:?}", intent.entity));
    }
}
