//! Flight и glide systems (расширенный вариант — только entity с Wings)
//!
//! Семантика:
//! - jump key удерживается в воздухе → полёт (гравитация выключена,
//!   вертикальная velocity = fly_force напрямую)
//! - key отпущен → полёт окончен, гравитация вернулась
//! - в воздухе без полёта → glide: падение не быстрее glide_fall_speed
//!
//! Приземление завершает полёт в `settle_on_landing` (motion::ground).

use bevy::prelude::*;
use bevy_rapier3d::dynamics::{GravityScale, Velocity};

use crate::components::{GroundSensor, InteractAbility, Wings};
use crate::input::MoveIntent;
use crate::logger;

/// System: переходы полёта по jump_held
///
/// Инвариант: gravity scale == 0 ⇔ flying. Во время interaction gesture
/// переходы заморожены (как и остальное движение).
pub fn update_flight_state(
    mut query: Query<(
        &MoveIntent,
        &GroundSensor,
        &mut Wings,
        Option<&InteractAbility>,
        &mut GravityScale,
    )>,
) {
    for (intent, sensor, mut wings, interact, mut gravity) in query.iter_mut() {
        if interact.map(|i| i.is_busy()).unwrap_or(false) {
            continue;
        }

        if intent.jump_held && !sensor.grounded && !wings.flying {
            wings.flying = true;
            gravity.0 = 0.0; // гравитация выключена на время полёта
            logger::log("Flight started");
        } else if !intent.jump_held && wings.flying {
            wings.flying = false;
            gravity.0 = 1.0;
            logger::log("Flight released");
        }
    }
}

/// System: набор высоты в полёте
///
/// Вертикальная velocity пишется напрямую (не сила) — постоянная
/// скорость подъёма без разгона.
pub fn fly_ascend(mut query: Query<(&Wings, &mut Velocity)>) {
    for (wings, mut velocity) in query.iter_mut() {
        if wings.flying {
            velocity.linvel.y = wings.fly_force;
        }
    }
}

/// System: glide — кламп скорости падения
///
/// Активен когда airborne и не летим. Только поднимает слишком быстрое
/// падение до glide_fall_speed, подъём не трогает.
pub fn glide_clamp(mut query: Query<(&Wings, &GroundSensor, &mut Velocity)>) {
    for (wings, sensor, mut velocity) in query.iter_mut() {
        if wings.flying || sensor.grounded {
            continue;
        }
        let clamped = wings.clamp_fall(velocity.linvel.y);
        if clamped != velocity.linvel.y {
            velocity.linvel.y = clamped;
        }
    }
}
