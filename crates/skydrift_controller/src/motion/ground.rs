//! Ground detection: сферический overlap probe + side effects приземления
//!
//! Архитектура:
//! - `probe_ground` — Rapier path: overlap query по слою земли
//! - `flat_ground_sensor` (motion::headless) — stand-in без Rapier
//! - `settle_on_landing` — общие side effects для обоих путей
//!
//! `grounded` — чистая функция probe, пересчитывается каждый тик.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{GroundSensor, JumpAbility, Locomotion, Wings};

/// System: сферический ground probe (Rapier path)
///
/// Overlap-тест сферы `sensor.radius` у ног капсулы против коллайдеров
/// группы `sensor.filter`; собственный коллайдер исключён. Результат —
/// binary grounded/airborne сигнал.
pub fn probe_ground(
    rapier: ReadRapierContext,
    mut sensors: Query<(Entity, &Transform, &mut GroundSensor)>,
) {
    // Guard: физический мир ещё не создан
    let Ok(ctx) = rapier.single() else {
        return;
    };

    for (entity, transform, mut sensor) in sensors.iter_mut() {
        let center = sensor.probe_center(transform.translation);
        let filter = QueryFilter::default()
            .groups(CollisionGroups::new(Group::ALL, sensor.filter))
            .exclude_collider(entity);

        let probe = Collider::ball(sensor.radius);
        let mut hit = false;
        ctx.intersect_shape(
            center,
            Quat::IDENTITY,
            &*probe.raw,
            filter,
            |_entity| {
                hit = true;
                false // первое пересечение достаточно — останавливаемся
            },
        );

        sensor.grounded = hit;
    }
}

/// System: side effects приземления (общая для Rapier и headless пути)
///
/// Grounded тик:
/// - сбрасывает `jumping`
/// - принудительно завершает полёт и возвращает gravity scale 1
///   (полёт не переживает касание земли)
pub fn settle_on_landing(
    mut query: Query<(
        &GroundSensor,
        Option<&mut JumpAbility>,
        Option<&mut Wings>,
        Option<&mut GravityScale>,
    )>,
) {
    for (sensor, jump, wings, gravity) in query.iter_mut() {
        if !sensor.grounded {
            continue;
        }

        if let Some(mut jump) = jump {
            if jump.jumping {
                jump.jumping = false;
            }
        }

        if let Some(mut wings) = wings {
            if wings.flying {
                wings.flying = false;
                crate::logger::log("Flight ended: touched ground");
            }
            // Гравитацию возвращаем безусловно — только полёт её выключает
            if let Some(mut gravity) = gravity {
                if gravity.0 != 1.0 {
                    gravity.0 = 1.0;
                }
            }
        }
    }
}

/// System: ground drag (Rapier path)
///
/// На земле linear damping = `ground_drag`, в воздухе 0.
pub fn apply_drag(mut query: Query<(&GroundSensor, &Locomotion, &mut Damping)>) {
    for (sensor, locomotion, mut damping) in query.iter_mut() {
        let target = if sensor.grounded {
            locomotion.ground_drag
        } else {
            0.0
        };
        if damping.linear_damping != target {
            damping.linear_damping = target;
        }
    }
}
