//! Headless stand-ins для Rapier pipeline
//!
//! Когда Rapier plugin не подключен (headless симуляция, тесты),
//! эти две системы заменяют overlap probe и интеграцию тел:
//! - `flat_ground_sensor`: grounded по высоте над плоскостью y = 0
//! - `integrate_ballistics`: impulse → velocity → translation + gravity
//!
//! Компоненты те же (Velocity, ExternalImpulse, GravityScale) — без
//! плагина это инертные данные, которыми владеем мы.

use bevy::prelude::*;
use bevy_rapier3d::dynamics::{Damping, ExternalImpulse, GravityScale, Velocity};

use crate::components::GroundSensor;
use crate::motion::{CAPSULE_HALF_HEIGHT, CAPSULE_RADIUS};

/// Высота origin капсулы, стоящей на плоскости y = 0
pub const REST_HEIGHT: f32 = CAPSULE_HALF_HEIGHT + CAPSULE_RADIUS;

/// Запас на numerical errors при проверке "стоим на плоскости"
const GROUND_EPSILON: f32 = 0.05;

/// Ускорение свободного падения (m/s²)
pub const GRAVITY: f32 = -9.81;

/// System: ground detection по высоте (headless stand-in)
///
/// Плоский мир: grounded если origin на высоте покоя над y = 0
/// (плюс небольшой запас). Сферический probe живёт в Rapier path.
pub fn flat_ground_sensor(mut query: Query<(&Transform, &mut GroundSensor)>) {
    for (transform, mut sensor) in query.iter_mut() {
        sensor.grounded = transform.translation.y <= REST_HEIGHT + GROUND_EPSILON;
    }
}

/// System: баллистическая интеграция (headless stand-in)
///
/// Rapier-семантика в миниатюре:
/// - impulse потребляется в velocity (масса тела = 1) и обнуляется
/// - gravity × gravity_scale, только airborne
/// - linear damping: linvel *= 1 / (1 + dt · c), формула rapier
/// - translation += velocity * dt, с клампом к плоскости y = 0
pub fn integrate_ballistics(
    time: Res<Time<Fixed>>,
    mut query: Query<(
        &mut Transform,
        &mut Velocity,
        &mut ExternalImpulse,
        &GravityScale,
        &Damping,
        &GroundSensor,
    )>,
) {
    let delta = time.delta_secs();

    for (mut transform, mut velocity, mut impulse, gravity, damping, sensor) in query.iter_mut() {
        // Impulse → velocity, one-shot
        if impulse.impulse != Vec3::ZERO {
            velocity.linvel += impulse.impulse;
            impulse.impulse = Vec3::ZERO;
        }

        if !sensor.grounded {
            velocity.linvel.y += GRAVITY * gravity.0 * delta;
        }

        if damping.linear_damping > 0.0 {
            velocity.linvel *= 1.0 / (1.0 + delta * damping.linear_damping);
        }

        transform.translation += velocity.linvel * delta;

        // Кламп к плоскости: сквозь землю не проваливаемся
        if transform.translation.y < REST_HEIGHT {
            transform.translation.y = REST_HEIGHT;
            velocity.linvel.y = velocity.linvel.y.max(0.0);
        }
    }
}
