//! Animation parameter update — заполнение AnimatorParams
//!
//! Контроллер пишет параметры, хостовый animation graph их читает.
//! One-shot триггеры (Jump/Interact) идут событиями из motion систем.

use bevy::prelude::*;
use bevy_rapier3d::dynamics::Velocity;

use crate::components::{
    AnimatorParams, GroundSensor, Locomotion, Wings, FALL_VELOCITY_THRESHOLD,
};
use crate::input::MoveIntent;

/// System: обновление параметров анимации (Update, каждый frame)
///
/// - `speed`: damped к `|direction| * target_speed` (locomotion blend)
/// - `grounded` / `flying`: копии состояния контроллера
/// - `falling`: airborne ∧ velocity.y < порога ∧ не летим
///   (falling и flying взаимоисключающие)
pub fn update_animator_params(
    time: Res<Time>,
    mut query: Query<(
        &MoveIntent,
        &Locomotion,
        &GroundSensor,
        &Velocity,
        Option<&Wings>,
        &mut AnimatorParams,
    )>,
) {
    let delta = time.delta_secs();

    for (intent, locomotion, sensor, velocity, wings, mut params) in query.iter_mut() {
        let target = intent.direction.length() * locomotion.target_speed(intent.run);
        params.damp_speed(target, delta);

        let flying = wings.map(|w| w.flying).unwrap_or(false);

        params.grounded = sensor.grounded;
        params.flying = flying;
        params.falling =
            !sensor.grounded && velocity.linvel.y < FALL_VELOCITY_THRESHOLD && !flying;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falling_excludes_flying() {
        // Падаем быстро, но в полёте → falling обязан быть false
        let grounded = false;
        let vertical = -5.0;
        let flying = true;

        let falling = !grounded && vertical < FALL_VELOCITY_THRESHOLD && !flying;
        assert!(!falling);
    }

    #[test]
    fn test_slow_descent_is_not_falling() {
        // Медленное снижение (например glide на -0.05) ещё не "падение"
        let grounded = false;
        let vertical = -0.05;
        let flying = false;

        let falling = !grounded && vertical < FALL_VELOCITY_THRESHOLD && !flying;
        assert!(!falling);
    }
}
