//! Ground sensor: сферический probe под капсулой + grounded флаг

use bevy::prelude::*;
use bevy_rapier3d::geometry::Group;

use crate::collision;

/// Сферический ground probe персонажа
///
/// Геометрия повторяет классический check-sphere у ног:
/// центр probe = `translation + DOWN * (height * 0.5 - radius)`.
///
/// `grounded` — transient флаг, пересчитывается каждый физический тик
/// (binary grounded/airborne сигнал, никогда не "залипает").
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundSensor {
    /// Радиус probe-сферы (м)
    pub radius: f32,
    /// Высота области probe; вместе с radius задаёт смещение центра вниз
    pub height: f32,
    /// Collision group слоя земли (с чем probe пересекается)
    pub filter: Group,
    /// На земле ли персонаж (результат последнего probe)
    pub grounded: bool,
}

impl Default for GroundSensor {
    fn default() -> Self {
        Self {
            radius: 0.1,
            height: 0.2,
            filter: collision::GROUND,
            grounded: false,
        }
    }
}

impl GroundSensor {
    /// Смещение центра probe-сферы вниз от origin персонажа
    pub fn probe_offset(&self) -> f32 {
        self.height * 0.5 - self.radius
    }

    /// Мировая позиция probe-сферы
    pub fn probe_center(&self, translation: Vec3) -> Vec3 {
        translation + Vec3::NEG_Y * self.probe_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_center_offset() {
        let sensor = GroundSensor {
            radius: 0.1,
            height: 0.4,
            ..default()
        };

        let center = sensor.probe_center(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(center, Vec3::new(1.0, 1.9, 3.0));
    }

    #[test]
    fn test_degenerate_probe_stays_at_origin() {
        // height == 2 * radius → offset 0, probe в origin (валидный запрос)
        let sensor = GroundSensor::default();
        assert_eq!(sensor.probe_offset(), 0.0);
        assert_eq!(sensor.probe_center(Vec3::ZERO), Vec3::ZERO);
    }
}
