//! Facing components — поворот визуальной модели к направлению движения

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Скорость доворота модели (slerp factor = turn_speed * delta)
///
/// Висит на корне персонажа; физическое тело при этом не вращается
/// (rotation axes залочены), вращается только child с [`CharacterModel`].
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Facing {
    pub turn_speed: f32,
}

impl Default for Facing {
    fn default() -> Self {
        Self { turn_speed: 10.0 }
    }
}

/// Marker: child entity с визуальной моделью персонажа
///
/// `rotate_character_model` slerp-ит Transform таких детей к направлению
/// из `MoveIntent`. Клиент вешает маркер на mesh-иерархию при спавне визуала.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CharacterModel;
