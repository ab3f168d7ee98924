//! Collision Groups Constants
//!
//! Rapier collision groups — centralised constants для всего проекта.
//!
//! ## Архитектура:
//! - **Memberships (битовая маска):** В какой группе находится объект
//! - **Filters (битовая маска):** С какими группами объект коллидирует
//!
//! ## Использование:
//! ```ignore
//! use skydrift_controller::collision;
//!
//! // Character setup
//! commands.entity(character).insert(collision::character_groups());
//!
//! // Ground/terrain setup
//! commands.entity(floor).insert(collision::ground_groups());
//!
//! // Ground probe (overlap query только по слою земли)
//! let filter = QueryFilter::default()
//!     .groups(CollisionGroups::new(Group::ALL, collision::GROUND));
//! ```

use bevy_rapier3d::geometry::{CollisionGroups, Group};

/// Group 1: персонажи (dynamic capsule bodies)
pub const CHARACTER: Group = Group::GROUP_1;

/// Group 2: земля и статическая геометрия (walkable поверхности)
///
/// Ground probe пересекается ТОЛЬКО с этой группой — стоящий рядом
/// второй персонаж не делает нас "grounded".
pub const GROUND: Group = Group::GROUP_2;

/// CollisionGroups для тела персонажа (коллизии с землёй и персонажами)
pub fn character_groups() -> CollisionGroups {
    CollisionGroups::new(CHARACTER, GROUND | CHARACTER)
}

/// CollisionGroups для ground-геометрии
pub fn ground_groups() -> CollisionGroups {
    CollisionGroups::new(GROUND, Group::ALL)
}
