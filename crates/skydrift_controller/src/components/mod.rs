//! ECS Components контроллера персонажа
//!
//! Организация по доменам:
//! - player: player control marker (Player)
//! - locomotion: скорости движения и ground drag (Locomotion)
//! - ground: сферический ground probe (GroundSensor)
//! - jump: прыжок с cooldown (JumpAbility)
//! - flight: полёт и glide, расширенный вариант (Wings)
//! - interact: interaction gesture, расширенный вариант (InteractAbility)
//! - orientation: поворот модели (Facing, CharacterModel)
//! - animation: параметры анимации (AnimatorParams)

pub mod animation;
pub mod flight;
pub mod ground;
pub mod interact;
pub mod jump;
pub mod locomotion;
pub mod orientation;
pub mod player;

// Re-exports для удобного импорта
pub use animation::*;
pub use flight::*;
pub use ground::*;
pub use interact::*;
pub use jump::*;
pub use locomotion::*;
pub use orientation::*;
pub use player::*;
