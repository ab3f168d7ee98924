//! Player control marker component
//!
//! Отмечает entity которым управляет игрок через input polling.

use bevy::prelude::Component;

/// Marker component для player-controlled персонажа
///
/// Контроллер может вести несколько персонажей (тестовые болванки,
/// scripted акторы), но input system пишет intent только сюда.
///
/// # Архитектурная заметка
/// - `gather_input` использует `With<Player>` filter
/// - Scripted/headless акторы получают `MoveIntent` напрямую, без маркера
///
/// # Single-player
/// В обычном сценарии ровно один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
