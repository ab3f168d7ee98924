//! SKYDRIFT Controller Core
//!
//! Third-person character controller поверх Bevy ECS + Rapier:
//! ground locomotion (walk/run), прыжок с cooldown, опциональный
//! полёт/glide, interaction gesture, model facing и animation parameters.
//!
//! АРХИТЕКТУРА:
//! - ECS = controller state (tunables + transient флаги) и intent-события
//! - Rapier = rigid bodies, интеграция, overlap queries (ground probe)
//! - Update = input polling + визуальный слой; FixedUpdate (60Hz) = физика
//!
//! Два варианта контроллера собираются композицией компонентов:
//! базовый (walk/run/jump) и расширенный (+Wings, +InteractAbility).

use bevy::prelude::*;
use bevy_rapier3d::dynamics::Velocity;

// Публичные модули
pub mod animation;
pub mod collision;
pub mod components;
pub mod input;
pub mod logger;
pub mod motion;
pub mod orientation;

// Re-export базовых типов для удобства
pub use animation::update_animator_params;
pub use components::*;
pub use input::{gather_input, CameraOrientation, InputBindings, MoveIntent};
pub use motion::{
    spawn_character, spawn_winged_character, AnimationTrigger, InteractIntent, JumpIntent,
    TriggerKind,
};
pub use orientation::rotate_character_model;

// Re-export logger helpers (хостам хватает log/log_info без пути через модуль)
pub use logger::{log, log_error, log_info, log_warning};

/// Главный plugin контроллера (полный Rapier path)
///
/// Клиент добавляет его вместе с `RapierPhysicsPlugin::<NoUserData>`
/// в fixed schedule; системы контроллера выстроены цепочкой до
/// rapier physics step.
pub struct CharacterControllerPlugin;

impl Plugin for CharacterControllerPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier3d::plugin::PhysicsSet;

        app
            // Fixed timestep 60Hz для физического тика
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .init_resource::<InputBindings>()
            .init_resource::<CameraOrientation>();

        register_events(app);
        add_frame_systems(app);

        // Физический тик: до rapier step
        app.add_systems(
            FixedUpdate,
            (
                // Фаза 1: таймеры
                motion::tick_action_cooldowns,
                // Фаза 2: ground probe + side effects приземления
                motion::probe_ground,
                motion::settle_on_landing,
                motion::apply_drag,
                // Фаза 3: действия
                motion::handle_jump_intents,
                motion::update_flight_state,
                // Фаза 4: velocity writes
                motion::apply_locomotion,
                motion::fly_ascend,
                motion::glide_clamp,
                // Фаза 5: gesture
                motion::handle_interact_intents,
            )
                .chain() // Последовательное выполнение
                .before(PhysicsSet::SyncBackend), // До rapier physics step
        );
    }
}

/// Создаёт minimal Bevy App для headless прогонов контроллера
///
/// Вместо Rapier pipeline — stand-in системы (`flat_ground_sensor`,
/// `integrate_ballistics`). Время двигается вручную ровно на один
/// фиксированный тик за `app.update()` — прогоны воспроизводимы
/// независимо от wall clock.
pub fn create_headless_app() -> App {
    use std::time::Duration;

    let mut app = App::new();
    logger::init_console_logger();

    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(60.0))
        .insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
            Duration::from_secs_f64(1.0 / 60.0), // ровно один тик на update()
        ))
        .init_resource::<InputBindings>()
        .init_resource::<CameraOrientation>();

    register_events(&mut app);
    add_frame_systems(&mut app);

    app.add_systems(
        FixedUpdate,
        (
            motion::tick_action_cooldowns,
            motion::flat_ground_sensor,
            motion::settle_on_landing,
            motion::apply_drag,
            motion::handle_jump_intents,
            motion::update_flight_state,
            motion::apply_locomotion,
            motion::fly_ascend,
            motion::glide_clamp,
            motion::handle_interact_intents,
            // Прямая интеграция (вместо rapier step)
            motion::integrate_ballistics,
        )
            .chain(),
    );

    app
}

fn register_events(app: &mut App) {
    app.add_event::<JumpIntent>()
        .add_event::<InteractIntent>()
        .add_event::<AnimationTrigger>();
}

fn add_frame_systems(app: &mut App) {
    // Per-frame слой: input → intent, затем визуальные системы
    app.add_systems(
        Update,
        (
            input::gather_input,
            orientation::rotate_character_model,
            animation::update_animator_params,
        )
            .chain(),
    );
}

/// Snapshot траектории для сравнения детерминизма
///
/// Собирает (entity, transform, velocity) в детерминированный байтовый
/// формат; сортировка по Entity ID, сериализация через Debug.
pub fn trajectory_snapshot(world: &mut World) -> Vec<u8> {
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &Transform, &Velocity)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, ..)| entity.index());

    for (entity, transform, velocity) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}{:?}", transform, velocity).as_bytes());
    }

    snapshot
}
