//! Headless end-to-end тесты контроллера
//!
//! Прогоняют полную цепочку систем (intent → velocity → интеграция)
//! в headless app; Rapier pipeline заменён stand-in системами.

use bevy::prelude::*;
use bevy_rapier3d::dynamics::{GravityScale, Velocity};

use skydrift_controller::motion::headless::REST_HEIGHT;
use skydrift_controller::{
    create_headless_app, spawn_character, spawn_winged_character, AnimationTrigger,
    AnimatorParams, GroundSensor, InteractAbility, InteractIntent, JumpIntent, MoveIntent, Player,
    TriggerKind, Wings,
};

/// Headless app + персонаж расширенного варианта, стоящий на земле
fn setup_winged() -> (App, Entity) {
    let mut app = create_headless_app();
    let player = spawn_in(&mut app, true, Vec3::new(0.0, REST_HEIGHT, 0.0));
    tick(&mut app, 2); // warmup: сенсор видит землю
    (app, player)
}

fn spawn_in(app: &mut App, winged: bool, position: Vec3) -> Entity {
    let world = app.world_mut();
    let entity = {
        let mut commands = world.commands();
        if winged {
            spawn_winged_character(&mut commands, position)
        } else {
            spawn_character(&mut commands, position)
        }
    };
    world.flush();
    entity
}

fn tick(app: &mut App, count: u32) {
    for _ in 0..count {
        app.update();
    }
}

fn set_intent(app: &mut App, entity: Entity, direction: Vec3, run: bool, jump_held: bool) {
    let mut intent = app.world_mut().get_mut::<MoveIntent>(entity).unwrap();
    intent.direction = direction;
    intent.run = run;
    intent.jump_held = jump_held;
}

fn drain_triggers(app: &mut App) -> Vec<TriggerKind> {
    let mut events = app
        .world_mut()
        .resource_mut::<Events<AnimationTrigger>>();
    events.drain().map(|t| t.kind).collect()
}

#[test]
fn test_walk_moves_forward_on_ground() {
    let (mut app, player) = setup_winged();

    set_intent(&mut app, player, Vec3::NEG_Z, false, false);
    tick(&mut app, 60);

    let transform = *app.world().get::<Transform>(player).unwrap();
    let sensor = app.world().get::<GroundSensor>(player).unwrap();

    assert!(sensor.grounded, "Ходьба по плоскости: персонаж на земле");
    assert!(
        transform.translation.z < -1.0,
        "За секунду ходьбы прошли меньше метра: z = {}",
        transform.translation.z
    );
    assert!(
        (transform.translation.y - REST_HEIGHT).abs() < 0.01,
        "Ходьба не меняет высоту: y = {}",
        transform.translation.y
    );
}

#[test]
fn test_run_is_faster_than_walk() {
    let (mut app, player) = setup_winged();
    set_intent(&mut app, player, Vec3::NEG_Z, false, false);
    tick(&mut app, 60);
    let walked = app.world().get::<Transform>(player).unwrap().translation.z;

    let (mut app, player) = setup_winged();
    set_intent(&mut app, player, Vec3::NEG_Z, true, false);
    tick(&mut app, 60);
    let ran = app.world().get::<Transform>(player).unwrap().translation.z;

    assert!(
        ran < walked * 1.5,
        "Бег должен быть заметно быстрее ходьбы: walk {} vs run {}",
        walked,
        ran
    );
}

#[test]
fn test_jump_arc_glide_descent_and_landing() {
    let (mut app, player) = setup_winged();

    app.world_mut().send_event(JumpIntent { entity: player });
    app.update();

    let velocity = app.world().get::<Velocity>(player).unwrap();
    assert!(velocity.linvel.y > 2.0, "После прыжка velocity вверх");

    // Апекс: подъём ~0.7м над высотой покоя
    let mut peak = REST_HEIGHT;
    let mut min_fall = 0.0_f32;
    for _ in 0..150 {
        app.update();
        let y = app.world().get::<Transform>(player).unwrap().translation.y;
        let vy = app.world().get::<Velocity>(player).unwrap().linvel.y;
        peak = peak.max(y);
        min_fall = min_fall.min(vy);
    }

    assert!(peak > REST_HEIGHT + 0.4, "Прыжок не набрал высоту: peak = {}", peak);
    // Кламп -2 m/s; гравитация тика добавляется после клампа (допуск g·dt)
    assert!(
        min_fall >= -2.0 - 9.81 / 60.0 - 0.01,
        "Glide обязан клампить падение около -2 m/s, было {}",
        min_fall
    );

    let sensor = app.world().get::<GroundSensor>(player).unwrap();
    let jump = app
        .world()
        .get::<skydrift_controller::JumpAbility>(player)
        .unwrap();
    assert!(sensor.grounded, "Через 2.5 секунды персонаж приземлился");
    assert!(!jump.jumping, "jumping сброшен при приземлении");
}

#[test]
fn test_double_jump_intent_rejected() {
    let (mut app, player) = setup_winged();

    app.world_mut().send_event(JumpIntent { entity: player });
    app.update();
    app.world_mut().send_event(JumpIntent { entity: player });
    app.update();

    let triggers = drain_triggers(&mut app);
    let jumps = triggers
        .iter()
        .filter(|k| **k == TriggerKind::Jump)
        .count();
    assert_eq!(jumps, 1, "Второй intent в воздухе обязан быть отброшен");
}

#[test]
fn test_hold_to_fly_climbs_then_glides_home() {
    let (mut app, player) = setup_winged();

    // Прыжок + удержание jump → полёт с первого airborne тика
    set_intent(&mut app, player, Vec3::ZERO, false, true);
    app.world_mut().send_event(JumpIntent { entity: player });
    tick(&mut app, 120);

    {
        let wings = app.world().get::<Wings>(player).unwrap();
        let gravity = app.world().get::<GravityScale>(player).unwrap();
        let velocity = app.world().get::<Velocity>(player).unwrap();
        let y = app.world().get::<Transform>(player).unwrap().translation.y;

        assert!(wings.flying, "Удержание jump в воздухе включает полёт");
        assert_eq!(gravity.0, 0.0, "Гравитация выключена в полёте");
        assert_eq!(velocity.linvel.y, wings.fly_force, "Подъём с fly_force");
        assert!(y > 5.0, "За 2 секунды полёта поднялись выше 5м: y = {}", y);
    }

    // Отпускаем: полёт окончен, гравитация вернулась, спуск glide-ом
    set_intent(&mut app, player, Vec3::ZERO, false, false);
    tick(&mut app, 5);
    {
        let wings = app.world().get::<Wings>(player).unwrap();
        let gravity = app.world().get::<GravityScale>(player).unwrap();
        assert!(!wings.flying, "Отпустили jump → полёт окончен");
        assert_eq!(gravity.0, 1.0, "Гравитация восстановлена");
    }

    tick(&mut app, 600);
    let sensor = app.world().get::<GroundSensor>(player).unwrap();
    let y = app.world().get::<Transform>(player).unwrap().translation.y;
    assert!(sensor.grounded, "Спуск glide-ом довёл до земли, y = {}", y);
}

#[test]
fn test_base_variant_free_falls_without_wings() {
    let mut app = create_headless_app();
    let player = spawn_in(&mut app, false, Vec3::new(0.0, REST_HEIGHT + 20.0, 0.0));

    // Удержание jump без Wings ничего не включает
    set_intent(&mut app, player, Vec3::ZERO, false, true);
    tick(&mut app, 61);

    let gravity = app.world().get::<GravityScale>(player).unwrap();
    let velocity = app.world().get::<Velocity>(player).unwrap();

    assert!(app.world().get::<Wings>(player).is_none());
    assert_eq!(gravity.0, 1.0, "Без Wings гравитация не трогается");
    assert!(
        velocity.linvel.y < -5.0,
        "Свободное падение без glide-клампа: vy = {}",
        velocity.linvel.y
    );
}

#[test]
fn test_glide_clamp_on_airborne_winged_spawn() {
    let mut app = create_headless_app();
    let player = spawn_in(&mut app, true, Vec3::new(0.0, REST_HEIGHT + 10.0, 0.0));

    let mut min_fall = 0.0_f32;
    for _ in 0..360 {
        app.update();
        min_fall = min_fall.min(app.world().get::<Velocity>(player).unwrap().linvel.y);
    }

    // Кламп -2 m/s с допуском на гравитацию тика после клампа
    assert!(
        min_fall >= -2.0 - 9.81 / 60.0 - 0.01,
        "Падение с высоты клампится glide-ом: min vy = {}",
        min_fall
    );
    assert!(
        app.world().get::<GroundSensor>(player).unwrap().grounded,
        "За 6 секунд glide довёл до земли"
    );
}

#[test]
fn test_interact_locks_movement_until_timer_expires() {
    let (mut app, player) = setup_winged();

    app.world_mut().send_event(InteractIntent { entity: player });
    app.update();
    assert!(
        app.world()
            .get::<InteractAbility>(player)
            .unwrap()
            .is_busy(),
        "Жест начался"
    );

    // Пытаемся идти и прыгать во время жеста
    set_intent(&mut app, player, Vec3::NEG_Z, true, false);
    app.world_mut().send_event(JumpIntent { entity: player });
    tick(&mut app, 2);
    let triggers = drain_triggers(&mut app);
    assert!(
        triggers.iter().all(|k| *k != TriggerKind::Jump),
        "Прыжок во время жеста отклонён"
    );

    tick(&mut app, 28);
    let transform = app.world().get::<Transform>(player).unwrap();
    assert!(
        transform.translation.z.abs() < 0.01,
        "Движение во время жеста подавлено: z = {}",
        transform.translation.z
    );

    // Lockout 1.0s = 60 тиков; после истечения движение возобновляется
    tick(&mut app, 40);
    assert!(
        !app.world()
            .get::<InteractAbility>(player)
            .unwrap()
            .is_busy(),
        "Таймер жеста истёк"
    );

    tick(&mut app, 60);
    let transform = app.world().get::<Transform>(player).unwrap();
    assert!(
        transform.translation.z < -1.0,
        "После жеста движение работает: z = {}",
        transform.translation.z
    );
}

#[test]
fn test_interact_rejected_while_airborne() {
    let mut app = create_headless_app();
    let player = spawn_in(&mut app, true, Vec3::new(0.0, REST_HEIGHT + 10.0, 0.0));
    app.update();

    app.world_mut().send_event(InteractIntent { entity: player });
    app.update();

    assert!(
        !app.world()
            .get::<InteractAbility>(player)
            .unwrap()
            .is_busy(),
        "Жест в воздухе не начинается"
    );
    let triggers = drain_triggers(&mut app);
    assert!(triggers.iter().all(|k| *k != TriggerKind::Interact));
}

#[test]
fn test_animator_params_track_state() {
    let (mut app, player) = setup_winged();

    set_intent(&mut app, player, Vec3::NEG_Z, false, false);
    tick(&mut app, 60);
    {
        let params = app.world().get::<AnimatorParams>(player).unwrap();
        assert!(
            params.speed > 1.5,
            "Damped speed дошёл к walk_speed: {}",
            params.speed
        );
        assert!(params.grounded);
        assert!(!params.falling && !params.flying);
    }

    // Airborne спуск без полёта → falling
    let mut app = create_headless_app();
    let player = spawn_in(&mut app, true, Vec3::new(0.0, REST_HEIGHT + 10.0, 0.0));
    tick(&mut app, 30);
    let params = app.world().get::<AnimatorParams>(player).unwrap();
    assert!(!params.grounded);
    assert!(params.falling, "Спуск быстрее порога → falling");
    assert!(!params.flying);
}

#[test]
fn test_jump_and_interact_fire_animation_triggers() {
    let (mut app, player) = setup_winged();

    app.world_mut().send_event(JumpIntent { entity: player });
    app.update();
    let triggers = drain_triggers(&mut app);
    assert!(triggers.contains(&TriggerKind::Jump));

    // Приземлились — жест
    tick(&mut app, 150);
    app.world_mut().send_event(InteractIntent { entity: player });
    app.update();
    let triggers = drain_triggers(&mut app);
    assert!(triggers.contains(&TriggerKind::Interact));
}

#[test]
fn test_keyboard_polling_builds_camera_relative_intent() {
    let (mut app, player) = setup_winged();
    app.world_mut().entity_mut(player).insert(Player);

    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyW);
    keys.press(KeyCode::ShiftLeft);
    app.insert_resource(keys);

    app.update();

    let intent = app.world().get::<MoveIntent>(player).unwrap();
    // Default CameraOrientation: forward = −Z
    assert!(intent.direction.z < -0.99, "W → вперёд по камере");
    assert!(intent.run, "Shift → run");
}
