//! Headless прогон контроллера SKYDRIFT
//!
//! Запускает Bevy App без рендера со scripted input: walk → run → jump →
//! полёт → glide → interaction gesture. Печатает состояние раз в секунду.

use bevy::prelude::*;

use skydrift_controller::motion::headless::REST_HEIGHT;
use skydrift_controller::{
    create_headless_app, spawn_winged_character, AnimatorParams, GroundSensor, InteractIntent,
    JumpIntent, MoveIntent, Wings,
};

const TICKS: u32 = 900; // 15 секунд при 60Hz

fn main() {
    println!("Starting SKYDRIFT headless demo ({} ticks)", TICKS);

    let mut app = create_headless_app();

    let player = {
        let world = app.world_mut();
        let player = {
            let mut commands = world.commands();
            spawn_winged_character(&mut commands, Vec3::new(0.0, REST_HEIGHT, 0.0))
        };
        world.flush();
        player
    };

    for tick in 0..TICKS {
        script_input(app.world_mut(), player, tick);
        app.update();

        if tick % 60 == 0 {
            print_state(app.world_mut(), player, tick);
        }
    }

    println!("Demo complete!");
}

/// Scripted input по фазам:
/// - 0..120: walk вперёд
/// - 120..240: run
/// - 240: прыжок (без удержания — виден glide на спуске)
/// - 300..420: прыжок + удержание → полёт
/// - 420..: отпускаем → glide до земли
/// - 840: interaction gesture
fn script_input(world: &mut World, player: Entity, tick: u32) {
    {
        let Some(mut intent) = world.get_mut::<MoveIntent>(player) else {
            return;
        };

        intent.direction = if tick < 420 { Vec3::NEG_Z } else { Vec3::ZERO };
        intent.run = (120..240).contains(&tick);
        intent.jump_held = (300..420).contains(&tick);
    }

    if tick == 240 || tick == 300 {
        world.send_event(JumpIntent { entity: player });
    }
    if tick == 840 {
        world.send_event(InteractIntent { entity: player });
    }
}

fn print_state(world: &mut World, player: Entity, tick: u32) {
    let Ok(entity) = world.get_entity(player) else {
        return;
    };
    let (Some(transform), Some(sensor), Some(wings), Some(params)) = (
        entity.get::<Transform>(),
        entity.get::<GroundSensor>(),
        entity.get::<Wings>(),
        entity.get::<AnimatorParams>(),
    ) else {
        return;
    };

    println!(
        "Tick {:4}: pos=({:6.2}, {:5.2}, {:7.2}) grounded={} flying={} anim_speed={:.2}",
        tick,
        transform.translation.x,
        transform.translation.y,
        transform.translation.z,
        sensor.grounded,
        wings.flying,
        params.speed,
    );
}
