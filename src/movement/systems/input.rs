//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

/// `positive - negative`, like a digital axis on a gamepad.
fn axis(keyboard: &ButtonInput<KeyCode>, negative: KeyCode, positive: KeyCode) -> f32 {
    let mut value = 0.0;
    if keyboard.pressed(negative) {
        value -= 1.0;
    }
    if keyboard.pressed(positive) {
        value += 1.0;
    }
    value
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Vertical axes are +y down to match simulation space
    input.primary_axis = Vec2::new(
        axis(&keyboard, KeyCode::KeyA, KeyCode::KeyD),
        axis(&keyboard, KeyCode::KeyW, KeyCode::KeyS),
    );
    input.secondary_axis = Vec2::new(
        axis(&keyboard, KeyCode::ArrowLeft, KeyCode::ArrowRight),
        axis(&keyboard, KeyCode::ArrowUp, KeyCode::ArrowDown),
    );

    // Edges stay latched until a fixed tick consumes them
    input.jump_just_pressed |=
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.dash_just_pressed |=
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);
}
