//! Keyboard control of the application.
//!
//! The robot steers itself, so the keyboard only ends the program: `Escape` or `Q` quits.

use bevy::{app::AppExit, prelude::*};

const QUIT_KEYS: [KeyCode; 2] = [KeyCode::Escape, KeyCode::KeyQ];

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, control);
    }
}

fn control(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.any_just_pressed(QUIT_KEYS) {
        info!("quit requested");
        exit.send(AppExit);
    }
}
