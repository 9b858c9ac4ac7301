//! 2D visualization.
//!
//! Goal and robot are drawn as polygon outlines with gizmos. The domain uses window
//! coordinates with the origin in the top left corner and the y-axis pointing down, while Bevy
//! centers the 2D camera on the origin with the y-axis pointing up.

use bevy::prelude::*;

use crate::{
    domain::{AngleSpace, Position, Renderer, Rgb},
    resource::SimulationRes,
    simulator::simulate,
};

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, set_up)
            .add_systems(
                Update,
                (
                    update_title,
                    update_text,
                    handle_keyboard_input,
                    draw.after(simulate),
                ),
            )
            .init_resource::<Scene>();
    }
}

#[derive(Resource, Default)]
pub struct Scene {
    show_text: bool,
}

struct GizmoRenderer<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    color: Color,
    width: f64,
    height: f64,
}

impl Renderer for GizmoRenderer<'_, '_, '_> {
    fn set_color(&mut self, color: Rgb) {
        self.color = to_bevy_color(color);
    }

    fn draw_polygon(&mut self, points: &[Position]) {
        let Some(first) = points.first() else {
            return;
        };
        let outline = points
            .iter()
            .chain(std::iter::once(first))
            .map(|p| to_bevy_position(*p, self.width, self.height))
            .collect::<Vec<_>>();
        self.gizmos.linestrip_2d(outline, self.color);
    }
}

fn set_up(mut commands: Commands, simulation: Res<SimulationRes>) {
    commands.insert_resource(ClearColor(to_bevy_color(simulation.config().background)));
    commands.spawn(Camera2dBundle::default());
    create_text(&mut commands);
}

fn create_text(commands: &mut Commands) {
    let text_style = TextStyle {
        font_size: 20.0,
        color: Color::BLACK,
        ..default()
    };
    commands.spawn(
        TextBundle::from_sections(vec![TextSection::new("", text_style)]).with_style(
            Style {
                position_type: PositionType::Absolute,
                bottom: Val::Px(12.0),
                left: Val::Px(12.0),
                ..default()
            },
        ),
    );
}

fn draw(mut simulation: ResMut<SimulationRes>, mut gizmos: Gizmos) {
    let config = simulation.config();
    let mut renderer = GizmoRenderer {
        gizmos: &mut gizmos,
        color: Color::BLACK,
        width: config.width,
        height: config.height,
    };
    simulation.render(&mut renderer);
}

fn update_title(time: Res<Time>, mut windows: Query<&mut Window>) {
    if let Ok(mut window) = windows.get_single_mut() {
        window.title = format!(
            "Press ESC to exit.{}{:1.4}",
            " ".repeat(8),
            time.delta_seconds_f64()
        );
    }
}

fn update_text(mut text: Query<&mut Text>, scene: Res<Scene>, simulation: Res<SimulationRes>) {
    let mut text = text.single_mut();
    if scene.show_text {
        let robot = simulation.robot();
        let goal = simulation.goal().position();
        let heading = AngleSpace::radians_from_ticks(robot.orientation()).to_degrees();
        text.sections[0].value = format!(
            "{:?}   POS: {:4.0} {:4.0}   HEADING: {:4} ticks {heading:3.0} deg   GOAL: {:4.0} {:4.0}",
            robot.state(),
            robot.position().x(),
            robot.position().y(),
            robot.orientation().value(),
            goal.x(),
            goal.y(),
        );
    } else {
        text.sections[0].value = String::new();
    }
}

fn handle_keyboard_input(keys: Res<ButtonInput<KeyCode>>, mut scene: ResMut<Scene>) {
    if keys.just_pressed(KeyCode::KeyT) {
        scene.show_text = !scene.show_text;
    }
}

fn to_bevy_color(color: Rgb) -> Color {
    Color::rgb_u8(color.r, color.g, color.b)
}

fn to_bevy_position(position: Position, width: f64, height: f64) -> Vec2 {
    let (x, y): (f32, f32) = position.into();
    Vec2::new(x - width as f32 / 2.0, height as f32 / 2.0 - y)
}
