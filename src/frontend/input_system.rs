use bhaata_phod::geometry::Vec2;
use bhaata_phod::input::{GameAction, InputSnapshot};
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::mouse::MouseButton;

/// InputSystem turns SDL2 events and device state into an `InputSnapshot`
///
/// Discrete presses (pause, confirm, shockwave, clicks) come from the event
/// queue so none are lost between frames. Held controls (thrust, fire) and
/// the pointer are sampled from device state after the queue is drained.
///
/// # Controls
///
/// - Up / W: thrust
/// - Left mouse: fire, and click menu buttons
/// - Right mouse / Keypad 0: shockwave
/// - Escape: pause
/// - Space: confirm
#[derive(Default)]
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drains pending events and samples held controls for this frame.
    pub fn poll(&mut self, event_pump: &mut EventPump) -> InputSnapshot {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => actions.push(GameAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) = key_action(key) {
                        actions.push(action);
                    }
                }
                Event::MouseButtonDown { mouse_btn, x, y, .. } => match mouse_btn {
                    MouseButton::Left => {
                        actions.push(GameAction::Click(Vec2::new(x as f32, y as f32)));
                    }
                    MouseButton::Right => actions.push(GameAction::Shockwave),
                    _ => {}
                },
                _ => {}
            }
        }

        let keyboard = event_pump.keyboard_state();
        let thrust_held =
            keyboard.is_scancode_pressed(Scancode::Up) || keyboard.is_scancode_pressed(Scancode::W);
        let mouse = event_pump.mouse_state();

        InputSnapshot {
            pointer: Vec2::new(mouse.x() as f32, mouse.y() as f32),
            thrust_held,
            fire_held: mouse.left(),
            actions,
        }
    }
}

fn key_action(key: Keycode) -> Option<GameAction> {
    match key {
        Keycode::Escape => Some(GameAction::TogglePause),
        Keycode::Space => Some(GameAction::Confirm),
        Keycode::Kp0 => Some(GameAction::Shockwave),
        _ => None,
    }
}
