use sdl2::{event::Event, keyboard::Keycode, keyboard::Scancode, EventPump};

/// What the user asked for during one frame.
///
/// Axes are `-1`, `0` or `1` while keys are held; the rest are edge
/// triggered by key presses since the previous poll.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputState {
    pub close_requested: bool,
    /// Object rotation, right minus left.
    pub rotate: f32,
    /// Camera orbit `(yaw, pitch)`.
    pub orbit: (f32, f32),
    /// Positive moves the camera away.
    pub zoom: f32,
    /// Net tessellation steps requested.
    pub resolution_step: i32,
    pub screenshot: bool,
}

impl InputState {
    pub fn poll(events: &mut EventPump) -> Self {
        let mut input = InputState::default();

        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                }
                | Event::KeyDown {
                    keycode: Some(Keycode::Q), ..
                } => input.close_requested = true,
                Event::KeyDown {
                    keycode: Some(Keycode::Equals),
                    ..
                }
                | Event::KeyDown {
                    keycode: Some(Keycode::KpPlus),
                    ..
                } => input.resolution_step += 1,
                Event::KeyDown {
                    keycode: Some(Keycode::Minus),
                    ..
                }
                | Event::KeyDown {
                    keycode: Some(Keycode::KpMinus),
                    ..
                } => input.resolution_step -= 1,
                Event::KeyDown {
                    keycode: Some(Keycode::P),
                    repeat: false,
                    ..
                } => input.screenshot = true,
                _event => {}
            }
        }

        let keys = events.keyboard_state();
        let axis = |negative: Scancode, positive: Scancode| {
            keys.is_scancode_pressed(positive) as i32 as f32 - keys.is_scancode_pressed(negative) as i32 as f32
        };

        input.rotate = axis(Scancode::Left, Scancode::Right);
        input.orbit = (axis(Scancode::A, Scancode::D), axis(Scancode::S, Scancode::W));
        input.zoom = axis(Scancode::Up, Scancode::Down);

        input
    }
}
