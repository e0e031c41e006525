//! Desktop simulator for the tictac-rs board widget.
//!
//! Renders the tictac-core game screen in an SDL2 window via
//! `embedded-graphics-simulator`. Mouse input is forwarded as touch events:
//! button down → press, motion while held → drag, button up → release.
//!
//! # Key bindings
//!
//! | Key   | Action                            |
//! |-------|-----------------------------------|
//! | R     | Randomize the field               |
//! | P     | Show the 8×6 preview field        |
//! | C     | Start over on an empty 3×3 field  |
//! | Q/Esc | Quit                              |

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use tictac_core::FieldResult;
use tictac_core::screen::GameScreen;
use tictac_core::ui::{
    DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, Drawable, FieldViewStyle, TouchEvent, TouchPoint,
};

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Edge length of the field created by the "clear" key.
const CLEAR_SIDE: usize = 3;

/// Full-screen bounding rectangle.
fn screen_bounds() -> Rectangle {
    Rectangle::new(
        Point::zero(),
        Size::new(DISPLAY_WIDTH_PX as u32, DISPLAY_HEIGHT_PX as u32),
    )
}

/// Clamp a window point onto the touch coordinate space.
fn to_touch_point(point: Point) -> TouchPoint {
    TouchPoint::new(point.x.max(0) as u16, point.y.max(0) as u16)
}

/// Apply a keyboard shortcut. Returns `Ok(false)` when the key means quit.
fn handle_key(screen: &mut GameScreen<StdRng>, keycode: Keycode) -> FieldResult<bool> {
    match keycode {
        Keycode::Q | Keycode::Escape => return Ok(false),
        Keycode::R => screen.randomize()?,
        Keycode::P => {
            info!("Showing preview field");
            screen.show_preview()?;
        }
        Keycode::C => {
            info!("Clearing field");
            screen.reset(CLEAR_SIDE, CLEAR_SIDE)?;
        }
        _ => {}
    }
    Ok(true)
}

fn main() {
    env_logger::init();
    info!("Starting tictac-rs simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: R=Randomize  P=Preview  C=Clear  Q=Quit");

    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(
        DISPLAY_WIDTH_PX as u32,
        DISPLAY_HEIGHT_PX as u32,
    ));

    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Tic-Tac-Toe Simulator", &output_settings);

    let mut screen = match GameScreen::new(
        screen_bounds(),
        FieldViewStyle::default(),
        StdRng::from_entropy(),
    ) {
        Ok(screen) => screen,
        Err(e) => {
            error!("Failed to create game screen: {}", e);
            return;
        }
    };

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(Rgb565::BLACK);
    let _ = screen.draw(&mut display);
    screen.mark_clean();
    window.update(&display);

    let mut mouse_down = false;

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match handle_key(&mut screen, keycode) {
                    Ok(true) => {}
                    Ok(false) => break 'running,
                    Err(e) => error!("Key {:?} failed: {}", keycode, e),
                },

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    mouse_down = true;
                    let touch = TouchEvent::Press(to_touch_point(point));
                    if let Some(action) = screen.handle_touch(touch) {
                        info!("Touch → action {:?}", action);
                    }
                }

                SimulatorEvent::MouseMove { point } if mouse_down => {
                    screen.handle_touch(TouchEvent::Drag(to_touch_point(point)));
                }

                SimulatorEvent::MouseButtonUp { point, .. } => {
                    mouse_down = false;
                    screen.handle_touch(TouchEvent::Release(to_touch_point(point)));
                }

                _ => {}
            }
        }

        screen.update();

        if screen.is_dirty() {
            let _ = display.clear(Rgb565::BLACK);
            if let Err(e) = screen.draw(&mut display) {
                error!("Draw error: {:?}", e);
            }
            screen.mark_clean();
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
