//! Sky Dash - a side-scrolling obstacle-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic session logic (obstacle placement, difficulty,
//!   scoring, pause/countdown/game-over lifecycle)
//! - `bestscore`: Persisted best score (LocalStorage on web)
//!
//! Rendering, real input devices and timers live in the host; it drives
//! [`sim::tick`] once per frame and reacts to the returned
//! [`sim::SessionEvent`]s.

pub mod bestscore;
pub mod sim;

pub use bestscore::BestScore;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Ticks per wall-clock second at the fixed timestep
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    /// Vertical edge buffer obstacle gaps never enter
    pub const EDGE_MARGIN: i32 = 20;

    /// Obstacle width (both halves of a pair)
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Number of obstacle pairs kept alive and recycled
    pub const PAIRS_TO_RENDER: usize = 4;
    /// World scroll speed (units/s, obstacles move left)
    pub const SCROLL_SPEED: f32 = 200.0;
    /// Cosmetic background scroll speed (units/s)
    pub const BACKGROUND_SCROLL_SPEED: f32 = 60.0;

    /// Actor spawn position (top-left corner)
    pub const ACTOR_START_X: f32 = 80.0;
    pub const ACTOR_START_Y: f32 = 300.0;
    /// Actor collision extents
    pub const ACTOR_WIDTH: f32 = 34.0;
    pub const ACTOR_HEIGHT: f32 = 24.0;
    /// Downward gravity (units/s^2)
    pub const GRAVITY: f32 = 600.0;
    /// Upward impulse applied on a flap (units/s)
    pub const FLAP_IMPULSE: f32 = 300.0;

    /// Countdown length when entering or resuming a session (seconds)
    pub const COUNTDOWN_SECONDS: u32 = 3;
    /// Delay between game over and the automatic restart (seconds)
    pub const RESTART_DELAY_SECONDS: f32 = 1.0;
}

/// Initialize logging and panic reporting for the browser build
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
