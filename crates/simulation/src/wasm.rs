//! `wasm-bindgen` facade for the browser host.
//!
//! The page owns the canvas, keyboard/touch listeners, audio elements and
//! the `requestAnimationFrame` loop. Each frame it calls [`Game::frame`],
//! plays sounds for [`Game::take_events`], and paints [`Game::render`].

use wasm_bindgen::prelude::*;

use crate::cell::Direction;
use crate::config::GameConfig;
use crate::session::GameSession;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Game {
    session: GameSession,
}

#[wasm_bindgen]
impl Game {
    /// Default settings on a `width` x `height` grid.
    ///
    /// # Errors
    /// Rejects grids that cannot host a game.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<Game, JsError> {
        let config = GameConfig {
            grid_width: width,
            grid_height: height,
            ..GameConfig::default()
        };
        Ok(Self {
            session: GameSession::new(config)?,
        })
    }

    /// # Errors
    /// Malformed JSON or an invalid config.
    pub fn from_config(json: &str) -> Result<Game, JsError> {
        let config = GameConfig::from_json(json)?;
        Ok(Self {
            session: GameSession::new(config)?,
        })
    }

    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    pub fn pause(&mut self) {
        self.session.pause();
    }

    pub fn resume(&mut self) {
        self.session.resume();
    }

    /// Anything other than a cardinal unit vector is ignored.
    pub fn set_heading(&mut self, dx: i32, dy: i32) {
        if let Some(direction) = Direction::from_delta(dx, dy) {
            self.session.set_heading(direction);
        }
    }

    /// Heading by code: 0 up, 1 down, 2 left, 3 right.
    pub fn set_heading_code(&mut self, code: u8) {
        if let Some(direction) = Direction::from_u8(code) {
            self.session.set_heading(direction);
        }
    }

    /// Call once per display frame with the rAF timestamp.
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        self.session.frame(now_ms)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.score()
    }

    /// 0 idle, 1 running, 2 over.
    #[must_use]
    pub fn phase(&self) -> u8 {
        self.session.phase() as u8
    }

    #[must_use]
    pub fn paused(&self) -> bool {
        self.session.is_paused()
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.session.snake().len()
    }

    pub fn set_cell_px(&mut self, cell_px: u32) {
        self.session.set_cell_px(cell_px);
    }

    #[must_use]
    pub fn width_px(&self) -> u32 {
        self.session.surface_px().0
    }

    #[must_use]
    pub fn height_px(&self) -> u32 {
        self.session.surface_px().1
    }

    /// Event codes since the last call: 1 ate food, 2 game over.
    pub fn take_events(&mut self) -> Vec<u8> {
        self.session
            .drain_events()
            .into_iter()
            .map(crate::event::GameEvent::code)
            .collect()
    }

    /// Flat `[x, y, w, h, rgb]` quintuples in paint order.
    #[must_use]
    pub fn render(&self) -> Vec<u32> {
        self.session.render().to_flat()
    }
}
