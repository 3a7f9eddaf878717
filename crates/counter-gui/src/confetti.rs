//! Confetti burst drawn on an iced canvas
//!
//! Pieces live in normalized coordinates (0.0 - 1.0 on both axes) and are
//! scaled to the canvas bounds at draw time. The burst is driven by window
//! frame ticks and ends once every piece has fallen out of view.

use std::time::Instant;

use counter_core::Celebration;
use iced::mouse;
use iced::widget::canvas::{self, Frame};
use iced::{Point, Rectangle, Renderer, Size, Theme, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::theme::Color;

/// Pieces spawned per burst
const PIECES_PER_BURST: usize = 120;
/// Downward acceleration in normalized units per second squared
const GRAVITY: f32 = 0.6;
/// Pieces below this line are gone
const FLOOR: f32 = 1.1;
/// Largest time step applied per tick, so a stalled window does not
/// teleport pieces off screen
const MAX_STEP_SECS: f32 = 0.05;
/// Piece size in pixels
const PIECE_SIZE: Size = Size::new(8.0, 4.0);

/// One piece of confetti
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub position: Point,
    pub velocity: Vector,
    pub rotation: f32,
    pub spin: f32,
    pub color: Color,
}

/// The celebration sub-widget.
#[derive(Debug)]
pub struct Confetti {
    pieces: Vec<Piece>,
    active: bool,
    palette: Vec<Color>,
    rng: StdRng,
    last_tick: Option<Instant>,
}

impl Confetti {
    /// Create an inactive confetti layer using `palette` for the pieces
    #[must_use]
    pub fn new(palette: Vec<Color>) -> Self {
        Self::with_rng(palette, StdRng::from_entropy())
    }

    /// Create with a fixed seed, for reproducible bursts
    #[must_use]
    pub fn with_seed(palette: Vec<Color>, seed: u64) -> Self {
        Self::with_rng(palette, StdRng::seed_from_u64(seed))
    }

    fn with_rng(palette: Vec<Color>, rng: StdRng) -> Self {
        let palette = if palette.is_empty() {
            vec![Color::rgb(255, 255, 255)]
        } else {
            palette
        };

        Self {
            pieces: Vec::new(),
            active: false,
            palette,
            rng,
            last_tick: None,
        }
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// True while pieces are still falling
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active && !self.pieces.is_empty()
    }

    /// Advance the animation to `now`
    pub fn tick(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32());
        self.last_tick = Some(now);
        self.advance(dt);
    }

    /// Advance the animation by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        let dt = dt.clamp(0.0, MAX_STEP_SECS);

        for piece in &mut self.pieces {
            piece.velocity.y += GRAVITY * dt;
            piece.position = piece.position + piece.velocity * dt;
            piece.rotation += piece.spin * dt;
        }
        self.pieces.retain(|piece| piece.position.y < FLOOR);

        if self.pieces.is_empty() {
            self.active = false;
            self.last_tick = None;
        }
    }

    /// Scatter a fresh burst just above the top edge
    fn burst(&mut self) {
        let rng = &mut self.rng;
        let palette = &self.palette;

        self.pieces = (0..PIECES_PER_BURST)
            .map(|_| Piece {
                position: Point::new(rng.gen_range(0.0..1.0), rng.gen_range(-0.3..0.0)),
                velocity: Vector::new(rng.gen_range(-0.15..0.15), rng.gen_range(0.05..0.35)),
                rotation: rng.gen_range(0.0..std::f32::consts::TAU),
                spin: rng.gen_range(-6.0..6.0),
                color: palette[rng.gen_range(0..palette.len())],
            })
            .collect();
        self.last_tick = None;
    }
}

impl Celebration for Confetti {
    fn set_active(&mut self, active: bool) {
        if !active {
            self.active = false;
            self.pieces.clear();
            self.last_tick = None;
        } else if !self.active {
            self.active = true;
            self.burst();
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl<Message> canvas::Program<Message> for Confetti {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for piece in &self.pieces {
            let center = Vector::new(piece.position.x * bounds.width, piece.position.y * bounds.height);
            frame.with_save(|frame| {
                frame.translate(center);
                frame.rotate(piece.rotation);
                frame.fill_rectangle(
                    Point::new(-PIECE_SIZE.width / 2.0, -PIECE_SIZE.height / 2.0),
                    PIECE_SIZE,
                    piece.color.to_iced(),
                );
            });
        }

        vec![frame.into_geometry()]
    }
}
