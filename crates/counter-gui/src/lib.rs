//! Counter GUI - iced rendering of the bounded counter widget
//!
//! This crate draws a [`counter_core::CounterWidget`] with iced and carries
//! out the effects its reconciliation requests.
//!
//! # Architecture
//!
//! The runtime follows iced's Elm-inspired loop:
//! - **State**: [`CounterApp`] wrapping the core widget
//! - **Message**: button presses, host attribute writes, frame ticks
//! - **Update**: message → command batch → reconcile → effect tasks
//! - **View**: title, number, `-`/`+` buttons, confetti overlay
//!
//! The confetti layer is mounted lazily the first time the counter reaches
//! 21 and is only ticked while pieces are falling.

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types for GUI operations
pub mod error;

/// Configuration file
pub mod config;

/// Design tokens and colours
pub mod theme;

/// Confetti celebration canvas
pub mod confetti;

/// Core runtime that bridges the counter to iced
pub mod runtime;

// Re-exports for convenience
pub use config::{CounterConfig, CounterSection, ThemeSection, WindowSection};
pub use confetti::{Confetti, Piece};
pub use error::{GuiError, GuiResult};
pub use runtime::{run, CounterApp, CounterSettings, Message};
pub use theme::{BaseTheme, Color, DesignTokens};
