//! Counter Core - state and behaviour of the bounded counter widget
//!
//! This crate holds everything about the counter that does not depend on a
//! rendering backend. A GUI crate drives it by turning user input and host
//! attribute writes into [`Command`]s and carrying out the [`Effect`]s that
//! reconciliation returns.
//!
//! # Model
//!
//! - **State**: value, inclusive bounds, and an emphasis flag
//! - **Commands**: increment/decrement plus external assignments
//! - **Reconciliation**: snapshot diff after each batch; inverted bounds are
//!   swapped, the value is clamped, and reaching 21 requests a celebration
//! - **Appearance**: disabled buttons and colour roles for renderers
//!
//! # Example
//!
//! ```
//! use counter_core::{Command, CounterWidget};
//!
//! let mut counter = CounterWidget::new();
//! counter.reconcile();
//!
//! counter.apply([Command::SetMin(50), Command::SetMax(10)]);
//! assert_eq!((counter.min(), counter.max(), counter.value()), (10, 50, 10));
//! ```

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types
pub mod error;

/// Counter state and change detection
pub mod state;

/// Commands and reconciliation
pub mod widget;

/// Presentation hooks for renderers
pub mod appearance;

/// Lazily mounted celebration side effect
pub mod celebration;

/// Host attribute parsing and reflection
pub mod attributes;

/// Localized strings
pub mod i18n;

/// Editor property schema
pub mod properties;

pub use appearance::{Appearance, Tone, HIGHLIGHT_VALUE};
pub use attributes::{parse_attribute, reflect, Attribute, AttributeUpdate};
pub use celebration::{Celebration, LazyCelebration};
pub use error::{CounterError, CounterResult};
pub use i18n::{Localizer, DEFAULT_TITLE};
pub use properties::{PropertyKind, PropertySchema, PropertySpec, ELEMENT_TAG};
pub use state::{ChangeSet, CounterState, DEFAULT_MAX, DEFAULT_MIN};
pub use widget::{Command, CounterWidget, Effect, Reconciliation, CELEBRATION_VALUE};
