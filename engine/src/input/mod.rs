//! Input Module
//!
//! Platform-agnostic mouse input for the plan editor, decoupled from any
//! specific windowing system. Event handlers perform plain field
//! assignment only; the frame tick reads the buffered state exactly once
//! per frame and does all derived computation.
//!
//! # Example
//!
//! ```rust,ignore
//! use groundplan_engine::input::{MouseState, MouseButton};
//!
//! let mut mouse = MouseState::new();
//!
//! // Event loop: raw assignments
//! mouse.set_position(640.0, 180.0, 1280, 720);
//! mouse.set_button(MouseButton::Primary, true);
//!
//! // Frame tick: consume buffered edges once
//! let events = mouse.take_events();
//! if events.primary_pressed {
//!     // start a drag at mouse.ndc_position()
//! }
//! ```

pub mod mouse;

pub use mouse::{ButtonState, MouseButton, MouseState, PointerEvents};
