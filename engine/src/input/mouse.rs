//! Mouse State Module
//!
//! Tracks pointer position in normalized device coordinates, button state,
//! and button/move edge events buffered between frames.
//!
//! Events are buffered as "last known state" plus edge flags, not a queue:
//! handlers assign fields, and [`MouseState::take_events`] consumes the
//! accumulated edges atomically once per frame.

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (usually left) button - drives drag gestures.
    Primary,
    /// Secondary (usually right) button - force-ends a gesture.
    Secondary,
    Middle,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

/// Held-down state of the tracked mouse buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
}

impl ButtonState {
    /// Update the held state for a specific button.
    pub fn set(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Primary => self.primary = pressed,
            MouseButton::Secondary => self.secondary = pressed,
            MouseButton::Middle => self.middle = pressed,
            MouseButton::Other(_) => {}
        }
    }

    /// Check if any tracked button is held.
    pub fn any_pressed(&self) -> bool {
        self.primary || self.secondary || self.middle
    }
}

/// Pointer edge events accumulated since the previous frame.
///
/// Consumed atomically by the frame tick; multiple raw events of the same
/// kind within one frame collapse into a single flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerEvents {
    /// Primary button went down this frame.
    pub primary_pressed: bool,
    /// Primary button went up this frame.
    pub primary_released: bool,
    /// Secondary button went down this frame.
    pub secondary_pressed: bool,
    /// The pointer moved this frame.
    pub moved: bool,
}

impl PointerEvents {
    /// Check if any edge event occurred.
    pub fn any(&self) -> bool {
        self.primary_pressed || self.primary_released || self.secondary_pressed || self.moved
    }
}

/// Complete mouse state for the editor.
///
/// Position is kept in normalized device coordinates: [-1, 1] on each
/// axis, (0, 0) at viewport center, Y up. `None` until the first move and
/// whenever the pointer leaves the window.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    /// Current pointer position in NDC, if the pointer is in the window.
    position: Option<(f32, f32)>,
    /// Current held-button state.
    pub buttons: ButtonState,
    /// Edge events since the last `take_events` call.
    events: PointerEvents,
}

impl MouseState {
    /// Create a new mouse state with no position and all buttons released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the pointer position from raw pixel coordinates.
    ///
    /// # Arguments
    /// * `x`, `y` - Position in pixels, origin at the top-left
    /// * `window_width`, `window_height` - Current viewport size in pixels
    pub fn set_position(&mut self, x: f64, y: f64, window_width: u32, window_height: u32) {
        if window_width == 0 || window_height == 0 {
            return;
        }
        let ndc_x = (x as f32 / window_width as f32) * 2.0 - 1.0;
        let ndc_y = -((y as f32 / window_height as f32) * 2.0 - 1.0);
        self.position = Some((ndc_x, ndc_y));
        self.events.moved = true;
    }

    /// Current pointer position in NDC, if available.
    pub fn ndc_position(&self) -> Option<(f32, f32)> {
        self.position
    }

    /// Handle a button press/release event.
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        self.buttons.set(button, pressed);
        match (button, pressed) {
            (MouseButton::Primary, true) => self.events.primary_pressed = true,
            (MouseButton::Primary, false) => self.events.primary_released = true,
            (MouseButton::Secondary, true) => self.events.secondary_pressed = true,
            _ => {}
        }
    }

    /// Consume the buffered edge events, resetting them for the next frame.
    pub fn take_events(&mut self) -> PointerEvents {
        std::mem::take(&mut self.events)
    }

    /// Handle the pointer leaving the window.
    ///
    /// Clears the position so the frame tick stops raycasting until the
    /// pointer re-enters.
    pub fn leave_window(&mut self) {
        self.position = None;
    }
}
