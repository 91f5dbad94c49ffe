//! Input state.
//!
//! One owner for held movement keys, the pause and debug toggles, and the
//! last mouse position. The windowing layer feeds raw events in; the session
//! reads movement axes and mouse deltas out.

/// A held movement key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKey {
    /// Move along the look direction (W).
    Forward,
    /// Move against the look direction (S).
    Backward,
    /// Strafe left (A).
    Left,
    /// Strafe right (D).
    Right,
    /// Rise (Space).
    Up,
    /// Sink (F).
    Down,
}

impl MoveKey {
    /// Every key, in slot order.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Keyboard and mouse state for one window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputState {
    held: [bool; 6],
    paused: bool,
    show_debug: bool,
    /// Last mouse position; `None` until the next sample after capture.
    last_mouse: Option<(f64, f64)>,
}

impl InputState {
    /// Fresh state: nothing held, not paused, debug overlay hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key press or release.
    pub fn set_key(&mut self, key: MoveKey, pressed: bool) {
        self.held[key.slot()] = pressed;
    }

    /// Returns true while the key is held.
    #[must_use]
    pub const fn is_held(&self, key: MoveKey) -> bool {
        self.held[key.slot()]
    }

    /// Flips the pause flag and returns the new value.
    ///
    /// Unpausing re-arms mouse capture, so the first sample afterwards does
    /// not turn the view.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        if !self.paused {
            self.last_mouse = None;
        }
        self.paused
    }

    /// Flips the debug overlay flag and returns the new value.
    pub fn toggle_debug(&mut self) -> bool {
        self.show_debug = !self.show_debug;
        self.show_debug
    }

    /// Returns true while paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns true while the debug overlay is shown.
    #[must_use]
    pub const fn show_debug(&self) -> bool {
        self.show_debug
    }

    /// Feeds an absolute cursor position.
    ///
    /// Returns `(d_pitch, d_yaw)` since the previous sample, or `None` while
    /// paused and on the first sample after capture. Moving the cursor down
    /// gives a positive pitch delta.
    #[allow(clippy::cast_possible_truncation)]
    pub fn mouse_moved(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        if self.paused {
            return None;
        }
        let (last_x, last_y) = self.last_mouse.replace((x, y))?;
        Some(((y - last_y) as f32, (x - last_x) as f32))
    }

    /// Movement request for this frame as `(forward, right, up)`.
    ///
    /// Each held key contributes `speed` along its axis; opposite keys cancel.
    #[must_use]
    pub fn movement_axes(&self, speed: f32) -> (f32, f32, f32) {
        let axis = |pos: MoveKey, neg: MoveKey| {
            let mut value = 0.0;
            if self.is_held(pos) {
                value += speed;
            }
            if self.is_held(neg) {
                value -= speed;
            }
            value
        };
        (
            axis(MoveKey::Forward, MoveKey::Backward),
            axis(MoveKey::Right, MoveKey::Left),
            axis(MoveKey::Up, MoveKey::Down),
        )
    }
}
