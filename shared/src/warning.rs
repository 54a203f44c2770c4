use std::sync::atomic::{AtomicBool, Ordering};

/// A flag that lets one advisory through and silences every later one.
pub struct WarnOnce {
    fired: AtomicBool,
}

impl WarnOnce {
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    /// Runs `emit` on the first call only. Returns whether it ran.
    pub fn fire(&self, emit: impl FnOnce()) -> bool {
        if self.fired.swap(true, Ordering::Relaxed) {
            return false;
        }
        emit();
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Relaxed)
    }
}

impl Default for WarnOnce {
    fn default() -> Self {
        Self::new()
    }
}

static PRESSED_WARNING: WarnOnce = WarnOnce::new();

/// Logs the `pressed` advisory the first time it is used in this process.
pub(crate) fn warn_pressed() {
    PRESSED_WARNING.fire(|| {
        log::warn!(
            "The `pressed` prop on buttons is experimental and may be removed. \
             Prefer a toggle control with `role` and `ariaChecked` instead."
        );
    });
}

/// Whether the `pressed` advisory has been logged in this process.
pub fn pressed_warning_issued() -> bool {
    PRESSED_WARNING.has_fired()
}
