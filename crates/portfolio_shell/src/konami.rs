//! Key-code sequence detector for the Konami easter egg.

/// `KeyboardEvent.code` values that make up the sequence.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Console line written when the sequence completes.
pub const KONAMI_MESSAGE: &str = "🎉 Konami Code activated! You found the secret! 🎉";

/// Progress through [`KONAMI_SEQUENCE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KonamiTracker {
    progress: usize,
}

impl KonamiTracker {
    /// Feeds one key code. Returns `true` exactly when it completes the sequence.
    ///
    /// Any key that does not continue the sequence resets progress to zero, including one that
    /// would start it over.
    pub fn observe(&mut self, code: &str) -> bool {
        if KONAMI_SEQUENCE.get(self.progress) != Some(&code) {
            self.progress = 0;
            return false;
        }
        self.progress += 1;
        if self.progress == KONAMI_SEQUENCE.len() {
            self.progress = 0;
            return true;
        }
        false
    }

    /// Number of keys matched so far.
    pub fn progress(&self) -> usize {
        self.progress
    }
}
