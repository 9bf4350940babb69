//! Persisted best score
//!
//! Stored in LocalStorage under a single key as a string-encoded integer.
//! A missing or unreadable value means "no best score yet"; unavailable
//! storage degrades silently and the in-memory value stays authoritative
//! for the current session.

/// Best score record, read once at startup and written on every new best
#[derive(Debug, Clone, Copy, Default)]
pub struct BestScore {
    value: u32,
}

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bestScore";

    /// Current best
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Store `score` if it beats the current best.
    ///
    /// Returns true when the record was updated.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.value {
            self.value = score;
            self.save();
            true
        } else {
            false
        }
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(text)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(value) = text.parse::<u32>() {
                    log::info!("Loaded best score {}", value);
                    return Self { value };
                }
            }
        }

        log::info!("No best score found, starting fresh");
        Self::default()
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.value.to_string());
            log::info!("Best score saved ({})", self.value);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(&self) {
        // No-op for native
    }
}
