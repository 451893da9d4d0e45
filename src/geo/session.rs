//! Stale-lookup guard for map interactions.
//!
//! A reverse-geocode lookup has no timeout and no ordering guarantee with
//! anything the user does while it is in flight. Each map interaction opens
//! a session generation; a lookup result is only applied if its token is
//! still the current generation, so a late answer cannot overwrite fields
//! after the user has moved on.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupToken {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct MapSession {
    generation: u64,
}

impl MapSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new interaction; earlier tokens become stale.
    pub fn begin(&mut self) -> LookupToken {
        self.generation += 1;
        LookupToken {
            generation: self.generation,
        }
    }

    /// Invalidate every outstanding token (the user closed the picker).
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, token: LookupToken) -> bool {
        token.generation == self.generation
    }
}
