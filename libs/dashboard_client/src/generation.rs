use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic counter identifying the most recent fetch of a view.
#[derive(Debug, Clone, Default)]
pub struct FetchGeneration {
    latest: Arc<AtomicU64>,
}

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new fetch, superseding every ticket issued before it.
    pub fn begin(&self) -> FetchTicket {
        let generation = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        FetchTicket {
            generation,
            latest: Arc::clone(&self.latest),
        }
    }

    pub fn current(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while no newer fetch has begun.
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::Acquire) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let generation = FetchGeneration::new();
        let first = generation.begin();
        assert!(first.is_current());

        let second = generation.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(second.generation(), first.generation() + 1);
        assert_eq!(generation.current(), second.generation());
    }

    #[test]
    fn clones_share_the_counter() {
        let generation = FetchGeneration::new();
        let ticket = generation.begin();
        generation.clone().begin();
        assert!(!ticket.is_current());
    }
}
