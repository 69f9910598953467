use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 單調遞增的世代計數器；每次新的操作都會讓先前發出的 ticket 失效
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    current: Arc<AtomicU64>,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self) -> Ticket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            counter: Some(Arc::clone(&self.current)),
            generation,
        }
    }

    pub fn current(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct Ticket {
    counter: Option<Arc<AtomicU64>>,
    generation: u64,
}

impl Ticket {
    /// 不受任何計數器約束、永遠有效的 ticket
    pub fn detached() -> Self {
        Self {
            counter: None,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        match &self.counter {
            Some(counter) => counter.load(Ordering::SeqCst) == self.generation,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_invalidates_older() {
        let counter = GenerationCounter::new();
        let first = counter.advance();
        assert!(first.is_current());

        let second = counter.advance();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(counter.current(), second.generation());
    }

    #[test]
    fn test_detached_ticket_is_always_current() {
        assert!(Ticket::detached().is_current());
    }
}
