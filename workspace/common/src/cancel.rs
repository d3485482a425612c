use std::cell::Cell;
use std::rc::Rc;

/// Hands out tokens for in-flight requests and invalidates them in bulk.
///
/// Each [`RequestGuard::issue`] bumps a generation counter; a token is only
/// current while no newer token was issued and the guard was not cancelled.
/// Screens check the token before committing a late response, which is how
/// results arriving after unmount (or after the user moved on) get dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    generation: Rc<Cell<u64>>,
}

/// Proof that a response belongs to the latest request
#[derive(Debug, Clone)]
pub struct CancelToken {
    generation: Rc<Cell<u64>>,
    issued_at: u64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> CancelToken {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        CancelToken {
            generation: self.generation.clone(),
            issued_at: next,
        }
    }

    pub fn cancel_all(&self) {
        self.generation.set(self.generation.get() + 1);
    }
}

impl CancelToken {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued_at
    }

    pub fn is_cancelled(&self) -> bool {
        !self.is_current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_token_is_current() {
        let guard = RequestGuard::new();
        let token = guard.issue();
        assert!(token.is_current());
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let guard = RequestGuard::new();
        let first = guard.issue();
        let second = guard.issue();
        assert!(first.is_cancelled());
        assert!(second.is_current());
    }

    #[test]
    fn test_cancel_all_invalidates_outstanding() {
        let guard = RequestGuard::new();
        let token = guard.issue();
        guard.clone().cancel_all();
        assert!(token.is_cancelled());
    }
}
