//! Debug-only reentrancy guard.
//!
//! `ChainedSet` calls into user code (`Hash`, `Eq`) in the middle of its
//! operations. A key whose `eq` reaches back into the same set would observe
//! a half-updated table, so each such operation marks the set busy for its
//! duration. In debug builds a nested entry panics and names both
//! operations; in release builds the guard is a zero-sized no-op.

use core::cell::Cell;
use core::marker::PhantomData;

/// Per-set busy marker. Entry points call `let _g = self.reentrancy.enter("op");`.
#[derive(Debug)]
pub(crate) struct DebugReentrancy {
    #[cfg(debug_assertions)]
    active: Cell<Option<&'static str>>,
    // !Sync in every build profile, not just when `active` is present.
    _nosync: PhantomData<Cell<()>>,
}

impl DebugReentrancy {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            active: Cell::new(None),
            _nosync: PhantomData,
        }
    }

    /// Mark the set busy with `op`. In debug builds, panics if another
    /// operation is already in progress.
    #[inline]
    pub(crate) fn enter(&self, op: &'static str) -> OpGuard<'_> {
        #[cfg(debug_assertions)]
        {
            if let Some(outer) = self.active.get() {
                panic!("reentrant call to ChainedSet::{op} while ChainedSet::{outer} is running");
            }
            self.active.set(Some(op));
            return OpGuard { owner: self };
        }

        #[cfg(not(debug_assertions))]
        {
            let _ = op;
            return OpGuard { _z: PhantomData };
        }
    }
}

impl Default for DebugReentrancy {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the busy marker on drop, including during unwinding.
pub(crate) struct OpGuard<'a> {
    #[cfg(debug_assertions)]
    owner: &'a DebugReentrancy,
    #[cfg(not(debug_assertions))]
    _z: PhantomData<&'a ()>,
}

impl Drop for OpGuard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        {
            debug_assert!(self.owner.active.get().is_some());
            self.owner.active.set(None);
        }
    }
}
