use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;

use super::{NegativeWorkers, Sequence, Signal};
use crate::util::result::ResultExtension;

impl<T: Sync> Sequence<T> {
    /// Calls `f` on every element with at most `workers` calls running at once, each on its own
    /// scoped thread.
    ///
    /// Elements are dispatched in order: for each one, the caller waits for a free slot and then
    /// starts a call on it. As soon as any call returns [`Signal::Stop`], no further elements are
    /// dispatched. Calls that are already running are not interrupted. They can check
    /// [`Cancellation::requested`] to wind down early. This method only returns once every call
    /// it has started has returned.
    ///
    /// There is no ordering between concurrent calls and `f` must synchronize any state it
    /// shares between them.
    ///
    /// A call that panics counts as a [`Signal::Stop`], and this method panics in turn once every
    /// started call has returned.
    ///
    /// A `workers` count of 0 never frees a slot, so this blocks forever on any non-empty
    /// Sequence.
    ///
    /// # Errors
    /// Returns [`NegativeWorkers`] before starting any calls if `workers` is negative.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::atomic::{AtomicUsize, Ordering};
    /// # use sequence_lib::sequence::{Sequence, Signal};
    /// let total = AtomicUsize::new(0);
    /// Sequence::from_iter(1..=10).try_for_each_c(3, |&i, _| {
    ///     total.fetch_add(i, Ordering::Relaxed);
    ///     Signal::Continue
    /// }).unwrap();
    /// assert_eq!(total.into_inner(), 55);
    /// ```
    pub fn try_for_each_c<F>(&self, workers: isize, f: F) -> Result<(), NegativeWorkers>
    where
        F: Fn(&T, &Cancellation<'_>) -> Signal + Sync,
    {
        let limit = usize::try_from(workers).map_err(|_| NegativeWorkers { workers })?;
        let pool = Pool::new(limit);

        thread::scope(|scope| {
            for item in self.inner.iter() {
                let Some(slot) = pool.acquire() else {
                    break;
                };
                let f = &f;
                scope.spawn(move || {
                    let signal = f(item, &Cancellation { pool: slot.pool });
                    slot.release(signal);
                });
            }
        });

        Ok(())
    }

    /// Calls `f` on every element with at most `workers` calls running at once. See
    /// [`try_for_each_c`](Sequence::try_for_each_c).
    ///
    /// # Panics
    /// Panics if `workers` is negative, or with the panic of any call to `f` once all started calls
    /// have returned.
    #[track_caller]
    pub fn for_each_c<F>(&self, workers: isize, f: F)
    where
        F: Fn(&T, &Cancellation<'_>) -> Signal + Sync,
    {
        self.try_for_each_c(workers, f).throw()
    }
}

/// Handed to each call of [`for_each_c`](Sequence::for_each_c), allowing long running calls to
/// notice that another call has asked to stop.
pub struct Cancellation<'a> {
    pool: &'a Pool,
}

impl Cancellation<'_> {
    /// Returns true once any call in the same traversal has returned [`Signal::Stop`].
    pub fn requested(&self) -> bool {
        self.pool.state().cancelled
    }
}

#[derive(Debug)]
struct PoolState {
    active: usize,
    cancelled: bool,
}

/// The shared state of a single bounded traversal: how many calls are running and whether any of
/// them has asked to stop.
#[derive(Debug)]
struct Pool {
    limit: usize,
    state: Mutex<PoolState>,
    freed: Condvar,
}

impl Pool {
    const fn new(limit: usize) -> Pool {
        Pool {
            limit,
            state: Mutex::new(PoolState {
                active: 0,
                cancelled: false,
            }),
            freed: Condvar::new(),
        }
    }

    // Calls never run while holding the lock and a panicking call still releases its slot, so the
    // state behind a poisoned lock is consistent.
    fn state(&self) -> MutexGuard<'_, PoolState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Waits for a free slot and claims it, or returns [`None`] if the traversal was cancelled
    /// while waiting.
    fn acquire(&self) -> Option<Slot<'_>> {
        let mut state = self.state();
        while !state.cancelled && state.active >= self.limit {
            state = self.freed.wait(state).unwrap_or_else(PoisonError::into_inner);
        }

        if state.cancelled {
            return None;
        }

        state.active += 1;
        Some(Slot { pool: self, signal: Signal::Continue })
    }
}

/// A claimed slot in a [`Pool`], given back when dropped.
struct Slot<'a> {
    pool: &'a Pool,
    signal: Signal,
}

impl Slot<'_> {
    fn release(mut self, signal: Signal) {
        self.signal = signal;
    }
}

impl Drop for Slot<'_> {
    fn drop(&mut self) {
        let mut state = self.pool.state();
        state.active -= 1;
        if self.signal.is_stop() || thread::panicking() {
            state.cancelled = true;
        }
        self.pool.freed.notify_all();
    }
}
