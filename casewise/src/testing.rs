//! Testing utilities for Casewise.
//!
//! This module provides small doubles for exercising dispatch wiring
//! without real business logic:
//!
//! - [`CountingHandler`]: a handler that counts invocations
//! - [`RecordingHandler`]: a handler that records options and returns a fixed outcome
//! - [`always`] / [`never`]: trivial predicates for case tables

use casewise_core::Handler;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// A predicate that matches every result.
pub fn always<Cx, R>(_cx: &Cx, _result: &R) -> bool {
    true
}

/// A predicate that matches no result.
pub fn never<Cx, R>(_cx: &Cx, _result: &R) -> bool {
    false
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations and produces `()`.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new();
/// let handlers = HandlerTable::builder()
///     .on_handler("success", counter.clone())
///     .build();
///
/// // dispatch...
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingHandler {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<Cx: 'static, R: 'static, O: 'static> Handler<Cx, R, O> for CountingHandler {
    type Output = ();

    fn call(&self, _cx: &mut Cx, _result: &mut R, _options: &O) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records the options it was invoked with and returns a
/// clone of a fixed outcome.
///
/// Useful for verifying that the opaque options bag reaches handlers
/// unchanged and that the expected table entry was resolved.
pub struct RecordingHandler<O: Clone, T: Clone> {
    options_seen: Arc<Mutex<Vec<O>>>,
    outcome: T,
}

impl<O: Clone, T: Clone> RecordingHandler<O, T> {
    /// Create a recording handler that returns `outcome` on every call.
    pub fn new(outcome: T) -> Self {
        Self {
            options_seen: Arc::new(Mutex::new(Vec::new())),
            outcome,
        }
    }

    /// Options bags received so far, in invocation order.
    pub fn options_seen(&self) -> Vec<O> {
        self.options_seen.lock().unwrap().clone()
    }

    /// Number of invocations.
    pub fn call_count(&self) -> usize {
        self.options_seen.lock().unwrap().len()
    }
}

impl<O: Clone, T: Clone> Clone for RecordingHandler<O, T> {
    fn clone(&self) -> Self {
        Self {
            options_seen: self.options_seen.clone(),
            outcome: self.outcome.clone(),
        }
    }
}

impl<Cx, R, O, T> Handler<Cx, R, O> for RecordingHandler<O, T>
where
    Cx: 'static,
    R: 'static,
    O: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    type Output = T;

    fn call(&self, _cx: &mut Cx, _result: &mut R, options: &O) -> T {
        self.options_seen.lock().unwrap().push(options.clone());
        self.outcome.clone()
    }
}
