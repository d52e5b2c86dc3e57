//! The endpoint front type: override layering around one dispatch.
//!
//! [`Endpoint`] owns a [`Defaults`] configuration and applies the two
//! finer-grained override layers on top of it for each dispatch:
//!
//! 1. the **instance volatile** layer, set with [`Endpoint::set_cases`]
//!    and friends just before a dispatch and consumed by it;
//! 2. the **per-call** layer, an explicit [`Overrides`] argument, applied
//!    as the final merge step so it wins over the volatile layer.
//!
//! It also drives the external operation producer: [`Endpoint::invoke`]
//! runs a caller-supplied operation against the context and options, then
//! dispatches the result it yields.

use crate::defaults::Defaults;
use casewise_core::{
    BeforeTable, CaseTable, CasewiseError, HandlerTable, Table, invoke_matched, match_case,
};

/// Ephemeral override tables for a single dispatch.
///
/// Constructed fresh per call and discarded afterwards; any table left
/// unset falls through to the layer below.
pub struct Overrides<Cx: 'static, R: 'static, O: 'static, T: 'static> {
    cases: Option<CaseTable<Cx, R>>,
    handlers: Option<HandlerTable<Cx, R, O, T>>,
    before: Option<BeforeTable<Cx, R, O>>,
}

impl<Cx, R, O, T> Overrides<Cx, R, O, T> {
    /// Create an empty override set.
    pub fn new() -> Self {
        Self {
            cases: None,
            handlers: None,
            before: None,
        }
    }

    /// Override cases for this dispatch.
    pub fn cases(mut self, table: CaseTable<Cx, R>) -> Self {
        self.cases = Some(table);
        self
    }

    /// Override handlers for this dispatch.
    pub fn handlers(mut self, table: HandlerTable<Cx, R, O, T>) -> Self {
        self.handlers = Some(table);
        self
    }

    /// Override before-response hooks for this dispatch.
    pub fn before(mut self, table: BeforeTable<Cx, R, O>) -> Self {
        self.before = Some(table);
        self
    }
}

impl<Cx, R, O, T> Default for Overrides<Cx, R, O, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A configured dispatch entry point.
///
/// Holds the accumulated defaults plus the volatile override slots. The
/// contract assumes single-threaded use per endpoint: sharing one across
/// concurrent callers requires external synchronization.
pub struct Endpoint<Cx: 'static, R: 'static, O: 'static, T: 'static> {
    defaults: Defaults<Cx, R, O, T>,
    volatile: Overrides<Cx, R, O, T>,
}

impl<Cx, R, O, T> Endpoint<Cx, R, O, T> {
    /// Create an endpoint over an already-built configuration.
    pub fn new(defaults: Defaults<Cx, R, O, T>) -> Self {
        Self {
            defaults,
            volatile: Overrides::new(),
        }
    }

    /// The configuration this endpoint dispatches with.
    pub fn defaults(&self) -> &Defaults<Cx, R, O, T> {
        &self.defaults
    }

    /// Stage a volatile case override, consumed by the next dispatch.
    pub fn set_cases(&mut self, table: CaseTable<Cx, R>) {
        self.volatile.cases = Some(table);
    }

    /// Stage a volatile handler override, consumed by the next dispatch.
    pub fn set_handlers(&mut self, table: HandlerTable<Cx, R, O, T>) {
        self.volatile.handlers = Some(table);
    }

    /// Stage a volatile before-response override, consumed by the next dispatch.
    pub fn set_before(&mut self, table: BeforeTable<Cx, R, O>) {
        self.volatile.before = Some(table);
    }

    /// Dispatch a pre-produced result.
    ///
    /// The caller keeps the result and observes any hook side effects on
    /// it after this returns.
    ///
    /// # Errors
    ///
    /// [`CasewiseError::Dispatch`] on a missing case or handler.
    pub fn handle(&mut self, cx: &mut Cx, result: &mut R, options: &O) -> Result<T, CasewiseError> {
        self.handle_with(cx, result, options, Overrides::new())
    }

    /// Dispatch a pre-produced result with per-call overrides.
    ///
    /// Layer precedence, lowest first: accumulated defaults, then the
    /// staged volatile overrides (cleared here whether or not the dispatch
    /// succeeds), then `overrides` as the final merge step.
    ///
    /// # Errors
    ///
    /// [`CasewiseError::Dispatch`] on a missing case or handler.
    pub fn handle_with(
        &mut self,
        cx: &mut Cx,
        result: &mut R,
        options: &O,
        overrides: Overrides<Cx, R, O, T>,
    ) -> Result<T, CasewiseError> {
        let volatile = std::mem::take(&mut self.volatile);

        let cases = layered(self.defaults.cases(), volatile.cases, overrides.cases);
        let handlers = layered(self.defaults.handlers(), volatile.handlers, overrides.handlers);
        let before = layered(self.defaults.before(), volatile.before, overrides.before);

        let case = match_case(&cases, cx, result)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(case, "dispatching matched case");

        let outcome = invoke_matched(case, cx, result, &handlers, Some(&before), options)?;
        Ok(outcome)
    }

    /// Run the operation producer, then dispatch the result it yields.
    ///
    /// The operation receives the context and the same options bag that
    /// later reaches the hook and handler.
    ///
    /// # Errors
    ///
    /// [`CasewiseError::Dispatch`] on a missing case or handler.
    pub fn invoke<Op>(&mut self, cx: &mut Cx, operation: Op, options: &O) -> Result<T, CasewiseError>
    where
        Op: FnOnce(&mut Cx, &O) -> R,
    {
        self.invoke_with(cx, operation, options, Overrides::new())
    }

    /// Run the operation producer, then dispatch with per-call overrides.
    ///
    /// # Errors
    ///
    /// [`CasewiseError::Dispatch`] on a missing case or handler.
    pub fn invoke_with<Op>(
        &mut self,
        cx: &mut Cx,
        operation: Op,
        options: &O,
        overrides: Overrides<Cx, R, O, T>,
    ) -> Result<T, CasewiseError>
    where
        Op: FnOnce(&mut Cx, &O) -> R,
    {
        let mut result = operation(cx, options);
        self.handle_with(cx, &mut result, options, overrides)
    }
}

/// Merge the three table layers for one dispatch, lowest first.
fn layered<V: Clone>(
    defaults: &Table<V>,
    volatile: Option<Table<V>>,
    call: Option<Table<V>>,
) -> Table<V> {
    let mut merged = defaults.clone();
    if let Some(table) = volatile {
        merged = merged.merge(&table);
    }
    if let Some(table) = call {
        merged = merged.merge(&table);
    }
    merged
}
