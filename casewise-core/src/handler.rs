//! Response handlers and the handler table.
//!
//! A handler is the "what to do about it" half of a dispatch: once a case
//! has matched, the handler registered under the same name runs with the
//! invoking context, the (mutable) result and the opaque options bag. The
//! engine never interprets the options or the return value; both pass
//! through unchanged.
//!
//! The same table shape serves two roles: the main handler table, where a
//! missing entry for the matched case is an error, and the before-response
//! table, where a missing entry just skips the hook step.

use crate::table::Table;
use std::sync::Arc;

/// A named response function invoked for the matched case.
///
/// Implemented for free by any `Fn(&mut Cx, &mut R, &O) -> T` closure or
/// function. The context and result are exclusive references, so anything
/// a before-response hook writes is visible to the main handler and to the
/// caller once dispatch returns.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle results of type `{R}`",
    label = "missing `Handler` implementation",
    note = "Handlers are `Fn(&mut {Cx}, &mut {R}, &{O}) -> T` or manual `Handler` implementations."
)]
pub trait Handler<Cx, R, O>: Send + Sync + 'static {
    /// The dispatch outcome type produced by this handler.
    type Output;

    /// Execute the handler for a matched case.
    fn call(&self, cx: &mut Cx, result: &mut R, options: &O) -> Self::Output;
}

// Blanket implementation for closures and functions.
impl<Cx, R, O, T, F> Handler<Cx, R, O> for F
where
    F: Fn(&mut Cx, &mut R, &O) -> T + Send + Sync + 'static,
{
    type Output = T;

    fn call(&self, cx: &mut Cx, result: &mut R, options: &O) -> T {
        self(cx, result, options)
    }
}

/// A shared, type-erased handler as stored in a [`HandlerTable`].
pub type ArcHandler<Cx, R, O, T> = Arc<dyn Handler<Cx, R, O, Output = T>>;

/// A name-keyed table of handlers.
///
/// Lookup is by exact name; entry order is irrelevant here, but the shared
/// [`Table`] shape keeps merge semantics identical to [`crate::CaseTable`].
pub type HandlerTable<Cx, R, O, T> = Table<ArcHandler<Cx, R, O, T>>;

/// A handler table used for before-response hooks.
///
/// Hook return values are discarded, so the output type is fixed to `()`.
pub type BeforeTable<Cx, R, O> = HandlerTable<Cx, R, O, ()>;

impl<Cx: 'static, R: 'static, O: 'static, T: 'static> HandlerTable<Cx, R, O, T> {
    /// Start building a handler table.
    pub fn builder() -> HandlerTableBuilder<Cx, R, O, T> {
        HandlerTableBuilder::new()
    }
}

/// Builder producing an immutable [`HandlerTable`] snapshot.
///
/// # Example
///
/// ```rust,ignore
/// let handlers = HandlerTable::builder()
///     .on("success", |_cx: &mut Ctx, result: &mut Res, _opts: &Opts| {
///         format!("OK:{}", result.value)
///     })
///     .build();
/// ```
pub struct HandlerTableBuilder<Cx: 'static, R: 'static, O: 'static, T: 'static> {
    table: HandlerTable<Cx, R, O, T>,
}

impl<Cx: 'static, R: 'static, O: 'static, T: 'static> HandlerTableBuilder<Cx, R, O, T> {
    /// Create a new empty handler table builder.
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }

    /// Register a handler. Last write wins; a rewritten name keeps its slot.
    pub fn on<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut Cx, &mut R, &O) -> T + Send + Sync + 'static,
    {
        self.table
            .insert(name, Arc::new(handler) as ArcHandler<Cx, R, O, T>);
        self
    }

    /// Register a handler backed by a manual [`Handler`] implementation.
    pub fn on_handler(
        mut self,
        name: impl Into<String>,
        handler: impl Handler<Cx, R, O, Output = T>,
    ) -> Self {
        self.table
            .insert(name, Arc::new(handler) as ArcHandler<Cx, R, O, T>);
        self
    }

    /// Build the immutable table snapshot.
    pub fn build(self) -> HandlerTable<Cx, R, O, T> {
        self.table
    }
}

impl<Cx: 'static, R: 'static, O: 'static, T: 'static> Default for HandlerTableBuilder<Cx, R, O, T> {
    fn default() -> Self {
        Self::new()
    }
}
