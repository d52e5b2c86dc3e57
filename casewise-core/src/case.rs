//! Case predicates and the ordered case table.
//!
//! A case is a named question asked of the operation result: "did this
//! happen?". Cases are tested strictly in table order and the first truthy
//! predicate wins, so broader cases must be ordered after the specific
//! cases they would otherwise shadow.
//!
//! Predicates receive the invoking context explicitly. Whatever state a
//! predicate needs beyond the result itself lives on the context value and
//! is passed in at dispatch time, not captured implicitly.

use crate::table::Table;
use std::sync::Arc;

/// A named condition tested against an operation result.
///
/// Implemented for free by any `Fn(&Cx, &R) -> bool` closure or function;
/// implement it manually when the predicate is a configured struct rather
/// than a closure.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot test results of type `{R}`",
    label = "missing `Predicate` implementation",
    note = "Predicates are `Fn(&{Cx}, &{R}) -> bool` or manual `Predicate` implementations."
)]
pub trait Predicate<Cx, R>: Send + Sync + 'static {
    /// Whether this case matches the result.
    ///
    /// Must be side-effect free from the engine's point of view: matching
    /// may test any prefix of the table before this entry.
    fn test(&self, cx: &Cx, result: &R) -> bool;
}

// Blanket implementation for closures and functions.
impl<Cx, R, F> Predicate<Cx, R> for F
where
    F: Fn(&Cx, &R) -> bool + Send + Sync + 'static,
{
    fn test(&self, cx: &Cx, result: &R) -> bool {
        self(cx, result)
    }
}

/// A shared, type-erased predicate as stored in a [`CaseTable`].
pub type ArcPredicate<Cx, R> = Arc<dyn Predicate<Cx, R>>;

/// An ordered, name-unique table of cases.
///
/// Evaluation order is insertion order; see [`crate::match_case`].
pub type CaseTable<Cx, R> = Table<ArcPredicate<Cx, R>>;

impl<Cx: 'static, R: 'static> CaseTable<Cx, R> {
    /// Start building a case table.
    pub fn builder() -> CaseTableBuilder<Cx, R> {
        CaseTableBuilder::new()
    }
}

/// Builder producing an immutable [`CaseTable`] snapshot.
///
/// # Example
///
/// ```rust,ignore
/// let cases = CaseTable::builder()
///     .on("success", |_cx: &Ctx, result: &Res| result.ok)
///     .on("failure", |_cx: &Ctx, _result: &Res| true)
///     .build();
/// ```
pub struct CaseTableBuilder<Cx: 'static, R: 'static> {
    table: CaseTable<Cx, R>,
}

impl<Cx: 'static, R: 'static> CaseTableBuilder<Cx, R> {
    /// Create a new empty case table builder.
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }

    /// Register a case. Last write wins; a rewritten name keeps its slot.
    pub fn on<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Cx, &R) -> bool + Send + Sync + 'static,
    {
        self.table.insert(name, Arc::new(predicate) as ArcPredicate<Cx, R>);
        self
    }

    /// Register a case backed by a manual [`Predicate`] implementation.
    pub fn on_predicate(mut self, name: impl Into<String>, predicate: impl Predicate<Cx, R>) -> Self {
        self.table.insert(name, Arc::new(predicate) as ArcPredicate<Cx, R>);
        self
    }

    /// Build the immutable table snapshot.
    pub fn build(self) -> CaseTable<Cx, R> {
        self.table
    }
}

impl<Cx: 'static, R: 'static> Default for CaseTableBuilder<Cx, R> {
    fn default() -> Self {
        Self::new()
    }
}
