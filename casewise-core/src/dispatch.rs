//! The dispatch algorithm: match, resolve, invoke.
//!
//! Dispatch is a pure decision-and-invoke step over caller-supplied data:
//! no suspension, no I/O, no retries. The only ordering guarantee it makes
//! is that a before-response hook for the matched case completes before the
//! main handler begins, on the same exclusive result reference.

use crate::case::CaseTable;
use crate::error::DispatchError;
use crate::handler::{BeforeTable, HandlerTable};

/// Select the matched case name for a result.
///
/// Predicates are evaluated synchronously, strictly in table order, and the
/// first one returning `true` wins. Ordering is the only tie-break: a later,
/// broader case never shadows an earlier one.
///
/// # Errors
///
/// [`DispatchError::NoMatchingCase`] when no predicate matches.
pub fn match_case<'t, Cx, R>(
    cases: &'t CaseTable<Cx, R>,
    cx: &Cx,
    result: &R,
) -> Result<&'t str, DispatchError>
where
    Cx: 'static,
    R: 'static,
{
    cases
        .iter()
        .find(|(_, predicate)| predicate.test(cx, result))
        .map(|(name, _)| name)
        .ok_or(DispatchError::NoMatchingCase)
}

/// Invoke the hook and handler registered for an already-matched case.
///
/// The before-response table is consulted first: a missing entry there is
/// silently skipped, a present one runs to completion with its return value
/// discarded. The main handler lookup is strict.
///
/// # Errors
///
/// [`DispatchError::UnhandledCase`] when the main handler table has no
/// entry for `case`; the error names the case and the handlers that were
/// searched.
pub fn invoke_matched<Cx, R, O, T>(
    case: &str,
    cx: &mut Cx,
    result: &mut R,
    handlers: &HandlerTable<Cx, R, O, T>,
    before: Option<&BeforeTable<Cx, R, O>>,
    options: &O,
) -> Result<T, DispatchError>
where
    Cx: 'static,
    R: 'static,
    O: 'static,
    T: 'static,
{
    if let Some(before) = before {
        if let Some(hook) = before.get(case) {
            hook.call(cx, result, options);
        }
    }

    let handler = handlers
        .get(case)
        .ok_or_else(|| DispatchError::UnhandledCase {
            case: case.to_owned(),
            registered: handlers.names().map(str::to_owned).collect(),
        })?;
    Ok(handler.call(cx, result, options))
}

/// Match a result against a case table and invoke the registered handlers.
///
/// The whole algorithm:
///
/// 1. [`match_case`] selects the first case whose predicate matches;
/// 2. if `before` holds an entry for that case, it runs for side effects;
/// 3. the main handler is resolved strictly and its return value becomes
///    the dispatch outcome.
///
/// Everything else in the engine exists to assemble the inputs to this
/// function.
///
/// # Errors
///
/// [`DispatchError::NoMatchingCase`] or [`DispatchError::UnhandledCase`].
pub fn dispatch<Cx, R, O, T>(
    cx: &mut Cx,
    result: &mut R,
    cases: &CaseTable<Cx, R>,
    handlers: &HandlerTable<Cx, R, O, T>,
    before: Option<&BeforeTable<Cx, R, O>>,
    options: &O,
) -> Result<T, DispatchError>
where
    Cx: 'static,
    R: 'static,
    O: 'static,
    T: 'static,
{
    let case = match_case(cases, cx, result)?;
    invoke_matched(case, cx, result, handlers, before, options)
}
