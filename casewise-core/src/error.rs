//! Error types for Casewise.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CasewiseError`] - Top-level error type for all Casewise operations
//! - [`DispatchError`] - Matching and handler-resolution failures
//! - [`ConfigError`] - Missing default tables, raised eagerly at build time

use thiserror::Error;

/// Guidance attached to [`ConfigError::MissingCases`].
pub const CASES_GUIDANCE: &str = "\
define a case table before building, for example:

    Defaults::builder()
        .cases(
            CaseTable::builder()
                .on(\"success\", |_cx: &MyCtx, result: &MyResult| result.ok)
                .build(),
        )
        ...
";

/// Guidance attached to [`ConfigError::MissingHandlers`].
pub const HANDLERS_GUIDANCE: &str = "\
define a handler table before building, for example:

    Defaults::builder()
        .handlers(
            HandlerTable::builder()
                .on(\"success\", |_cx: &mut MyCtx, result: &mut MyResult, _opts: &MyOpts| {
                    /* build the response */
                })
                .build(),
        )
        ...
";

/// Top-level error type for all Casewise operations.
#[derive(Error, Debug)]
pub enum CasewiseError {
    /// An error occurred while matching or resolving a case.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// The defaults configuration was incomplete.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur during a dispatch.
///
/// Dispatch never retries; both variants are fatal and propagate to the
/// caller unchanged.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No predicate in the case table matched the result.
    ///
    /// The message is deliberately fixed and non-parameterized so callers
    /// can handle it uniformly.
    #[error("operation result is not matched by any registered case")]
    NoMatchingCase,

    /// A case matched but the handler table has no entry for it.
    #[error("no handler registered for case `{case}`; handler table contains [{}]", .registered.join(", "))]
    UnhandledCase {
        /// The case name selected by matching.
        case: String,
        /// Names registered in the handler table that was searched.
        registered: Vec<String>,
    },
}

/// Errors raised eagerly when building a defaults configuration.
///
/// These fire before any dispatch can happen: a defaults layer without a
/// case table or a handler table is unusable.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No default case table was supplied.
    #[error("no default case table was defined; {}", CASES_GUIDANCE)]
    MissingCases,

    /// No default handler table was supplied.
    #[error("no default handler table was defined; {}", HANDLERS_GUIDANCE)]
    MissingHandlers,
}
