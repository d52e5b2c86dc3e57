//! # casewise - Result-Dispatch Engine
//!
//! `casewise` decouples "what happened" (an opaque operation result) from
//! "what to do about it" (the response a handler builds). An ordered table
//! of named predicates selects exactly one **case** for a result; the
//! handler registered under that name produces the outcome, optionally
//! preceded by a side-effect-only before-response hook.
//!
//! Tables layer: defaults declared once per configuration, accumulated
//! explicitly across derived configurations, overridden per instance for a
//! single dispatch, and overridden again per call — each layer merged with
//! stable positional semantics.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use casewise::{cases, handlers, Defaults, Endpoint};
//!
//! let defaults = Defaults::builder()
//!     .cases(cases! { success => |_cx: &Ctx, r: &Res| r.ok })
//!     .handlers(handlers! {
//!         success => |_cx: &mut Ctx, r: &mut Res, _opts: &Opts| render(r),
//!     })
//!     .build()?;
//!
//! let mut endpoint = Endpoint::new(defaults);
//! let outcome = endpoint.invoke(&mut ctx, |cx, opts| run_operation(cx, opts), &opts)?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use casewise_core::{
    // Handlers
    ArcHandler,
    // Cases
    ArcPredicate,
    BeforeTable,
    // Error types
    CASES_GUIDANCE,
    CaseTable,
    CaseTableBuilder,
    CasewiseError,
    ConfigError,
    DispatchError,
    HANDLERS_GUIDANCE,
    Handler,
    HandlerTable,
    HandlerTableBuilder,
    Predicate,
    // Tables
    Table,
    // Dispatch
    dispatch,
    invoke_matched,
    match_case,
};

mod defaults;
mod endpoint;
mod macros;
pub mod testing;

pub use defaults::{Defaults, DefaultsBuilder, ExtendBuilder, Inherit};
pub use endpoint::{Endpoint, Overrides};
