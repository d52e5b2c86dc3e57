//! # casewise-core
//!
//! Core types for the Casewise result-dispatch engine.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that only needs the dispatch kernel, without the defaults layer
//! and endpoint conveniences of the full `casewise` crate.
//!
//! # Three-Layer Architecture
//!
//! Casewise separates "what happened" from "what to do about it" in three
//! small layers:
//!
//! ## Layer 1: Tables ([`Table`])
//!
//! An ordered, name-unique entry sequence. The same shape backs both case
//! tables (named predicates) and handler tables (named response functions).
//!
//! - **Ordered**: iteration order is insertion order
//! - **Name-unique**: rewriting a name replaces its value in place
//! - **Mergeable**: [`Table::merge`] layers an override table on top of a
//!   base with stable positional replacement
//!
//! ## Layer 2: Matching ([`Predicate`], [`match_case`])
//!
//! Predicates are tested against the operation result strictly in table
//! order; the first truthy predicate names the matched case. No predicate
//! is ever re-ordered or skipped.
//!
//! ## Layer 3: Dispatch ([`Handler`], [`dispatch`])
//!
//! The matched name resolves a handler by strict lookup. An optional
//! before-response hook for the same name runs first, for side effects
//! only; the main handler's return value is the dispatch outcome.
//!
//! # Error Types
//!
//! - [`CasewiseError`] - Top-level error type
//! - [`DispatchError`] - Matching and resolution failures
//! - [`ConfigError`] - Missing default tables, raised eagerly at build time

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod case;
mod dispatch;
mod error;
mod handler;
mod table;

// Re-exports
pub use case::{ArcPredicate, CaseTable, CaseTableBuilder, Predicate};
pub use dispatch::{dispatch, invoke_matched, match_case};
pub use error::{CASES_GUIDANCE, CasewiseError, ConfigError, DispatchError, HANDLERS_GUIDANCE};
pub use handler::{ArcHandler, BeforeTable, Handler, HandlerTable, HandlerTableBuilder};
pub use table::Table;
