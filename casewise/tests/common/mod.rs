//! Shared fixtures for the integration tests.

use casewise::{CaseTable, Defaults, HandlerTable};
use std::collections::HashMap;

/// The invoking context: carries whatever state predicates and handlers
/// need beyond the result itself.
#[derive(Default)]
pub struct TestContext {
    /// Written by handlers to prove they ran with context access.
    pub instance_context: Option<String>,
    /// Written by before-response hooks.
    pub before_context: Option<String>,
}

/// The opaque operation result the engine matches against.
#[derive(Debug, Clone)]
pub struct OpResult {
    pub ok: bool,
    pub alt: bool,
    pub flag: bool,
    pub value: String,
}

impl OpResult {
    pub fn ok(value: &str) -> Self {
        Self {
            ok: true,
            alt: false,
            flag: false,
            value: value.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            ok: false,
            alt: false,
            flag: false,
            value: String::new(),
        }
    }
}

/// Opaque options bag.
pub type Opts = HashMap<String, String>;

/// A defaults configuration with `success` and `invalid` wired the way a
/// typical controller would: the handler renders `"OK:<value>"` or
/// `"ERR"` and stages its activity on the context.
pub fn controller_defaults() -> Defaults<TestContext, OpResult, Opts, String> {
    Defaults::builder()
        .cases(
            CaseTable::builder()
                .on("success", |_cx: &TestContext, r: &OpResult| r.ok)
                .on("invalid", |_cx: &TestContext, r: &OpResult| !r.ok)
                .build(),
        )
        .handlers(
            HandlerTable::builder()
                .on(
                    "success",
                    |cx: &mut TestContext, r: &mut OpResult, _opts: &Opts| {
                        cx.instance_context = Some("handled success".to_string());
                        format!("OK:{}", r.value)
                    },
                )
                .on(
                    "invalid",
                    |cx: &mut TestContext, _r: &mut OpResult, _opts: &Opts| {
                        cx.instance_context = Some("handled invalid".to_string());
                        "ERR".to_string()
                    },
                )
                .build(),
        )
        .build()
        .expect("fixture defaults must build")
}
