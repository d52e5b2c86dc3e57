//! Endpoint-level tests: operation producer, volatile and per-call layers.

use casewise::{CasewiseError, Endpoint, Overrides, cases, handlers};

mod common;
use common::{OpResult, Opts, TestContext, controller_defaults};

#[test]
fn test_invoke_runs_operation_then_dispatches() {
    let mut endpoint = Endpoint::new(controller_defaults());
    let mut cx = TestContext::default();

    let outcome = endpoint
        .invoke(&mut cx, |_cx, _opts| OpResult::ok("x"), &Opts::new())
        .unwrap();

    assert_eq!(outcome, "OK:x");
    assert_eq!(cx.instance_context.as_deref(), Some("handled success"));
}

#[test]
fn test_operation_receives_context_and_options() {
    let mut endpoint = Endpoint::new(controller_defaults());
    let mut cx = TestContext::default();
    cx.instance_context = Some("param".to_string());

    let mut opts = Opts::new();
    opts.insert("suffix".to_string(), "!".to_string());

    let outcome = endpoint
        .invoke(
            &mut cx,
            |cx: &mut TestContext, opts: &Opts| {
                let value = format!(
                    "{}{}",
                    cx.instance_context.as_deref().unwrap_or(""),
                    opts["suffix"]
                );
                OpResult::ok(&value)
            },
            &opts,
        )
        .unwrap();

    assert_eq!(outcome, "OK:param!");
}

#[test]
fn test_handle_dispatches_preproduced_result() {
    let mut endpoint = Endpoint::new(controller_defaults());
    let mut cx = TestContext::default();
    let mut result = OpResult::failed();

    let outcome = endpoint.handle(&mut cx, &mut result, &Opts::new()).unwrap();

    assert_eq!(outcome, "ERR");
    assert_eq!(cx.instance_context.as_deref(), Some("handled invalid"));
}

#[test]
fn test_no_match_propagates_as_dispatch_error() {
    let mut endpoint = Endpoint::new(controller_defaults());
    endpoint.set_cases(cases! {
        success => |_cx: &TestContext, _r: &OpResult| false,
        invalid => |_cx: &TestContext, _r: &OpResult| false,
    });

    let mut cx = TestContext::default();
    let mut result = OpResult::ok("x");
    let err = endpoint
        .handle(&mut cx, &mut result, &Opts::new())
        .unwrap_err();

    assert!(matches!(err, CasewiseError::Dispatch(_)));
}

#[test]
fn test_volatile_override_applies_to_one_dispatch_only() {
    let mut endpoint = Endpoint::new(controller_defaults());
    endpoint.set_handlers(handlers! {
        success => |_cx: &mut TestContext, _r: &mut OpResult, _opts: &Opts| {
            "VOLATILE".to_string()
        },
    });

    let mut cx = TestContext::default();
    let mut first = OpResult::ok("x");
    let outcome = endpoint.handle(&mut cx, &mut first, &Opts::new()).unwrap();
    assert_eq!(outcome, "VOLATILE");

    // The staged override was consumed; defaults are back.
    let mut second = OpResult::ok("x");
    let outcome = endpoint.handle(&mut cx, &mut second, &Opts::new()).unwrap();
    assert_eq!(outcome, "OK:x");
}

#[test]
fn test_volatile_before_hook_stages_state() {
    let mut endpoint = Endpoint::new(controller_defaults());
    endpoint.set_before(handlers! {
        success => |cx: &mut TestContext, r: &mut OpResult, _opts: &Opts| {
            cx.before_context = Some("staged".to_string());
            r.value = "modified".to_string();
        },
    });

    let mut cx = TestContext::default();
    let mut result = OpResult::ok("x");
    let outcome = endpoint.handle(&mut cx, &mut result, &Opts::new()).unwrap();

    assert_eq!(outcome, "OK:modified", "handler saw the hook's write");
    assert_eq!(cx.before_context.as_deref(), Some("staged"));
}

#[test]
fn test_per_call_override_wins_over_volatile() {
    let mut endpoint = Endpoint::new(controller_defaults());
    endpoint.set_handlers(handlers! {
        success => |_cx: &mut TestContext, _r: &mut OpResult, _opts: &Opts| {
            "VOLATILE".to_string()
        },
    });

    let per_call = Overrides::new().handlers(handlers! {
        success => |_cx: &mut TestContext, _r: &mut OpResult, _opts: &Opts| {
            "PER_CALL".to_string()
        },
    });

    let mut cx = TestContext::default();
    let mut result = OpResult::ok("x");
    let outcome = endpoint
        .handle_with(&mut cx, &mut result, &Opts::new(), per_call)
        .unwrap();

    assert_eq!(outcome, "PER_CALL");
}

#[test]
fn test_per_call_case_override_merges_over_defaults() {
    let mut endpoint = Endpoint::new(controller_defaults());

    // Rewrites how `success` matches; its handler is untouched.
    let per_call = Overrides::new().cases(cases! {
        success => |_cx: &TestContext, r: &OpResult| r.alt,
    });

    let mut cx = TestContext::default();
    let result = OpResult {
        ok: false,
        alt: true,
        flag: false,
        value: "y".to_string(),
    };
    let outcome = endpoint
        .invoke_with(&mut cx, move |_cx, _opts| result.clone(), &Opts::new(), per_call)
        .unwrap();

    assert_eq!(outcome, "OK:y");
}

#[test]
fn test_derived_defaults_dispatch_new_case() {
    let derived = controller_defaults()
        .extend()
        .cases(cases! {
            created => |_cx: &TestContext, r: &OpResult| r.flag,
        })
        .handlers(handlers! {
            created => |_cx: &mut TestContext, _r: &mut OpResult, _opts: &Opts| {
                "CREATED".to_string()
            },
        })
        .build()
        .unwrap();

    let mut endpoint = Endpoint::new(derived);
    let mut cx = TestContext::default();

    // `flag` is only reachable through the derived case; `ok` still wins
    // first because the parent's cases come earlier in the table.
    let mut result = OpResult {
        ok: false,
        alt: false,
        flag: true,
        value: String::new(),
    };
    // `invalid` matches !ok before `created` is reached.
    let outcome = endpoint.handle(&mut cx, &mut result, &Opts::new()).unwrap();
    assert_eq!(outcome, "ERR");

    // Narrow the inherited `invalid` case so the appended one can match.
    let per_call = Overrides::new().cases(cases! {
        invalid => |_cx: &TestContext, r: &OpResult| !r.ok && !r.flag,
    });
    let mut result = OpResult {
        ok: false,
        alt: false,
        flag: true,
        value: String::new(),
    };
    let outcome = endpoint
        .handle_with(&mut cx, &mut result, &Opts::new(), per_call)
        .unwrap();
    assert_eq!(outcome, "CREATED");
}
