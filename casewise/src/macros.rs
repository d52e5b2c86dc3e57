//! Declaration-site sugar over the table builders.

/// Construct a [`CaseTable`](crate::CaseTable) from named predicates.
///
/// Entries keep their written order; matching tests them first to last.
///
/// # Example
/// ```ignore
/// let table = cases! {
///     success => |_cx: &Ctx, r: &Res| r.ok,
///     failure => |_cx: &Ctx, _r: &Res| true,
/// };
/// ```
#[macro_export]
macro_rules! cases {
    ( $( $name:ident => $predicate:expr ),* $(,)? ) => {
        $crate::CaseTable::builder()
            $( .on(stringify!($name), $predicate) )*
            .build()
    };
}

/// Construct a [`HandlerTable`](crate::HandlerTable) from named handlers.
///
/// Also builds [`BeforeTable`](crate::BeforeTable)s — a before table is a
/// handler table whose entries return `()`.
///
/// # Example
/// ```ignore
/// let table = handlers! {
///     success => |_cx: &mut Ctx, r: &mut Res, _opts: &Opts| render(r),
/// };
/// ```
#[macro_export]
macro_rules! handlers {
    ( $( $name:ident => $handler:expr ),* $(,)? ) => {
        $crate::HandlerTable::builder()
            $( .on(stringify!($name), $handler) )*
            .build()
    };
}
