//! The defaults layer: per-configuration table storage and accumulation.
//!
//! A [`Defaults`] value is the explicit counterpart of "class-level default
//! tables": it is declared once, at configuration-definition time, and from
//! then on is an immutable snapshot. Derived configurations are built with
//! [`Defaults::extend`], which copies the parent tables and merges
//! additions on top — the parent is never mutated, and accumulation
//! happens once, never per dispatch.

use bitflags::bitflags;
use casewise_core::{BeforeTable, CaseTable, ConfigError, HandlerTable, Table};

bitflags! {
    /// Which parent tables a derived configuration inherits.
    ///
    /// Removing a flag declares that table from empty instead of
    /// accumulating on top of the parent's entries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Inherit: u8 {
        /// Inherit the parent's case table.
        const CASES = 1 << 0;
        /// Inherit the parent's handler table.
        const HANDLERS = 1 << 1;
        /// Inherit the parent's before-response table.
        const BEFORE = 1 << 2;
    }
}

/// Default tables for one endpoint configuration.
///
/// Built once via [`Defaults::builder`]; a configuration without a case
/// table or a handler table fails eagerly with [`ConfigError`], before any
/// dispatch can run against it. The before-response table is optional and
/// defaults to empty.
pub struct Defaults<Cx: 'static, R: 'static, O: 'static, T: 'static> {
    cases: CaseTable<Cx, R>,
    handlers: HandlerTable<Cx, R, O, T>,
    before: BeforeTable<Cx, R, O>,
}

impl<Cx, R, O, T> Defaults<Cx, R, O, T> {
    /// Start building a defaults configuration.
    pub fn builder() -> DefaultsBuilder<Cx, R, O, T> {
        DefaultsBuilder::new()
    }

    /// The default case table.
    pub fn cases(&self) -> &CaseTable<Cx, R> {
        &self.cases
    }

    /// The default handler table.
    pub fn handlers(&self) -> &HandlerTable<Cx, R, O, T> {
        &self.handlers
    }

    /// The default before-response table (possibly empty).
    pub fn before(&self) -> &BeforeTable<Cx, R, O> {
        &self.before
    }

    /// Derive a new configuration from this one.
    ///
    /// The returned builder starts from copies of all parent tables
    /// ([`Inherit::all`]); additions merge on top with stable positional
    /// semantics. Use [`ExtendBuilder::without`] to declare a table from
    /// empty instead.
    pub fn extend(&self) -> ExtendBuilder<Cx, R, O, T> {
        ExtendBuilder {
            parent: self.clone(),
            inherit: Inherit::all(),
            cases: None,
            handlers: None,
            before: None,
        }
    }
}

// Tables clone by sharing their Arc'd entries; Cx/R/O/T need no bounds.
impl<Cx, R, O, T> Clone for Defaults<Cx, R, O, T> {
    fn clone(&self) -> Self {
        Self {
            cases: self.cases.clone(),
            handlers: self.handlers.clone(),
            before: self.before.clone(),
        }
    }
}

/// Builder for a root [`Defaults`] configuration.
pub struct DefaultsBuilder<Cx: 'static, R: 'static, O: 'static, T: 'static> {
    cases: Option<CaseTable<Cx, R>>,
    handlers: Option<HandlerTable<Cx, R, O, T>>,
    before: Option<BeforeTable<Cx, R, O>>,
}

impl<Cx, R, O, T> DefaultsBuilder<Cx, R, O, T> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            cases: None,
            handlers: None,
            before: None,
        }
    }

    /// Set the default case table. Required.
    pub fn cases(mut self, table: CaseTable<Cx, R>) -> Self {
        self.cases = Some(table);
        self
    }

    /// Set the default handler table. Required.
    pub fn handlers(mut self, table: HandlerTable<Cx, R, O, T>) -> Self {
        self.handlers = Some(table);
        self
    }

    /// Set the default before-response table. Optional.
    pub fn before(mut self, table: BeforeTable<Cx, R, O>) -> Self {
        self.before = Some(table);
        self
    }

    /// Build the immutable configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingCases`] or [`ConfigError::MissingHandlers`]
    /// when a required table was never supplied.
    pub fn build(self) -> Result<Defaults<Cx, R, O, T>, ConfigError> {
        let cases = self.cases.ok_or(ConfigError::MissingCases)?;
        let handlers = self.handlers.ok_or(ConfigError::MissingHandlers)?;
        Ok(Defaults {
            cases,
            handlers,
            before: self.before.unwrap_or_default(),
        })
    }
}

impl<Cx, R, O, T> Default for DefaultsBuilder<Cx, R, O, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a configuration derived from a parent [`Defaults`].
pub struct ExtendBuilder<Cx: 'static, R: 'static, O: 'static, T: 'static> {
    parent: Defaults<Cx, R, O, T>,
    inherit: Inherit,
    cases: Option<CaseTable<Cx, R>>,
    handlers: Option<HandlerTable<Cx, R, O, T>>,
    before: Option<BeforeTable<Cx, R, O>>,
}

impl<Cx, R, O, T> ExtendBuilder<Cx, R, O, T> {
    /// Replace the inherited-table set wholesale.
    pub fn inherit(mut self, flags: Inherit) -> Self {
        self.inherit = flags;
        self
    }

    /// Opt out of inheriting the given tables, declaring them from empty.
    pub fn without(mut self, flags: Inherit) -> Self {
        self.inherit.remove(flags);
        self
    }

    /// Additional cases, merged on top of the inherited case table.
    pub fn cases(mut self, additions: CaseTable<Cx, R>) -> Self {
        self.cases = Some(additions);
        self
    }

    /// Additional handlers, merged on top of the inherited handler table.
    pub fn handlers(mut self, additions: HandlerTable<Cx, R, O, T>) -> Self {
        self.handlers = Some(additions);
        self
    }

    /// Additional before-response hooks, merged on top of the inherited table.
    pub fn before(mut self, additions: BeforeTable<Cx, R, O>) -> Self {
        self.before = Some(additions);
        self
    }

    /// Build the derived configuration. The parent is left untouched.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingCases`] / [`ConfigError::MissingHandlers`]
    /// when inheritance for a required table was switched off and no
    /// replacement was declared.
    pub fn build(self) -> Result<Defaults<Cx, R, O, T>, ConfigError> {
        let cases = accumulate(
            &self.parent.cases,
            self.inherit.contains(Inherit::CASES),
            self.cases,
        )
        .ok_or(ConfigError::MissingCases)?;
        let handlers = accumulate(
            &self.parent.handlers,
            self.inherit.contains(Inherit::HANDLERS),
            self.handlers,
        )
        .ok_or(ConfigError::MissingHandlers)?;
        // A missing before table is never an error.
        let before = accumulate(
            &self.parent.before,
            self.inherit.contains(Inherit::BEFORE),
            self.before,
        )
        .unwrap_or_default();

        Ok(Defaults {
            cases,
            handlers,
            before,
        })
    }
}

/// Copy-and-merge one table layer. `None` means the table was neither
/// inherited nor declared.
fn accumulate<V: Clone>(
    parent: &Table<V>,
    inherit: bool,
    additions: Option<Table<V>>,
) -> Option<Table<V>> {
    match (inherit, additions) {
        (true, Some(additions)) => Some(parent.merge(&additions)),
        (true, None) => Some(parent.clone()),
        (false, Some(additions)) => Some(additions),
        (false, None) => None,
    }
}
