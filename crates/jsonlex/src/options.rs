//! Caller-selected handling of illegal tokens.

/// What to do when the scanner produces an `Illegal` token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IllegalPolicy {
    /// Keep scanning and report every error at the end.
    #[default]
    Collect,
    /// Stop at the first error and return it.
    FailFast,
}

/// Options for [`lex_with`](crate::lex_with).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LexOptions {
    pub policy: IllegalPolicy,
    /// Stop scanning once this many errors are collected.
    /// Only meaningful with [`IllegalPolicy::Collect`].
    pub max_errors: Option<usize>,
}

impl LexOptions {
    /// Collect every error, no limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop at the first error.
    pub fn fail_fast() -> Self {
        Self::new().with_policy(IllegalPolicy::FailFast)
    }

    #[must_use]
    pub fn with_policy(mut self, policy: IllegalPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = Some(max_errors);
        self
    }

    /// Returns `true` once `collected` errors exhaust the error budget.
    pub(crate) fn limit_reached(&self, collected: usize) -> bool {
        self.max_errors.is_some_and(|max| collected >= max)
    }
}
