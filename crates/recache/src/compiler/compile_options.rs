//! Compile Options
//!
//! Options for building a [`RegexCompiler`](super::RegexCompiler).

use regex_automata::meta;

/// Default nesting limit; matches the `regex` crate.
pub const DEFAULT_NEST_LIMIT: u32 = 250;

/// Default compiled program size limit; matches the `regex` crate.
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Default lazy DFA cache capacity, per [`Matcher`](crate::Matcher) handle.
pub const DEFAULT_DFA_SIZE_LIMIT: usize = 2 * (1 << 20);

/// Options for configuring a [`RegexCompiler`](super::RegexCompiler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// The maximum nesting depth of the parsed pattern.
    pub nest_limit: u32,

    /// The approximate size limit, in bytes, of the compiled program.
    ///
    /// `None` disables the limit.
    pub size_limit: Option<usize>,

    /// The approximate capacity, in bytes, of each handle's lazy DFA cache.
    pub dfa_size_limit: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            nest_limit: DEFAULT_NEST_LIMIT,
            size_limit: Some(DEFAULT_SIZE_LIMIT),
            dfa_size_limit: DEFAULT_DFA_SIZE_LIMIT,
        }
    }
}

impl CompileOptions {
    /// Get the nesting limit.
    pub fn nest_limit(&self) -> u32 {
        self.nest_limit
    }

    /// Set the nesting limit.
    pub fn set_nest_limit(
        &mut self,
        nest_limit: u32,
    ) {
        self.nest_limit = nest_limit;
    }

    /// Set the nesting limit and return the options.
    pub fn with_nest_limit(
        mut self,
        nest_limit: u32,
    ) -> Self {
        self.set_nest_limit(nest_limit);
        self
    }

    /// Get the compiled program size limit.
    pub fn size_limit(&self) -> Option<usize> {
        self.size_limit
    }

    /// Set the compiled program size limit.
    pub fn set_size_limit<L>(
        &mut self,
        size_limit: L,
    ) where
        L: Into<Option<usize>>,
    {
        self.size_limit = size_limit.into();
    }

    /// Set the compiled program size limit and return the options.
    pub fn with_size_limit<L>(
        mut self,
        size_limit: L,
    ) -> Self
    where
        L: Into<Option<usize>>,
    {
        self.set_size_limit(size_limit);
        self
    }

    /// Get the lazy DFA cache capacity.
    pub fn dfa_size_limit(&self) -> usize {
        self.dfa_size_limit
    }

    /// Set the lazy DFA cache capacity.
    pub fn set_dfa_size_limit(
        &mut self,
        dfa_size_limit: usize,
    ) {
        self.dfa_size_limit = dfa_size_limit;
    }

    /// Set the lazy DFA cache capacity and return the options.
    pub fn with_dfa_size_limit(
        mut self,
        dfa_size_limit: usize,
    ) -> Self {
        self.set_dfa_size_limit(dfa_size_limit);
        self
    }

    /// The engine configuration for these options.
    pub(crate) fn meta_config(&self) -> meta::Config {
        meta::Config::new()
            .nfa_size_limit(self.size_limit)
            .hybrid_cache_capacity(self.dfa_size_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CompileOptions::default();
        assert_eq!(options.nest_limit(), DEFAULT_NEST_LIMIT);
        assert_eq!(options.size_limit(), Some(DEFAULT_SIZE_LIMIT));
        assert_eq!(options.dfa_size_limit(), DEFAULT_DFA_SIZE_LIMIT);
    }

    #[test]
    fn test_builders() {
        let options = CompileOptions::default()
            .with_nest_limit(8)
            .with_size_limit(None)
            .with_dfa_size_limit(1 << 16);

        assert_eq!(options.nest_limit(), 8);
        assert_eq!(options.size_limit(), None);
        assert_eq!(options.dfa_size_limit(), 1 << 16);

        let mut options = options;
        options.set_size_limit(1024);
        assert_eq!(options.size_limit(), Some(1024));

        let config = options.meta_config();
        assert_eq!(config.get_nfa_size_limit(), Some(1024));
        assert_eq!(config.get_hybrid_cache_capacity(), 1 << 16);
    }
}
