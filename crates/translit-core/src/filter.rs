//! Output filters: post-processing steps applied to captured text.
//!
//! A host pipeline captures some output, runs it through a [`FilterChain`],
//! and emits the result. [`Transliterator`] is one such filter.

use tracing::debug_span;

use crate::engine::Transliterator;

/// A step that rewrites captured output.
pub trait OutputFilter {
    fn process_output(&self, output: &str) -> String;
}

impl OutputFilter for Transliterator<'_> {
    fn process_output(&self, output: &str) -> String {
        self.transliterate(output)
    }
}

impl<F> OutputFilter for F
where
    F: Fn(&str) -> String,
{
    fn process_output(&self, output: &str) -> String {
        self(output)
    }
}

/// Ordered list of filters; each sees the previous filter's output.
#[derive(Default)]
pub struct FilterChain<'a> {
    filters: Vec<Box<dyn OutputFilter + Send + Sync + 'a>>,
}

impl<'a> FilterChain<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: impl OutputFilter + Send + Sync + 'a) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl OutputFilter for FilterChain<'_> {
    fn process_output(&self, output: &str) -> String {
        let _span = debug_span!("filter_chain", filters = self.filters.len()).entered();
        let mut text = output.to_string();
        for filter in &self.filters {
            text = filter.process_output(&text);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard::{Registry, GOST_779A};

    #[test]
    fn empty_chain_is_identity() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.process_output("Москва"), "Москва");
    }

    #[test]
    fn transliterator_as_filter() {
        let t = Transliterator::new(Registry::global()).unwrap();
        assert_eq!(t.process_output("<p>Ёлка</p>"), "<p>Yolka</p>");
    }

    #[test]
    fn chain_runs_filters_in_order() {
        let t = Transliterator::with_standard(Registry::global(), GOST_779A).unwrap();
        let mut chain = FilterChain::new();
        chain
            .push(|s: &str| s.trim().to_string())
            .push(t)
            .push(|s: &str| s.to_uppercase());
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.process_output("  щи  "), "ŜI");
    }
}
