use crate::{
    args::HarnessArgs,
    filter::{FilteredTests, TestFilter},
    test::Test,
};

/// The libtest-like filter.
///
/// A test is collected when its name matches any of the filters (or there are
/// no filters) and matches none of the skips. Matching is by substring, or by
/// equality when `exact` is set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DefaultFilter {
    exact: bool,
    filter: Vec<String>,
    skip: Vec<String>,
}

impl DefaultFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exact(self, exact: bool) -> Self {
        Self { exact, ..self }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter.push(filter.into());
        self
    }

    pub fn with_skip(mut self, skip: impl Into<String>) -> Self {
        self.skip.push(skip.into());
        self
    }

    fn matches(&self, name: &str, pattern: &str) -> bool {
        match self.exact {
            true => name == pattern,
            false => name.contains(pattern),
        }
    }

    fn collects(&self, name: &str) -> bool {
        let in_filter = self.filter.is_empty()
            || self.filter.iter().any(|filter| self.matches(name, filter));
        in_filter && !self.skip.iter().any(|skip| self.matches(name, skip))
    }
}

impl From<&HarnessArgs> for DefaultFilter {
    fn from(args: &HarnessArgs) -> Self {
        Self {
            exact: args.exact,
            filter: args.filters.clone(),
            skip: args.skip.clone(),
        }
    }
}

impl<Extra> TestFilter<Extra> for DefaultFilter {
    fn filter<'t>(
        &self,
        tests: &'t [Test<Extra>],
    ) -> FilteredTests<'t, impl ExactSizeIterator<Item = &'t Test<Extra>>, Extra> {
        let remaining: Vec<_> = tests
            .iter()
            .filter(|test| self.collects(&test.name))
            .collect();

        FilteredTests {
            filtered_out: tests.len() - remaining.len(),
            tests: remaining.into_iter(),
        }
    }
}
