use std::{borrow::Cow, io, num::NonZeroUsize, panic::RefUnwindSafe};

use crate::{
    TestHarness,
    filter::DefaultFilter,
    formatter::pretty::PrettyFormatter,
    panic::DefaultPanicHandler,
    plugin::NoPlugin,
    runner::DefaultRunner,
    test::{Test, TestFn, TestFnHandle, TestGroup, TestMeta},
};

pub struct BuildTest<Extra> {
    pub func: TestFnHandle,
    pub name: Cow<'static, str>,
    pub original_name: OptionalText,
    pub docs: OptionalText,
    pub groups: Groups,
    pub ignore: bool,
    pub should_panic: bool,
    pub extra: Extra,
}

#[derive(Default)]
pub struct OptionalText(Option<Cow<'static, str>>);

impl From<&'static str> for OptionalText {
    fn from(value: &'static str) -> Self {
        Self(Some(value.into()))
    }
}

impl From<String> for OptionalText {
    fn from(value: String) -> Self {
        Self(Some(value.into()))
    }
}

#[derive(Default)]
pub struct Groups(Vec<TestGroup>);

impl<const N: usize> From<[&'static str; N]> for Groups {
    fn from(value: [&'static str; N]) -> Self {
        Self(value.into_iter().map(TestGroup::new).collect())
    }
}

impl From<Vec<TestGroup>> for Groups {
    fn from(value: Vec<TestGroup>) -> Self {
        Self(value)
    }
}

impl Default for BuildTest<()> {
    fn default() -> Self {
        Self {
            func: TestFnHandle::Static(&|| ()),
            name: Default::default(),
            original_name: Default::default(),
            docs: Default::default(),
            groups: Default::default(),
            ignore: Default::default(),
            should_panic: Default::default(),
            extra: Default::default(),
        }
    }
}

impl<Extra> From<BuildTest<Extra>> for Test<Extra> {
    fn from(value: BuildTest<Extra>) -> Self {
        Test::new(
            value.func,
            TestMeta {
                name: value.name,
                original_name: value.original_name.0,
                docs: value.docs.0,
                groups: Cow::Owned(value.groups.0),
                ignore: value.ignore,
                should_panic: value.should_panic,
                extra: value.extra,
            },
        )
    }
}

impl<F> From<F> for TestFnHandle
where
    F: TestFn + Send + Sync + RefUnwindSafe + 'static,
{
    fn from(value: F) -> Self {
        TestFnHandle::Owned(Box::new(value))
    }
}

macro_rules! test {
    {$($field:ident: $value:expr),* $(,)?} => {
        $crate::test::Test::from($crate::test_support::BuildTest {
            $($field: From::from($value),)*
            ..($crate::test_support::BuildTest {
                name: concat!(module_path!(), "::", file!(), ":", line!(), ":", column!()).into(),
                ..Default::default()
            })
        })
    };
}

pub(crate) use test;

/// A quiet harness running one test at a time, in order.
pub fn harness<'t>(
    tests: &'t [Test],
) -> TestHarness<
    't,
    (),
    DefaultFilter,
    DefaultPanicHandler,
    DefaultRunner,
    PrettyFormatter<io::Sink>,
    NoPlugin,
> {
    TestHarness {
        tests,
        filter: DefaultFilter::new(),
        panic_handler: DefaultPanicHandler,
        runner: DefaultRunner::new().with_thread_count(NonZeroUsize::MIN),
        formatter: PrettyFormatter::default().with_target(io::sink()),
        plugin: NoPlugin,
    }
}
