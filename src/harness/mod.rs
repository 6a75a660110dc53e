use std::io;

pub use test::TestHarness;

use crate::{
    args::HarnessArgs,
    filter::DefaultFilter,
    formatter::pretty::PrettyFormatter,
    panic::DefaultPanicHandler,
    plugin::NoPlugin,
    runner::DefaultRunner,
    spec::SpecPlugin,
    test::Test,
};

/// A harness running `tests` like the built in one would.
pub fn harness<'t, Extra>(
    tests: &'t [Test<Extra>],
) -> TestHarness<
    't,
    Extra,
    DefaultFilter,
    DefaultPanicHandler,
    DefaultRunner,
    PrettyFormatter<io::Stdout>,
    NoPlugin,
> {
    TestHarness {
        tests,
        filter: DefaultFilter::default(),
        panic_handler: DefaultPanicHandler,
        runner: DefaultRunner::default(),
        formatter: PrettyFormatter::default(),
        plugin: NoPlugin,
    }
}

/// A harness configured from command line arguments.
///
/// With `--spec <path>` the tests are written down as a spec document
/// instead of being run.
pub fn harness_from_args<'t, Extra>(
    tests: &'t [Test<Extra>],
    args: &HarnessArgs,
) -> TestHarness<
    't,
    Extra,
    DefaultFilter,
    DefaultPanicHandler,
    DefaultRunner,
    PrettyFormatter<io::Stdout>,
    Option<SpecPlugin<'static>>,
> {
    TestHarness {
        tests,
        filter: DefaultFilter::from(args),
        panic_handler: DefaultPanicHandler,
        runner: DefaultRunner::from(args),
        formatter: PrettyFormatter::default().with_color_setting(args.color),
        plugin: SpecPlugin::from_args(args),
    }
}
