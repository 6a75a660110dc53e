use std::{fs, num::NonZeroUsize, process::ExitCode};

use kispec::{
    args::HarnessArgs,
    formatter::common::separator,
    plugin::PluginError,
    runner::DefaultRunner,
    spec::{OutlineBlock, SpecError, SpecPlugin},
};
use pretty_assertions::assert_eq;

mod lib;
use lib::*;

#[test]
fn writes_the_suite_instead_of_running_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.txt");
    let tests = suite(must_not_run);

    let output = Buffer::default();
    let report = kispec::harness(&tests)
        .with_formatter(output.formatter())
        .with_runner(DefaultRunner::new().with_thread_count(NonZeroUsize::MIN))
        .with_plugin(SpecPlugin::new(&path))
        .run();

    assert!(report.outcomes.is_empty());
    assert!(report.plugin_errors.is_empty());
    assert_eq!(report.exit_code(), ExitCode::SUCCESS);
    assert_eq!(fs::read_to_string(&path).unwrap(), SUITE_SPEC);

    let summary = format!("generated test spec file: {}", path.display());
    assert_eq!(report.summary, [summary.clone()]);
    assert_eq!(
        output.try_to_string().unwrap(),
        format!(
            "\n3 tests collected, none executed; 0 filtered out\n{}\n",
            separator(&summary)
        )
    );
}

#[test]
fn writing_twice_gives_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.txt");
    let tests = suite(must_not_run);

    let mut contents = Vec::new();
    for _ in 0..2 {
        let report = kispec::harness(&tests)
            .with_formatter(Buffer::default().formatter())
            .with_plugin(SpecPlugin::new(&path))
            .run();
        assert!(report.plugin_errors.is_empty());
        contents.push(fs::read_to_string(&path).unwrap());
    }

    assert_eq!(contents[0], contents[1]);
}

#[test]
fn missing_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("nested").join("spec.txt");
    let tests = suite(must_not_run);

    let report = kispec::harness(&tests)
        .with_formatter(Buffer::default().formatter())
        .with_plugin(SpecPlugin::new(&path))
        .run();

    assert!(report.plugin_errors.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), SUITE_SPEC);
}

#[test]
fn unwritable_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let tests = suite(must_not_run);

    let report = kispec::harness(&tests)
        .with_formatter(Buffer::default().formatter())
        .with_plugin(SpecPlugin::new(blocker.join("spec.txt")))
        .run();

    assert!(report.outcomes.is_empty());
    assert_eq!(report.plugin_errors.len(), 1);
    let (hook, err) = &report.plugin_errors[0];
    assert_eq!(*hook, PluginError::CollectionFinish);
    assert!(matches!(err, SpecError::CreateDir { .. }), "{err:?}");
    assert_eq!(report.exit_code(), ExitCode::FAILURE);
    assert!(report.summary.is_empty());
}

#[test]
fn callbacks_shape_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.txt");
    let tests = suite(must_not_run);

    let plugin = SpecPlugin::new(&path)
        .with_header_line("Parser crate")
        .on_header(|header, items| {
            header.push(format!("{} tests", items.len()));
            Ok(())
        })
        .on_contents(|contents, _| {
            contents.push(OutlineBlock::new(0, "extras").with_docs("Added by a callback."));
            Ok(())
        })
        .on_footer(|footer, _| {
            footer.push("end of spec".to_string());
            Ok(())
        });

    let report = kispec::harness(&tests)
        .with_formatter(Buffer::default().formatter())
        .with_plugin(plugin)
        .run();
    assert!(report.plugin_errors.is_empty());

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("Parser crate\n3 tests\n\nparser\n"));
    assert!(written.ends_with("extras\n    Added by a callback.\n\nGenerated by kispec\nend of spec\n"));
}

#[test]
fn failing_callback_is_reported_and_nothing_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.txt");
    let tests = suite(must_not_run);

    let plugin = SpecPlugin::new(&path).on_contents(|_, _| Err("outline rejected".into()));
    let report = kispec::harness(&tests)
        .with_formatter(Buffer::default().formatter())
        .with_plugin(plugin)
        .run();

    assert!(!path.exists());
    assert!(report.summary.is_empty());
    let (hook, err) = &report.plugin_errors[0];
    assert_eq!(*hook, PluginError::CollectionFinish);
    match err {
        SpecError::Hook { hook, source } => {
            assert_eq!(*hook, "spec_contents");
            assert_eq!(source.to_string(), "outline rejected");
        }
        err => panic!("unexpected error {err:?}"),
    }
}

#[test]
fn spec_option_respects_filters() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.txt");
    let tests = suite(must_not_run);

    let path_arg = path.to_str().unwrap();
    let args = HarnessArgs::try_from_iter(["harness", "parser", "--spec", path_arg]).unwrap();
    let report = kispec::harness_from_args(&tests, &args)
        .with_formatter(Buffer::default().formatter())
        .run();

    assert!(report.plugin_errors.is_empty());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Test specification\n\nparser\n    Parsing of literals.\n    number\n        Parses numbers.\n        Integers and floats.\n    string\n\nGenerated by kispec\n"
    );
}

#[test]
fn workers_do_not_write_the_spec() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.txt");
    let tests = suite(passes);

    let path_arg = path.to_str().unwrap();
    let args =
        HarnessArgs::try_from_iter(["harness", "--spec", path_arg, "--worker-id", "gw1"]).unwrap();
    let report = kispec::harness_from_args(&tests, &args)
        .with_formatter(Buffer::default().formatter())
        .run();

    assert!(!path.exists());
    assert_eq!(report.outcomes.len(), 3);
    assert!(report.summary.is_empty());
}

#[test]
fn without_spec_option_tests_run() {
    let tests = suite(passes);
    let args = HarnessArgs::try_from_iter(["harness", "--test-threads", "1"]).unwrap();

    let output = Buffer::default();
    let report = kispec::harness_from_args(&tests, &args)
        .with_formatter(output.formatter())
        .run();

    assert_eq!(report.exit_code(), ExitCode::SUCCESS);
    assert_eq!(
        sanitize_duration(&output.try_to_string().unwrap()),
        "\nrunning 3 tests\n\
         test parser::number ... ok\n\
         test parser::string ... ok\n\
         test lexer::tokens ... ok\n\
         \ntest result: ok. 3 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out; finished in 0.00s\n\n"
    );
}
