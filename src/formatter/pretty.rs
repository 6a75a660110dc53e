use std::io::{self, IsTerminal};

use crate::{
    formatter::{
        common::{
            color::{Color, ColorSetting},
            separator, tests_count,
        },
        *,
    },
    outcome::{TestOutcome, TestStatus},
    plugin::RunLoop,
};

/// Output in the style of the built in test harness.
#[derive(Debug)]
pub struct PrettyFormatter<W: io::Write> {
    target: W,
    color_setting: ColorSetting,
    terminal: bool,
}

impl Default for PrettyFormatter<io::Stdout> {
    fn default() -> Self {
        let target = io::stdout();
        Self {
            terminal: target.is_terminal(),
            target,
            color_setting: Default::default(),
        }
    }
}

impl<W: io::Write> PrettyFormatter<W> {
    /// Write to `with_target` instead.
    ///
    /// Targets set this way never count as a terminal, so
    /// [`ColorSetting::Automatic`] writes them without colors.
    pub fn with_target<WithTarget: io::Write>(
        self,
        with_target: WithTarget,
    ) -> PrettyFormatter<WithTarget> {
        PrettyFormatter {
            target: with_target,
            color_setting: self.color_setting,
            terminal: false,
        }
    }

    pub fn with_color_setting(self, color_setting: ColorSetting) -> Self {
        PrettyFormatter {
            color_setting,
            ..self
        }
    }

    pub fn use_color(&self) -> bool {
        self.color_setting.enabled(self.terminal)
    }

    fn write_colored(&mut self, color: Color, text: &str) -> io::Result<()> {
        match self.use_color() {
            true => write!(self.target, "{}", color.paint(text)),
            false => write!(self.target, "{text}"),
        }
    }

    fn write_status(&mut self, status: &TestStatus) -> io::Result<()> {
        let color = match status {
            TestStatus::Passed => Color::Green,
            TestStatus::Ignored => Color::Yellow,
            TestStatus::Failed(_) => Color::Red,
        };
        self.write_colored(color, status.label())
    }

    fn write_failures(&mut self, outcomes: &[(&str, TestOutcome)]) -> io::Result<()> {
        let failures: Vec<_> = outcomes
            .iter()
            .filter_map(|(name, outcome)| match &outcome.status {
                TestStatus::Failed(failure) => Some((*name, failure)),
                _ => None,
            })
            .collect();

        if failures.is_empty() {
            return Ok(());
        }

        writeln!(self.target, "\nfailures:\n")?;
        for (name, failure) in &failures {
            writeln!(self.target, "---- {name} stdout ----\n{failure}\n")?;
        }

        writeln!(self.target, "\nfailures:")?;
        for (name, _) in &failures {
            writeln!(self.target, "    {name}")?;
        }
        Ok(())
    }
}

impl<'t, Extra: 't, W: io::Write> TestFormatter<'t, Extra> for PrettyFormatter<W> {
    type Error = io::Error;

    fn fmt_run_start(&mut self, data: FmtRunStart) -> Result<(), Self::Error> {
        writeln!(self.target, "\nrunning {}", tests_count(data.active))
    }

    fn fmt_test_outcome(&mut self, data: FmtTestOutcome<'t, Extra>) -> Result<(), Self::Error> {
        write!(self.target, "test {} ... ", data.meta.name)?;
        self.write_status(&data.outcome.status)?;
        writeln!(self.target)
    }

    fn fmt_run_outcomes(&mut self, data: FmtRunOutcomes<'t, '_>) -> Result<(), Self::Error> {
        if data.run_loop == RunLoop::Owned {
            return writeln!(
                self.target,
                "\n{} collected, none executed; {} filtered out",
                tests_count(data.collected),
                data.filtered_out
            );
        }

        self.write_failures(data.outcomes)?;

        let count = |f: fn(&TestStatus) -> bool| {
            data.outcomes
                .iter()
                .filter(|(_, outcome)| f(&outcome.status))
                .count()
        };
        let passed = count(TestStatus::passed);
        let failed = count(TestStatus::failed);
        let ignored = count(TestStatus::ignored);

        write!(self.target, "\ntest result: ")?;
        match failed {
            0 => self.write_colored(Color::Green, "ok")?,
            _ => self.write_colored(Color::Red, "FAILED")?,
        }
        writeln!(
            self.target,
            ". {passed} passed; {failed} failed; {ignored} ignored; 0 measured; {} filtered out; finished in {:.2}s\n",
            data.filtered_out,
            data.duration.as_secs_f64()
        )
    }

    fn fmt_summary(&mut self, data: FmtSummary<'_>) -> Result<(), Self::Error> {
        for line in data.lines {
            writeln!(self.target, "{}", separator(line))?;
        }
        Ok(())
    }
}

impl<'t, Extra: 't, W: io::Write> TestListFormatter<'t, Extra> for PrettyFormatter<W> {
    type Error = io::Error;

    fn fmt_list_test(&mut self, data: FmtListTest<'t, Extra>) -> Result<(), Self::Error> {
        writeln!(self.target, "{}: test", data.meta.name)
    }

    fn fmt_end_listing(&mut self, data: FmtEndListing) -> Result<(), Self::Error> {
        writeln!(self.target, "\n{}", tests_count(data.active + data.ignored))
    }
}
