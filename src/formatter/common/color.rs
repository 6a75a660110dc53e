use clap::ValueEnum;

/// When output is colored.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, ValueEnum)]
pub enum ColorSetting {
    /// Only when writing to a terminal.
    #[default]
    #[value(name = "auto")]
    Automatic,
    Always,
    Never,
}

impl ColorSetting {
    pub fn enabled(self, terminal: bool) -> bool {
        match self {
            ColorSetting::Automatic => terminal,
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }
}

/// The ANSI colors test statuses are printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
}

impl Color {
    pub fn paint(self, text: &str) -> String {
        let code = match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}
