use std::{env, str::FromStr};

use chess960_core::{renderer::RenderConfig, SetupError};

pub const OUTPUT_VAR: &str = "CHESS960_OUTPUT";
pub const GLYPHS_VAR: &str = "CHESS960_GLYPHS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Diagram,
    /// Both arrangements dumped as role/file maps.
    Raw,
    Fen,
}

impl FromStr for OutputFormat {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, SetupError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diagram" => Ok(OutputFormat::Diagram),
            "raw" => Ok(OutputFormat::Raw),
            "fen" => Ok(OutputFormat::Fen),
            _ => Err(SetupError::InvalidArgument(format!(
                "unknown output format {s:?}, expected \"diagram\", \"raw\" or \"fen\""
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub output: OutputFormat,
    pub render: RenderConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self, SetupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SetupError> {
        let mut settings = Self::default();

        if let Some(value) = lookup(OUTPUT_VAR) {
            settings.output = value.parse()?;
        }
        if let Some(value) = lookup(GLYPHS_VAR) {
            settings.render.glyphs = value.parse()?;
        }

        Ok(settings)
    }
}
