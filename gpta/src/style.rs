//! Terminal styles.
use anstyle::Color;
use anstyle::RgbColor;
use anstyle::Style;

/// Styles of the confirmation prompt.
pub struct Styles {
    /// Prompt label style.
    pub prompt: Style,
    /// Prompt arrow style.
    pub prompt_arrow: Style,
    /// Command text style.
    pub command: Style,
}

impl Styles {

    /// Load styles.
    pub fn new() -> Self {
        let fg_command_color = Color::Rgb(RgbColor(128, 128, 0));
        let bg_prompt_color = Color::Rgb(RgbColor(64, 64, 0));
        let white = Color::Rgb(RgbColor(255,255,255));

        Self {
            prompt: Style::new().bold().bg_color(Some(bg_prompt_color)).fg_color(Some(white)),
            prompt_arrow: Style::new().bold().fg_color(Some(bg_prompt_color)),
            command: Style::new().fg_color(Some(fg_command_color)),
        }
    }

    /// True when the terminal can't render colors.
    pub fn is_dumb_term() -> bool {
        Ok("dumb") == std::env::var("TERM").as_deref()
    }
}
