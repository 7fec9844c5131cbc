use crate::profile::Accent;
use console::Style;
use once_cell::sync::Lazy;

/// Named styles for everything drawn outside the prompt widget.
pub struct Theme {
    pub border: Style,
    pub name: Style,
    pub tagline: Style,
    pub label: Style,
    pub muted: Style,
    pub plain: Style,
    pub highlight: Style,
    pub heading: Style,
    pub project_title: Style,
    pub project_link: Style,
}

impl Theme {
    pub fn accent(&self, accent: Accent) -> Style {
        match accent {
            Accent::Magenta => Style::new().magenta(),
            Accent::Green => Style::new().green(),
            Accent::Cyan => Style::new().cyan(),
        }
    }
}

pub static THEME: Lazy<Theme> = Lazy::new(|| Theme {
    border: Style::new().magenta(),
    name: Style::new().magenta().bold(),
    tagline: Style::new().cyan(),
    label: Style::new().black().bright(),
    muted: Style::new().black().bright(),
    plain: Style::new().white(),
    highlight: Style::new().magenta(),
    heading: Style::new().blue().bright().bold(),
    project_title: Style::new().blue().bold(),
    project_link: Style::new().cyan(),
});
