use console::Style;
use once_cell::sync::Lazy;

pub struct RosterTheme {
    pub heading: Style,
    pub id: Style,
    pub name: Style,
    pub muted: Style,
    pub label: Style,
    pub required: Style,
    pub mode: Style,
}

pub static ROSTER_THEME: Lazy<RosterTheme> = Lazy::new(|| RosterTheme {
    heading: Style::new().bold().underlined(),
    id: Style::new().yellow(),
    name: Style::new().bold(),
    muted: Style::new().color256(246).italic(),
    label: Style::new().cyan(),
    required: Style::new().red(),
    mode: Style::new().green().bold(),
});

/// Applies `style`, honoring a forced color choice when given.
pub fn paint(style: &Style, text: impl std::fmt::Display, use_color: Option<bool>) -> String {
    match use_color {
        Some(enabled) => style
            .clone()
            .force_styling(enabled)
            .apply_to(text)
            .to_string(),
        None => style.apply_to(text).to_string(),
    }
}
