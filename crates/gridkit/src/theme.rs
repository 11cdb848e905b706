use ratatui::style::Style;

/// Styles shared by the gridkit widgets.
///
/// [`Theme::light`] and [`Theme::dark`] are starting points; hosts tweak
/// fields to taste.
#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub accent: Style,
    pub menu_bg: Style,
    pub menu_hover: Style,
    pub detail_light: Style,
    pub detail_dark: Style,
}

impl Theme {
    pub fn light() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            accent: Style::default().cyan(),
            menu_bg: Style::default().black().on_white(),
            menu_hover: Style::default().white().on_blue(),
            detail_light: Style::default().black().on_gray(),
            detail_dark: Style::default().white().on_dark_gray(),
        }
    }

    pub fn dark() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default().white(),
            text_muted: Style::default().gray(),
            accent: Style::default().cyan(),
            menu_bg: Style::default().white().on_dark_gray(),
            menu_hover: Style::default().black().on_cyan(),
            detail_light: Style::default().black().on_gray(),
            detail_dark: Style::default().white().on_black(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
