use crate::types::ThemeMode;
use serde::Serialize;

/// Class names for every themed surface on the page. Rules live in
/// `assets/softsell.css`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub section: &'static str,
    pub text: &'static str,
    pub secondary_text: &'static str,
    pub card: &'static str,
    pub input: &'static str,
    pub toggle_button: &'static str,
}

pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => LIGHT_PALETTE,
        ThemeMode::Dark => DARK_PALETTE,
    }
}

const LIGHT_PALETTE: Palette = Palette {
    background: "canvas-light",
    section: "section-light",
    text: "ink-light",
    secondary_text: "ink-muted-light",
    card: "card-light",
    input: "field-light",
    toggle_button: "toggle-light",
};

const DARK_PALETTE: Palette = Palette {
    background: "canvas-dark",
    section: "section-dark",
    text: "ink-dark",
    secondary_text: "ink-muted-dark",
    card: "card-dark",
    input: "field-dark",
    toggle_button: "toggle-dark",
};
