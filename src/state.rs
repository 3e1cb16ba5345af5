use crate::chat::ChatWidget;
use crate::theme::{Palette, palette};
use crate::types::ThemeMode;
use serde::{Deserialize, Serialize};

/// Everything the page remembers during a single view. Nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub theme: ThemeMode,
    pub chat: ChatWidget,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = ?self.theme, "theme toggled");
    }

    pub fn palette(&self) -> Palette {
        palette(self.theme)
    }
}
