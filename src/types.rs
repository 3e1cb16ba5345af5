use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Label for the toggle button, naming the mode a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙 Dark Mode",
            ThemeMode::Dark => "🌞 Light Mode",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Bot,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    sender: Sender,
    text: String,
}

impl ChatMessage {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseType {
    Software,
    Enterprise,
    Custom,
}

impl LicenseType {
    pub const ALL: [LicenseType; 3] = [
        LicenseType::Software,
        LicenseType::Enterprise,
        LicenseType::Custom,
    ];

    pub fn value(self) -> &'static str {
        match self {
            LicenseType::Software => "software",
            LicenseType::Enterprise => "enterprise",
            LicenseType::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LicenseType::Software => "Software",
            LicenseType::Enterprise => "Enterprise",
            LicenseType::Custom => "Custom",
        }
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LicenseType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        LicenseType::ALL
            .into_iter()
            .find(|kind| kind.value() == raw)
            .ok_or_else(|| raw.to_string())
    }
}
