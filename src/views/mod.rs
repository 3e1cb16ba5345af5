pub mod chat;
pub mod contact;
pub mod landing;

pub use chat::ChatDock;
pub use contact::ContactSection;
pub use landing::{Features, Hero, SiteFooter, Steps, ThemeToggle};
