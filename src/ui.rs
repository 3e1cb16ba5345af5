use crate::content::{FAVICON_PATH, PAGE_DESCRIPTION, PAGE_TITLE};
use crate::state::PageState;
use crate::views::{ChatDock, ContactSection, Features, Hero, SiteFooter, Steps, ThemeToggle};
use dioxus::prelude::*;

const SOFTSELL_CSS: Asset = asset!("/assets/softsell.css");

/// Page root. Expects `backend::Services` in the launch context.
#[component]
pub fn App() -> Element {
    let page = use_signal(PageState::new);
    let palette = page.read().palette();

    rsx! {
        PageMetadata {}
        div { class: format_args!("page {} {}", palette.background, palette.text),
            ThemeToggle { page }
            Hero { palette }
            Steps { palette }
            Features { palette }
            ContactSection { palette }
            ChatDock { page }
            SiteFooter { palette }
        }
    }
}

/// Head tags go through the renderer's document API, never into the body.
#[component]
fn PageMetadata() -> Element {
    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Meta { name: "description", content: "{PAGE_DESCRIPTION}" }
        document::Link { rel: "icon", href: "{FAVICON_PATH}" }
        document::Link { rel: "stylesheet", href: SOFTSELL_CSS }
    }
}
