use crate::backend::Services;
use crate::content::{
    FEATURES, HERO_CTA, HERO_TAGLINE, HERO_TITLE, STEPS, current_year, footer_notice,
};
use crate::state::PageState;
use crate::theme::Palette;
use dioxus::prelude::*;

#[component]
pub fn ThemeToggle(page: Signal<PageState>) -> Element {
    let mut page = page;
    let (theme, palette) = {
        let state = page.read();
        (state.theme, state.palette())
    };
    rsx! {
        div { class: "toggle-bar",
            button {
                class: format_args!("theme-toggle {}", palette.toggle_button),
                r#type: "button",
                onclick: move |_| page.with_mut(|state| state.toggle_theme()),
                "{theme.toggle_label()}"
            }
        }
    }
}

#[component]
pub fn Hero(palette: Palette) -> Element {
    let services = use_context::<Services>();
    let on_sell = move |_| {
        if let Err(err) = services.sale.begin_sale() {
            tracing::debug!(%err, "sell button pressed");
        }
    };
    rsx! {
        section { class: format_args!("hero {}", palette.section),
            h1 { "{HERO_TITLE}" }
            p { "{HERO_TAGLINE}" }
            button { class: "btn-primary", r#type: "button", onclick: on_sell, "{HERO_CTA}" }
        }
    }
}

#[component]
pub fn Steps(palette: Palette) -> Element {
    rsx! {
        section { class: format_args!("band {}", palette.background),
            h2 { "How It Works" }
            div { class: "grid",
                for step in STEPS {
                    div { key: "{step.title}", class: format_args!("tile {}", palette.card),
                        div { class: "tile-icon", "{step.icon}" }
                        h3 { "{step.title}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Features(palette: Palette) -> Element {
    rsx! {
        section { class: format_args!("band {}", palette.section),
            h2 { "Why Choose Us" }
            div { class: "grid",
                for feature in FEATURES {
                    div { key: "{feature.title}", class: format_args!("tile {}", palette.card),
                        h3 { "{feature.title}" }
                        p { class: palette.secondary_text, "{feature.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter(palette: Palette) -> Element {
    let year = use_hook(current_year);
    rsx! {
        footer { class: format_args!("footer {}", palette.secondary_text),
            "{footer_notice(year)}"
        }
    }
}
