// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod components;
mod screens;
mod split_draft;

use api::prefs::display_preference::DisplayPreference;
use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use components::pico::Container;
use screens::checkout::CheckoutScreen;

pub use components::payment_split_modal::PaymentSplitModal;

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        margin: 0;
        background-color: var(--pico-muted-border-color);
    }

    .app-main-container {
        max-width: 48rem;
        margin: 0 auto;
        padding: 1rem;
    }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    /* Keep the split dialog usable on narrow screens. */
    dialog > article {
        width: min(40rem, 100%);
    }

    @media (max-width: 576px) {
        .split-row { flex-wrap: wrap; }
        .split-row select { max-width: 100% !important; flex-basis: 100%; }
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        LoadedApp {
            user_prefs: UserPrefs::new(DisplayPreference::from_env()),
        }
    }
}

/// Holds the app once preferences are known.
#[component]
fn LoadedApp(user_prefs: UserPrefs) -> Element {
    dioxus_logger::tracing::info!("prefs: {:#?}", user_prefs);

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| AppState::new(&user_prefs));

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                h1 {
                                    style: "margin: 0; font-size: 1.5rem;",
                                    "Split Tender"
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    CheckoutScreen {}
                }
            }
        }
    }
}
