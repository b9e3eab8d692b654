//! Reusable, lifetime-free Dioxus components for the Pico.css framework.
//! The Pico stylesheet is linked once by the root `App`.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn class(&self, outline: bool) -> &'static str {
        match (self, outline) {
            (ButtonType::Primary, false) => "",
            (ButtonType::Primary, true) => "outline",
            (ButtonType::Secondary, false) => "secondary",
            (ButtonType::Secondary, true) => "secondary outline",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    #[props(optional)]
    title: Option<String>,
    #[props(optional)]
    style: Option<String>,
}

pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: props.button_type.class(props.outline),
            title: props.title.clone().unwrap_or_default(),
            style: props.style.clone().unwrap_or_default(),
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// The small "×" used to remove a row.
#[component]
pub fn CloseButton(on_click: EventHandler<MouseEvent>, #[props(default)] label: String) -> Element {
    rsx! {
        a {
            href: "#",
            class: "close",
            "aria-label": if label.is_empty() { "Close".to_string() } else { label },
            style: "display: inline-block; width: 1rem; height: 1rem;",
            onclick: move |evt| {
                evt.prevent_default();
                on_click.call(evt);
            },
        }
    }
}

//=============================================================================
// Modals
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    title: String,
    children: Element,
}

/// A titled modal that owns its own open flag.
pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                article {
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            class: "close",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                props.is_open.set(false);
                            }
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}

/// An always-open modal whose visibility belongs to the parent.
///
/// Backdrop clicks and the Escape key call `on_dismiss`; the parent decides
/// whether to unmount it.
#[derive(Props, PartialEq, Clone)]
pub struct DismissableModalProps {
    on_dismiss: EventHandler<()>,
    children: Element,
}

pub fn DismissableModal(props: DismissableModalProps) -> Element {
    rsx! {
        dialog {
            open: true,
            autofocus: true,
            onclick: move |_| props.on_dismiss.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    props.on_dismiss.call(());
                }
            },
            // Stops clicks inside the card from reaching the backdrop.
            article {
                onclick: |evt| evt.stop_propagation(),
                {props.children}
            }
        }
    }
}
