//! Button Components

use dioxus::prelude::*;

/// Icon button for compact actions (close, prev/next, favorite)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<MouseEvent>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = icon_button_class(props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |e| props.onclick.call(e),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<MouseEvent>, #[props(default)] class: Option<String>) -> Element {
    let class = match class {
        Some(extra) => format!("close-btn {}", extra),
        None => "close-btn".to_string(),
    };

    rsx! {
        IconButton {
            onclick: move |e: MouseEvent| {
                // Keep the click from also reaching the overlay backdrop
                e.stop_propagation();
                onclick.call(e);
            },
            aria_label: "Close".to_string(),
            class: class,
            "\u{00D7}"
        }
    }
}

fn icon_button_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("icon-btn {}", extra),
        _ => "icon-btn".to_string(),
    }
}

/// Join a base class with a modifier that applies when `on` is set.
pub fn with_modifier(base: &str, modifier: &str, on: bool) -> String {
    if on {
        format!("{} {}", base, modifier)
    } else {
        base.to_string()
    }
}
