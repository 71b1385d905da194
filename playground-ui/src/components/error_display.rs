//! Warning banner for a recoverable failure, shown with its cause chain.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// Error chain, outermost context first
    pub messages: Vec<String>,
    #[props(default = "Error".to_string())]
    pub title: String,
}

/// Split a chain into the headline and the causes listed under it.
fn headline_and_causes(messages: &[String]) -> Option<(&str, &[String])> {
    messages
        .split_first()
        .map(|(head, causes)| (head.as_str(), causes))
}

/// Renders nothing for an empty chain.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let Some((headline, causes)) = headline_and_causes(&props.messages) else {
        return rsx! {};
    };

    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 4px; border: 1px solid #FFE082;",
            strong { "{props.title}: " }
            "{headline}"
            if !causes.is_empty() {
                ul {
                    style: "margin: 6px 0 0; padding-left: 20px; font-size: 0.9em;",
                    for (i, cause) in causes.iter().enumerate() {
                        li { key: "{i}", "caused by: {cause}" }
                    }
                }
            }
        }
    }
}
