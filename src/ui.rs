use crate::theme::STYLESHEET;
use crate::views::ChatView;
use dioxus::prelude::*;

const PAGE_TITLE: &str = "Todo AI Assistant";
const PAGE_DESCRIPTION: &str = "AI-powered conversational Todo management";

/// Root component. Expects a `ClientConfig` in the launch context.
#[component]
pub fn App() -> Element {
    rsx! {
        Shell {
            ChatView {}
        }
    }
}

/// Document metadata and styles around the page content.
#[component]
fn Shell(children: Element) -> Element {
    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Meta { name: "description", content: PAGE_DESCRIPTION }
        style { dangerous_inner_html: STYLESHEET }
        {children}
    }
}
