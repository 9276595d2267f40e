use leptos::prelude::*;

pub use crate::icons::IconName;

#[component]
pub fn Icon(
    name: IconName,
    #[prop(default = 20)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {name.paths().iter().map(|d| view! { <path d={*d} /> }).collect_view()}
        </svg>
    }
}
