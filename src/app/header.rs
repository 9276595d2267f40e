use leptos::prelude::*;

use crate::reveal::Section;

use super::OWNER;

const NAV: [(Section, &str); 3] = [
    (Section::Work, "Work"),
    (Section::About, "About"),
    (Section::Contact, "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 px-6 md:px-12 py-6 md:py-8">
            <nav class="flex items-center justify-between">
                <div class="text-xl md:text-2xl font-bold tracking-tight opacity-0 animate-fade-in font-display">
                    {OWNER.to_uppercase()}
                </div>
                <div class="flex items-center gap-6 md:gap-8 opacity-0 animate-fade-in delay-200">
                    {NAV
                        .iter()
                        .map(|(section, label)| {
                            view! {
                                <a
                                    href=format!("#{}", section.id())
                                    class="text-sm md:text-base hover:text-gray-400 transition-colors duration-300"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>
        </header>
    }
}
