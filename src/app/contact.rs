use leptos::{html, prelude::*};

use crate::reveal::Section;

use super::{
    homepage::use_section_reveal,
    icon::{Icon, IconName},
    OWNER,
};

const CONTACT_EMAIL: &str = "hello@example.com";

const SOCIAL_LINKS: [(IconName, &str, &str); 4] = [
    (IconName::Twitter, "https://twitter.com", "Twitter"),
    (IconName::Instagram, "https://instagram.com", "Instagram"),
    (IconName::Linkedin, "https://linkedin.com", "LinkedIn"),
    (IconName::Github, "https://github.com", "GitHub"),
];

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(Section::Contact, section_ref);

    view! {
        <section
            id=Section::Contact.id()
            node_ref=section_ref
            class="py-20 md:py-32 px-6 md:px-12 opacity-0 transition-all duration-1000 ease-out translate-y-20"
            class:section-visible=move || revealed.get()
        >
            <div class="max-w-7xl mx-auto">
                <div class="text-center">
                    <h2 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold tracking-tight mb-6 md:mb-8 font-display">
                        "Let's Work Together"
                    </h2>
                    <p class="text-lg md:text-xl text-gray-400 mb-8 md:mb-12 max-w-2xl mx-auto">
                        "I'm currently available for freelance projects. Let's create something amazing together."
                    </p>
                    <a
                        href=format!("mailto:{CONTACT_EMAIL}")
                        class="inline-flex items-center gap-2 text-base md:text-lg border border-white px-8 md:px-10 py-4 md:py-5 hover:bg-white hover:text-black transition-all duration-300"
                    >
                        "Get In Touch"
                        <Icon name=IconName::ArrowRight size=20 />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-900 py-8 md:py-12 px-6 md:px-12">
            <div class="max-w-7xl mx-auto">
                <div class="flex flex-col md:flex-row items-center justify-between gap-6">
                    <div class="text-sm text-gray-500">
                        {format!("© {} {OWNER}. All rights reserved.", env!("BUILD_YEAR"))}
                    </div>
                    <div class="flex items-center gap-6">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(icon, href, label)| {
                                view! {
                                    <a
                                        href={*href}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-gray-400 hover:text-white transition-colors duration-300"
                                        aria-label={*label}
                                    >
                                        <Icon name={*icon} size=20 />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
