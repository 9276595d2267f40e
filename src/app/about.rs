use leptos::{html, prelude::*};

use crate::reveal::Section;

use super::homepage::use_section_reveal;

const SERVICES: [&str; 5] = [
    "Web Design & Development",
    "Brand Identity",
    "UX/UI Design",
    "Product Strategy",
    "Creative Direction",
];

const TOOLS: [&str; 5] = [
    "React & Next.js",
    "Figma & Adobe Suite",
    "Three.js & GSAP",
    "Tailwind CSS",
    "TypeScript",
];

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(Section::About, section_ref);

    view! {
        <section
            id=Section::About.id()
            node_ref=section_ref
            class="py-20 md:py-32 px-6 md:px-12 bg-[#0F0F0F] opacity-0 transition-all duration-1000 ease-out translate-y-20"
            class:section-visible=move || revealed.get()
        >
            <div class="max-w-5xl mx-auto">
                <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight mb-8 md:mb-12 font-display">
                    "About Me"
                </h2>
                <div class="space-y-6 md:space-y-8 text-base md:text-lg lg:text-xl leading-relaxed text-gray-300">
                    <p>
                        "I'm a freelance designer and developer based in Amsterdam, working at the intersection of design and technology. With over 8 years of experience, I help brands and startups create meaningful digital experiences."
                    </p>
                    <p>
                        "My approach combines strategic thinking with meticulous attention to detail. I believe that great design is not just about aesthetics. It's about solving problems and creating value for users."
                    </p>
                    <p>
                        "I've had the privilege of working with diverse clients, from innovative startups to established brands, always striving to push boundaries and explore new possibilities in digital design."
                    </p>
                </div>

                <div class="mt-12 md:mt-16 grid grid-cols-1 sm:grid-cols-2 gap-8 md:gap-12">
                    <SkillList title="Services" items={&SERVICES[..]} />
                    <SkillList title="Tools & Tech" items={&TOOLS[..]} />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillList(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl md:text-2xl font-semibold mb-4 font-display">{title}</h3>
            <ul class="space-y-2 text-gray-400">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}
