use leptos::{html, prelude::*};

use crate::{motion::PageMotion, reveal::Section};

use super::{
    homepage::use_section_reveal,
    icon::{Icon, IconName},
};

const HEADLINE_CLASS: &str = "text-5xl sm:text-6xl md:text-7xl lg:text-8xl xl:text-9xl font-black leading-[0.9] tracking-tighter opacity-0 animate-fade-in-up font-display";

#[component]
pub fn Hero() -> impl IntoView {
    let motion = expect_context::<RwSignal<PageMotion>>();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(Section::Hero, section_ref);
    let style = Memo::new(move |_| motion.with(|m| m.hero_style()));

    view! {
        <section
            id=Section::Hero.id()
            node_ref=section_ref
            class="min-h-screen flex items-center justify-center px-6 md:px-12 relative transition-opacity duration-700"
            class:section-visible=move || revealed.get()
            style:transform=move || style.get().transform()
            style:opacity=move || style.get().opacity()
        >
            <div class="max-w-7xl w-full">
                <div class="space-y-4 md:space-y-6">
                    <h1 class=HEADLINE_CLASS>"FREELANCE"</h1>
                    <h1 class=format!("{HEADLINE_CLASS} [animation-delay:0.2s]")>"DESIGNER &"</h1>
                    <h1 class=format!("{HEADLINE_CLASS} [animation-delay:0.3s]")>"DEVELOPER"</h1>
                </div>
                <div class="mt-8 md:mt-12 opacity-0 animate-fade-in [animation-delay:0.5s]">
                    <p class="text-base md:text-lg text-gray-400 max-w-md">
                        "Based in Amsterdam, specializing in creating digital experiences that combine innovative design with seamless functionality."
                    </p>
                </div>
                <div class="mt-8 md:mt-10 opacity-0 animate-fade-in [animation-delay:0.6s]">
                    <a
                        href=format!("#{}", Section::Work.id())
                        class="inline-flex items-center gap-2 text-sm md:text-base border border-white px-6 md:px-8 py-3 md:py-4 hover:bg-white hover:text-black transition-all duration-300"
                    >
                        "View My Work"
                        <Icon name=IconName::ArrowRight size=18 />
                    </a>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 opacity-0 animate-fade-in [animation-delay:0.7s]">
                <div class="flex flex-col items-center gap-2">
                    <span class="text-xs text-gray-500 uppercase tracking-widest">"Scroll"</span>
                    <Icon
                        name=IconName::ChevronDown
                        size=20
                        class="animate-bounce text-gray-500"
                    />
                </div>
            </div>
        </section>
    }
}
