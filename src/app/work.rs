use leptos::{html, prelude::*};

use crate::{
    motion::PageMotion,
    projects::{card_delay, Project, PROJECTS},
    reveal::Section,
};

use super::homepage::use_section_reveal;

#[component]
pub fn Work() -> impl IntoView {
    let motion = expect_context::<RwSignal<PageMotion>>();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(Section::Work, section_ref);

    view! {
        <section
            id=Section::Work.id()
            node_ref=section_ref
            class="py-20 md:py-32 px-6 md:px-12 opacity-0 transition-all duration-1000 ease-out translate-y-20"
            class:section-visible=move || revealed.get()
            style:transform=move || format!("translateY({}px)", motion.with(|m| m.work_drift()))
        >
            <div class="max-w-7xl mx-auto">
                <div class="mb-12 md:mb-20">
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight font-display">
                        "Featured Work"
                    </h2>
                    <div class="w-20 h-1 bg-white mt-4"></div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 md:gap-12">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    view! {
        <a
            href=project.link
            class="project-card group block"
            style:opacity="0"
            style:animation="slideUp 0.8s ease-out forwards"
            style:animation-delay=card_delay(index)
        >
            <div class="overflow-hidden bg-[#1A1A1A] rounded-sm">
                <img
                    src=project.image
                    alt=project.title
                    class="project-image w-full aspect-[4/3] object-cover"
                />
            </div>
            <div class="mt-4 md:mt-6">
                <div class="flex items-baseline justify-between gap-4 mb-2">
                    <h3 class="text-xl md:text-2xl lg:text-3xl font-semibold group-hover:text-gray-400 transition-colors duration-300 font-display">
                        {project.title}
                    </h3>
                    <span class="text-sm text-gray-500">{project.year}</span>
                </div>
                <p class="text-sm md:text-base text-gray-400">{project.category}</p>
            </div>
        </a>
    }
}
