use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
};

use crate::{
    config::MotionConfig,
    motion::PageMotion,
    projects::{structured_data, PROJECTS},
    reveal::{IntersectionSample, Section},
    scroll::ScrollOffset,
};

use super::{
    about::About,
    contact::{Contact, Footer},
    hero::Hero,
    work::Work,
    OWNER,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_context::<MotionConfig>().unwrap_or_default();
    let motion = RwSignal::new(PageMotion::mount(config));
    provide_context(motion);

    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let offset = ScrollOffset::from_pixels(scroll_y.get());
        motion.try_maybe_update(|m| (m.scroll(offset), ()));
    });

    // listeners and observers are released by their own owners; this stops
    // anything already queued from touching the page state
    on_cleanup(move || {
        motion.try_update_untracked(|m| m.teardown());
    });

    let ld_json = structured_data(OWNER, &PROJECTS)
        .map_err(|e| log::warn!("couldn't serialize structured data: {e}"))
        .ok();

    view! {
        <Title text="Freelance Designer & Developer" />
        {ld_json.map(|json| view! { <script type="application/ld+json" inner_html=json></script> })}
        <Hero />
        <Work />
        <About />
        <Contact />
        <Footer />
    }
}

/// Observes `target` and reports whether `section` has been revealed.
pub fn use_section_reveal(section: Section, target: NodeRef<html::Section>) -> Signal<bool> {
    let motion = expect_context::<RwSignal<PageMotion>>();
    let threshold = motion.with_untracked(|m| m.config().reveal_threshold());

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let sample =
                    IntersectionSample::new(entry.is_intersecting(), entry.intersection_ratio());
                motion.try_maybe_update(|m| (m.intersect(section, sample), ()));
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    // scroll ticks rewrite PageMotion; only a flipped flag should reach the class binding
    Memo::new(move |_| motion.with(|m| m.is_revealed(section))).into()
}
