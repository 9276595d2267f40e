mod about;
mod contact;
mod header;
mod hero;
mod homepage;
mod icon;
mod work;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{config::MotionConfig, icons::FAVICON};

use header::Header;
use homepage::HomePage;

pub const OWNER: &str = "Dennis Snellenberg";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(MotionConfig::default());

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta
            name="description"
            content="Freelance designer and developer based in Amsterdam."
        />

        <Router>
            <div class="min-h-screen bg-[#0A0A0A] text-white overflow-x-hidden smooth-scroll">
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
