//! Portfolio App
//!
//! Page shell: navigation bar, content sections, footer with the
//! visitor counter.

use leptos::prelude::*;

use crate::components::{NavBar, VisitorCounter};
use crate::config::{CounterConfig, ACTIVE_BACKEND};

#[component]
pub fn App() -> impl IntoView {
    // Validate the counter config once, up front. A bad endpoint
    // degrades the widget to its placeholder instead of breaking
    // the page.
    let config = CounterConfig::for_backend(ACTIVE_BACKEND).unwrap_or_else(|err| {
        web_sys::console::error_1(&format!("Counter configuration rejected: {err}").into());
        CounterConfig::unconfigured(ACTIVE_BACKEND)
    });

    view! {
        <NavBar />

        <main>
            <section id="home" class="hero">
                <h1>"Dan Phillips"</h1>
                <p>"Cloud engineer. AWS and GCP."</p>
            </section>
            <section id="projects">
                <h2>"Projects"</h2>
                <p>"Cloud Resume Challenge: this site, twice over."</p>
            </section>
            <section id="certifications">
                <h2>"Certifications"</h2>
            </section>
            <section id="contact">
                <h2>"Contact"</h2>
            </section>
        </main>

        <footer class="site-footer">
            <p>
                "Visitors: "
                <VisitorCounter config=config />
            </p>
        </footer>
    }
}
