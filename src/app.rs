mod about;
mod certifications;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::STORAGE_KEY;
use crate::{content::PERSONAL_INFO, icons::Icon, theme::Theme};

use about::About;
use certifications::Certifications;
use contact::Contact;
use experience::ExperienceSection;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="theme-color" content="#0a0a0a" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = signal(Theme::default());

    let toggle_theme = Callback::new(move |_: ()| set_theme.set(theme.get_untracked().toggled()));
    let theme = Signal::derive(move || theme.get());

    view! {
        <Title formatter=|title| format!("{} - {title}", PERSONAL_INFO.name) />
        <Meta name="description" content=PERSONAL_INFO.tagline />

        <Router>
            <div class=move || format!("{} min-h-screen flex flex-col", theme.get().class())>
                <div class="bg-white dark:bg-dark-bg text-gray-900 dark:text-white transition-colors">
                    <Header theme toggle_theme />
                    <main class="flex flex-col flex-grow">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                    <Footer />
                </div>
            </div>
        </Router>
    }
}

/// The whole portfolio, one section after another.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=PERSONAL_INFO.title />
        <Hero />
        <About />
        <Skills />
        <ExperienceSection />
        <Projects />
        <Certifications />
        <Contact />
    }
}

#[component]
fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon.class()) aria-hidden="true"></i> }
}

#[component]
fn SectionHeading(
    title: &'static str,
    highlight: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="section-title">
                {title} " " <span class="gradient-text">{highlight}</span>
            </h2>
            <p class="section-subtitle">{subtitle}</p>
        </div>
    }
}
