use std::time::Duration;

use leptos::prelude::*;

use crate::{
    content::{HERO_PHRASES, PERSONAL_INFO, SOCIAL_LINKS},
    icons::Icon,
    typewriter::{Typewriter, TYPE_DELAY},
};

use super::IconGlyph;

fn schedule_tick(typewriter: StoredValue<Typewriter>, set_text: WriteSignal<&'static str>, delay: Duration) {
    set_timeout(
        move || {
            // stops once the component (and its stored value) is gone
            let Some((next, text)) = typewriter.try_update_value(|tw| {
                let next = tw.tick();
                (next, tw.text())
            }) else {
                return;
            };
            set_text(text);
            schedule_tick(typewriter, set_text, next);
        },
        delay,
    );
}

#[component]
pub fn Hero() -> impl IntoView {
    let typewriter = StoredValue::new(Typewriter::new(HERO_PHRASES));
    let (text, set_text) = signal("");

    // effects only run in the browser
    Effect::new(move |_| schedule_tick(typewriter, set_text, TYPE_DELAY));

    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="container-custom relative z-10 grid lg:grid-cols-2 gap-12 items-center">
                <div class="text-center lg:text-left space-y-6">
                    <p class="text-primary-500 font-medium">"Hello, I'm"</p>
                    <h1 class="text-4xl md:text-6xl font-bold">
                        <span class="gradient-text">{PERSONAL_INFO.name}</span>
                    </h1>
                    <h2 class="text-2xl md:text-3xl font-semibold h-10">
                        {text}
                        <span class="animate-pulse text-primary-500">"|"</span>
                    </h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400">{PERSONAL_INFO.subtitle}</p>
                    <p class="text-gray-600 dark:text-gray-400 max-w-xl">{PERSONAL_INFO.tagline}</p>
                    <div class="flex flex-wrap gap-4 justify-center lg:justify-start">
                        <a href="#contact" class="btn-primary">
                            "Get In Touch"
                        </a>
                        <a
                            href=PERSONAL_INFO.resume_url
                            download="resume.pdf"
                            class="btn-secondary flex items-center gap-2"
                        >
                            <IconGlyph icon=Icon::Download />
                            "Download Resume"
                        </a>
                    </div>
                    <div class="flex gap-4 justify-center lg:justify-start">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=social.label
                                        class="p-3 rounded-full bg-gray-100 dark:bg-dark-card hover:bg-primary-500 hover:text-white transition-all"
                                    >
                                        <IconGlyph icon=social.icon class="text-xl" />
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=PERSONAL_INFO.mailto()
                            aria-label="Email"
                            class="p-3 rounded-full bg-gray-100 dark:bg-dark-card hover:bg-primary-500 hover:text-white transition-all"
                        >
                            <IconGlyph icon=Icon::Email class="text-xl" />
                        </a>
                    </div>
                </div>
                <div class="flex justify-center">
                    <img
                        src=PERSONAL_INFO.profile_image
                        alt=PERSONAL_INFO.name
                        class="w-72 h-72 md:w-96 md:h-96 rounded-full object-cover border-4 border-primary-500/30 shadow-2xl"
                    />
                </div>
            </div>
            <a
                href="#about"
                aria-label="Scroll to about"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce"
            >
                <IconGlyph icon=Icon::ChevronDown class="text-2xl" />
            </a>
        </section>
    }
}
