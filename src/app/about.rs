use leptos::prelude::*;

use crate::content::{ABOUT_PARAGRAPHS, ABOUT_STATS};

use super::{reveal::RevealSection, SectionHeading};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <RevealSection id="about">
            <SectionHeading
                title="About"
                highlight="Me"
                subtitle="Get to know me better – my journey, passion, and what drives me"
            />
            <div class="max-w-4xl mx-auto space-y-4">
                {ABOUT_PARAGRAPHS
                    .iter()
                    .map(|text| {
                        view! {
                            <p class="text-gray-600 dark:text-gray-400 leading-relaxed">{*text}</p>
                        }
                    })
                    .collect_view()}
                <div class="flex flex-wrap gap-4 pt-4">
                    <a href="#contact" class="btn-primary">
                        "Let's Connect"
                    </a>
                    <a href="#projects" class="btn-secondary">
                        "View Projects"
                    </a>
                </div>
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mt-12">
                {ABOUT_STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="card p-6 text-center">
                                <span class="block text-3xl font-bold gradient-text">{*value}</span>
                                <span class="text-sm text-gray-500 dark:text-gray-400">{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}
