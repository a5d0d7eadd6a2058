use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::{
    content::{NAV_LINKS, PERSONAL_INFO, SOCIAL_LINKS},
    icons::Icon,
};

use super::IconGlyph;

fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative bg-gray-100 dark:bg-dark-bg-secondary border-t border-gray-200 dark:border-dark-border">
            <div class="container-custom py-12 grid md:grid-cols-3 gap-8">
                <div class="space-y-4">
                    <a href="#home" class="inline-block text-2xl font-bold gradient-text">
                        {PERSONAL_INFO.name}
                    </a>
                    <p class="text-gray-600 dark:text-gray-400 max-w-xs">
                        "Building the future, one line of code at a time."
                    </p>
                    <div class="flex gap-3">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=social.label
                                        class="p-2.5 rounded-lg bg-gray-200 dark:bg-dark-card hover:bg-primary-500 hover:text-white transition-all"
                                    >
                                        <IconGlyph icon=social.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=PERSONAL_INFO.mailto()
                            aria-label="Email"
                            class="p-2.5 rounded-lg bg-gray-200 dark:bg-dark-card hover:bg-primary-500 hover:text-white transition-all"
                        >
                            <IconGlyph icon=Icon::Email />
                        </a>
                    </div>
                </div>
                <div>
                    <h3 class="font-semibold mb-4">"Quick Links"</h3>
                    <ul class="grid grid-cols-2 gap-2">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a
                                            href=link.href()
                                            class="text-gray-600 dark:text-gray-400 hover:text-primary-500"
                                        >
                                            {link.name}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="space-y-2">
                    <h3 class="font-semibold mb-4">"Get In Touch"</h3>
                    <p class="text-gray-600 dark:text-gray-400">{PERSONAL_INFO.location}</p>
                    <a href=PERSONAL_INFO.mailto() class="text-primary-500">
                        {PERSONAL_INFO.email}
                    </a>
                </div>
            </div>
            <div class="container-custom py-6 border-t border-gray-200 dark:border-dark-border flex items-center justify-between text-sm text-gray-500">
                <p>
                    "© " {build_year().map(|year| format!("{year} "))} {PERSONAL_INFO.name}
                    ". All rights reserved."
                </p>
                <a href="#home" aria-label="Back to top" class="p-2 rounded-lg bg-primary-500 text-white">
                    <IconGlyph icon=Icon::ArrowUp />
                </a>
            </div>
        </footer>
    }
}
