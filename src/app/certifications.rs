use leptos::prelude::*;

use crate::{content::CERTIFICATIONS, icons::Icon};

use super::{reveal::RevealSection, IconGlyph, SectionHeading};

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <RevealSection id="certifications">
            <SectionHeading
                title="Certifications &"
                highlight="Achievements"
                subtitle="Professional certifications and notable accomplishments"
            />
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {CERTIFICATIONS
                    .iter()
                    .map(|cert| {
                        view! {
                            <div class="card p-6 flex flex-col items-center text-center gap-4">
                                <div class=format!(
                                    "p-4 rounded-2xl text-white bg-gradient-to-br {}",
                                    cert.badge.gradient(),
                                )>
                                    <IconGlyph icon=cert.badge.icon() class="text-4xl" />
                                </div>
                                <h3 class="font-bold">{cert.title}</h3>
                                <p class="text-primary-500 text-sm">{cert.issuer}</p>
                                <p class="text-xs text-gray-500 dark:text-gray-400">{cert.date}</p>
                                {cert
                                    .credential_url
                                    .map(|href| {
                                        view! {
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="text-sm text-primary-500 flex items-center gap-1"
                                            >
                                                "View Credential"
                                                <IconGlyph icon=Icon::ExternalLink />
                                            </a>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}
