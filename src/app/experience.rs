use leptos::prelude::*;

use crate::content::{Experience, EXPERIENCES};

use super::{reveal::RevealSection, SectionHeading};

#[component]
fn ExperienceCard(experience: Experience) -> impl IntoView {
    view! {
        <div class="relative pl-8 border-l-2 border-primary-500/30">
            <span class="absolute -left-2 top-2 w-4 h-4 rounded-full bg-primary-500"></span>
            <div class="card p-6">
                <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-2 mb-4">
                    <div class="flex items-start gap-4">
                        {experience
                            .logo
                            .map(|logo| {
                                view! {
                                    <img
                                        src=logo
                                        alt=experience.organization
                                        class="w-12 h-12 rounded-lg object-contain"
                                    />
                                }
                            })}
                        <div>
                            <h3 class="text-lg font-bold">{experience.position}</h3>
                            <p class="text-primary-500 font-medium">{experience.organization}</p>
                        </div>
                    </div>
                    <div class="text-sm text-gray-500 dark:text-gray-400 md:text-right shrink-0">
                        <div class="font-bold">{experience.date}</div>
                        <div>{experience.location}</div>
                    </div>
                </div>
                <ul class="space-y-2 mb-4 list-disc pl-5 text-gray-600 dark:text-gray-400">
                    {experience
                        .achievements
                        .iter()
                        .map(|achievement| view! { <li>{*achievement}</li> })
                        .collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2">
                    {experience
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="tag">{*tech}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <RevealSection id="experience">
            <SectionHeading
                title="Work"
                highlight="Experience"
                subtitle="My professional journey and achievements"
            />
            <div class="max-w-4xl mx-auto space-y-8">
                {EXPERIENCES
                    .iter()
                    .map(|experience| view! { <ExperienceCard experience=*experience /> })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}
