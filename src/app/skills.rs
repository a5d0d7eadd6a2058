use leptos::prelude::*;

use crate::content::{all_skills, skill_category, Skill, SKILL_CATEGORIES};

use super::{reveal::RevealSection, IconGlyph, SectionHeading};

const ACTIVE_TAB: &str = "bg-primary-500 text-white shadow-lg shadow-primary-500/30";
const INACTIVE_TAB: &str = "bg-gray-100 dark:bg-dark-card text-gray-700 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700";

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <div class="card p-4 group cursor-pointer hover:-translate-y-1 transition-transform">
            <div class="flex flex-col items-center text-center gap-3">
                <div class="p-3 rounded-xl bg-primary-500/10 text-primary-500 group-hover:bg-primary-500 group-hover:text-white transition-all duration-300">
                    <IconGlyph icon=skill.icon class="text-3xl" />
                </div>
                <span class="font-medium text-sm text-gray-900 dark:text-white">{skill.name}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let active = RwSignal::new(0usize);
    let category = move || skill_category(active.get());

    let tabs = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, category)| {
            view! {
                <button
                    class=move || {
                        let state = if active.get() == index { ACTIVE_TAB } else { INACTIVE_TAB };
                        format!("px-4 py-2 rounded-full text-sm font-medium transition-all {state}")
                    }
                    on:click=move |_| active.set(index)
                >
                    {category.title}
                </button>
            }
        })
        .collect_view();

    view! {
        <RevealSection id="skills">
            <SectionHeading
                title="My"
                highlight="Skills"
                subtitle="Technologies and tools I work with to bring ideas to life"
            />
            <div class="flex flex-wrap justify-center gap-2 mb-12">{tabs}</div>
            <div class="max-w-4xl mx-auto">
                {move || {
                    category()
                        .map(|category| {
                            view! {
                                <div class="text-center mb-8">
                                    <h3 class="text-xl font-semibold text-gray-900 dark:text-white mb-2">
                                        {category.title}
                                    </h3>
                                    <p class="text-gray-600 dark:text-gray-400">{category.description}</p>
                                </div>
                                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-4">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| view! { <SkillCard skill=*skill /> })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </div>
            <div class="mt-16">
                <h3 class="text-center text-lg font-semibold text-gray-900 dark:text-white mb-6">
                    "Tech Stack Overview"
                </h3>
                <div class="flex flex-wrap justify-center gap-2">
                    {all_skills()
                        .map(|skill| {
                            view! {
                                <span class="skill-tag">
                                    <IconGlyph icon=skill.icon />
                                    {skill.name}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}
