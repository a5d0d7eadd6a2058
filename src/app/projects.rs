use leptos::prelude::*;

use crate::{
    content::{Project, PROJECTS},
    icons::Icon,
};

use super::{reveal::RevealSection, IconGlyph, SectionHeading};

#[component]
fn ProjectCard(project: Project, expanded: RwSignal<Option<&'static str>>) -> impl IntoView {
    let is_open = move || expanded.get() == Some(project.id);
    let toggle = move |_| {
        expanded.update(|current| {
            *current = if *current == Some(project.id) {
                None
            } else {
                Some(project.id)
            };
        })
    };
    let (tags, hidden_tags) = project.visible_tech();

    view! {
        <article class="card overflow-hidden flex flex-col">
            <div class="relative">
                <img src=project.image alt=project.title class="w-full h-48 object-cover" />
                <span class=format!(
                    "absolute top-3 right-3 px-3 py-1 text-xs font-semibold rounded-full border {}",
                    project.status.badge_class(),
                )>{project.status.label()}</span>
            </div>
            <div class="p-6 flex flex-col flex-grow">
                <div class="flex items-start justify-between gap-2 mb-2">
                    <h3 class="text-xl font-bold">{project.title}</h3>
                    <span class="text-sm text-gray-500 dark:text-gray-400 shrink-0">
                        {project.date}
                    </span>
                </div>
                <p class="text-gray-600 dark:text-gray-400 mb-4">{project.description}</p>
                <button
                    class="text-sm text-primary-500 font-medium text-left mb-4"
                    aria-expanded=move || is_open().to_string()
                    on:click=toggle
                >
                    {move || if is_open() { "Hide details" } else { "Show details" }}
                </button>
                <Show when=is_open>
                    <ul class="space-y-2 mb-4 list-disc pl-5 text-sm text-gray-600 dark:text-gray-400">
                        {project
                            .features
                            .iter()
                            .map(|feature| view! { <li>{*feature}</li> })
                            .collect_view()}
                    </ul>
                </Show>
                <div class="flex flex-wrap gap-2 mb-6">
                    {tags.iter().map(|tech| view! { <span class="tag">{*tech}</span> }).collect_view()}
                    {(hidden_tags > 0)
                        .then(|| view! { <span class="tag">{format!("+{hidden_tags}")}</span> })}
                </div>
                <div class="flex gap-3 mt-auto">
                    {project
                        .live_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn-primary flex items-center gap-2"
                                >
                                    <IconGlyph icon=Icon::ExternalLink />
                                    "Live Demo"
                                </a>
                            }
                        })}
                    {project
                        .code_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn-secondary flex items-center gap-2"
                                >
                                    <IconGlyph icon=Icon::Github />
                                    "Code"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    // only one card shows its feature list at a time
    let expanded = RwSignal::new(None::<&'static str>);

    view! {
        <RevealSection id="projects" class="bg-gray-50 dark:bg-dark-bg-secondary">
            <SectionHeading
                title="Featured"
                highlight="Projects"
                subtitle="Some of the things I've built"
            />
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project=*project expanded /> })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}
