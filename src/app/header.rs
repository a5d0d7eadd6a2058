use leptos::prelude::*;

use crate::{
    content::{NAV_LINKS, PERSONAL_INFO},
    icons::Icon,
    theme::Theme,
};

use super::IconGlyph;

#[component]
pub fn Header(theme: Signal<Theme>, toggle_theme: Callback<()>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let nav_items = move || {
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <li>
                        <a
                            href=link.href()
                            on:click=move |_| set_menu_open(false)
                            class="px-3 py-2 rounded-md text-sm font-medium hover:text-primary-500 transition-colors"
                        >
                            {link.name}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class="sticky top-0 z-50 backdrop-blur bg-white/80 dark:bg-dark-bg/80 shadow">
            <nav class="container-custom flex items-center justify-between py-4">
                <a href="#home" class="text-2xl font-bold gradient-text">
                    {PERSONAL_INFO.name}
                </a>
                <ul class="hidden md:flex gap-1">{nav_items}</ul>
                <div class="flex items-center gap-2">
                    <button
                        class="p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-dark-card"
                        aria-label="Toggle theme"
                        on:click=move |_| toggle_theme.run(())
                    >
                        {move || {
                            let icon = match theme.get() {
                                Theme::Dark => Icon::Sun,
                                Theme::Light => Icon::Moon,
                            };
                            view! { <IconGlyph icon /> }
                        }}
                    </button>
                    <button
                        class="md:hidden p-2"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <ul class="md:hidden flex flex-col px-4 pb-4">{nav_items}</ul>
            </Show>
        </header>
    }
}
