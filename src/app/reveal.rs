use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// A page section that fades in the first time it scrolls into view.
#[component]
pub fn RevealSection(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(el);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_revealed(true);
        }
    });

    view! {
        <section
            id=id
            node_ref=el
            class=move || {
                let state = if revealed.get() { "reveal reveal-visible" } else { "reveal" };
                format!("section {class} {state}")
            }
        >
            <div class="container-custom">{children()}</div>
        </section>
    }
}
