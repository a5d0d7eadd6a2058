use std::sync::Arc;

use leptos::{prelude::*, task::spawn_local};

use crate::{
    contact::{
        ContactForm, EmailJsClient, EmailJsConfig, FormField, FormSnapshot, SubmissionStatus,
    },
    content::{PERSONAL_INFO, SOCIAL_LINKS},
    icons::Icon,
};

use super::{reveal::RevealSection, IconGlyph, SectionHeading};

type SiteContactForm = ContactForm<EmailJsClient>;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-dark-card focus:ring-2 focus:ring-primary-500 focus:border-transparent transition-all";

#[component]
fn FormInput(
    form: Arc<SiteContactForm>,
    snapshot: RwSignal<FormSnapshot>,
    field: FormField,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-1">
                {label}
            </label>
            <input
                type=input_type
                id=id
                name=id
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || snapshot.with(|s| s.fields.get(field).to_string())
                on:input=move |ev| form.update_field(field, event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn FormTextArea(
    form: Arc<SiteContactForm>,
    snapshot: RwSignal<FormSnapshot>,
    field: FormField,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-1">
                {label}
            </label>
            <textarea
                id=id
                name=id
                rows=5
                class=format!("{INPUT_CLASS} resize-none")
                placeholder=placeholder
                prop:value=move || snapshot.with(|s| s.fields.get(field).to_string())
                on:input=move |ev| form.update_field(field, event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
fn ContactFormCard(form: Arc<SiteContactForm>, snapshot: RwSignal<FormSnapshot>) -> impl IntoView {
    let is_submitting = move || snapshot.with(|s| s.status == SubmissionStatus::Submitting);

    let on_submit = {
        let form = form.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let form = form.clone();
            spawn_local(async move {
                form.submit().await;
            });
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-4" novalidate=true>
            <div class="grid md:grid-cols-2 gap-4">
                <FormInput
                    form=form.clone()
                    snapshot
                    field=FormField::Name
                    id="name"
                    label="Name"
                    placeholder="Your name"
                />
                <FormInput
                    form=form.clone()
                    snapshot
                    field=FormField::Email
                    id="email"
                    label="Email"
                    placeholder="your@email.com"
                    input_type="email"
                />
            </div>
            <FormInput
                form=form.clone()
                snapshot
                field=FormField::Subject
                id="title"
                label="Subject"
                placeholder="What's this about?"
            />
            <FormTextArea
                form
                snapshot
                field=FormField::Message
                id="message"
                label="Message"
                placeholder="Your message..."
            />
            <button
                type="submit"
                disabled=is_submitting
                class="w-full btn-primary flex items-center justify-center gap-2 disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {move || {
                    if is_submitting() {
                        view! {
                            <span class="animate-spin rounded-full h-5 w-5 border-2 border-white border-t-transparent"></span>
                            "Sending..."
                        }
                            .into_any()
                    } else {
                        view! {
                            <IconGlyph icon=Icon::Send />
                            "Send Message"
                        }
                            .into_any()
                    }
                }}
            </button>
            {move || {
                snapshot
                    .with(|s| s.error)
                    .map(|reason| {
                        view! {
                            <p class="text-red-500 text-center font-medium" role="alert">
                                {reason.to_string()}
                            </p>
                        }
                    })
            }}
            {move || {
                let status = snapshot.with(|s| s.status);
                status
                    .message()
                    .map(|text| {
                        let class = if status == SubmissionStatus::Success {
                            "text-green-500 text-center font-medium"
                        } else {
                            "text-red-500 text-center font-medium"
                        };
                        view! { <p class=class>{text}</p> }
                    })
            }}
        </form>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="card p-6 md:p-8">
            <h3 class="text-xl font-bold mb-6">"Contact Information"</h3>
            <div class="space-y-4">
                <a
                    href=PERSONAL_INFO.mailto()
                    class="flex items-center gap-4 p-3 rounded-lg hover:bg-gray-100 dark:hover:bg-dark-card transition-colors"
                >
                    <div class="p-3 rounded-lg bg-primary-500/10 text-primary-500">
                        <IconGlyph icon=Icon::Email />
                    </div>
                    <div>
                        <p class="text-sm text-gray-500 dark:text-gray-400">"Email"</p>
                        <p class="font-medium">{PERSONAL_INFO.email}</p>
                    </div>
                </a>
                <a
                    href=PERSONAL_INFO.whatsapp_href()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center gap-4 p-3 rounded-lg hover:bg-gray-100 dark:hover:bg-dark-card transition-colors"
                >
                    <div class="p-3 rounded-lg bg-primary-500/10 text-primary-500">
                        <IconGlyph icon=Icon::Phone />
                    </div>
                    <div>
                        <p class="text-sm text-gray-500 dark:text-gray-400">"Phone"</p>
                        <p class="font-medium">{PERSONAL_INFO.phone}</p>
                    </div>
                </a>
                <div class="flex items-center gap-4 p-3 rounded-lg">
                    <div class="p-3 rounded-lg bg-primary-500/10 text-primary-500">
                        <IconGlyph icon=Icon::Location />
                    </div>
                    <div>
                        <p class="text-sm text-gray-500 dark:text-gray-400">"Location"</p>
                        <p class="font-medium">{PERSONAL_INFO.location}</p>
                    </div>
                </div>
            </div>
        </div>
        <div class="card p-6 md:p-8">
            <h3 class="text-xl font-bold mb-6">"Connect With Me"</h3>
            <div class="flex gap-4">
                {SOCIAL_LINKS
                    .iter()
                    .map(|social| {
                        view! {
                            <a
                                href=social.href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=social.label
                                class="flex-1 flex flex-col items-center gap-2 p-4 rounded-lg bg-gray-100 dark:bg-dark-card hover:bg-primary-500 hover:text-white transition-all"
                            >
                                <IconGlyph icon=social.icon class="text-2xl" />
                                <span class="text-sm font-medium">{social.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
                <a
                    href=PERSONAL_INFO.mailto()
                    aria-label="Email"
                    class="flex-1 flex flex-col items-center gap-2 p-4 rounded-lg bg-gray-100 dark:bg-dark-card hover:bg-primary-500 hover:text-white transition-all"
                >
                    <IconGlyph icon=Icon::Email class="text-2xl" />
                    <span class="text-sm font-medium">"Email"</span>
                </a>
            </div>
        </div>
        <div class="p-6 rounded-xl bg-gradient-to-br from-primary-500/10 to-accent-purple/10 border border-primary-500/20">
            <p class="font-semibold mb-3">"Available for opportunities"</p>
            <p class="text-sm text-gray-600 dark:text-gray-400">
                "I'm currently looking for internship opportunities and freelance projects. Feel free to reach out!"
            </p>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let snapshot = RwSignal::new(FormSnapshot::default());
    let form = match EmailJsConfig::from_build_env() {
        Ok(config) => Some(Arc::new(
            ContactForm::new(config, EmailJsClient::new()).with_observer(move |s| snapshot.set(s)),
        )),
        Err(err) => {
            log::warn!("contact form disabled: {err}");
            None
        }
    };

    view! {
        <RevealSection id="contact">
            <SectionHeading
                title="Get In"
                highlight="Touch"
                subtitle="Have a project in mind or want to collaborate? Let's talk!"
            />
            <div class="grid lg:grid-cols-2 gap-8 max-w-6xl mx-auto">
                <div class="card p-6 md:p-8">
                    <h3 class="text-xl font-bold mb-6">"Send Me a Message"</h3>
                    {match form {
                        Some(form) => view! { <ContactFormCard form snapshot /> }.into_any(),
                        None => {
                            view! {
                                <p class="text-gray-600 dark:text-gray-400">
                                    "The contact form is unavailable right now. Please email me at "
                                    <a href=PERSONAL_INFO.mailto() class="text-primary-500">
                                        {PERSONAL_INFO.email}
                                    </a> " instead."
                                </p>
                            }
                                .into_any()
                        }
                    }}
                </div>
                <div class="space-y-6">
                    <ContactInfo />
                </div>
            </div>
        </RevealSection>
    }
}
