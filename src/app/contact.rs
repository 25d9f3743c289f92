use leptos::{either::Either, ev, prelude::*};

#[cfg(feature = "ssr")]
use crate::{
    config::SiteConfig,
    contact::{deliver, ContactError},
};
use crate::{
    contact::ContactForm,
    content::{Glyph, CONTACT_INFO, SOCIAL_LINKS},
};

use super::{
    about::SectionHeading,
    toast::{ToastKind, Toaster},
};

#[server]
pub async fn send_message_server(form: ContactForm) -> Result<(), ServerFnError> {
    use http::StatusCode;
    use leptos_axum::ResponseOptions;

    let config = use_context::<SiteConfig>()
        .ok_or_else(|| ServerFnError::new("site configuration missing"))?;
    deliver(config.relay.as_ref(), &form).await.map_err(|e| {
        if matches!(e, ContactError::MissingField(_) | ContactError::InvalidEmail) {
            if let Some(resp) = use_context::<ResponseOptions>() {
                resp.set_status(StatusCode::UNPROCESSABLE_ENTITY);
            }
        } else {
            tracing::warn!(error = %e, "contact message not sent");
        }
        ServerFnError::new(e)
    })
}

#[component]
pub fn Contact() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let form = RwSignal::new(ContactForm::default());
    let send = ServerAction::<SendMessageServer>::new();
    let pending = send.pending();

    Effect::watch(
        move || send.version().get(),
        move |_, _, _| match send.value().get_untracked() {
            Some(Ok(())) => {
                toaster.show(ToastKind::Success, "Message sent! I'll get back to you soon.");
                form.set(ContactForm::default());
            }
            Some(Err(e)) => {
                log::warn!("contact form failed: {e}");
                toaster.show(ToastKind::Error, "Failed to send message. Please try again.");
            }
            None => {}
        },
        false,
    );

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            toaster.show(ToastKind::Error, e.to_string());
            return;
        }
        send.dispatch(SendMessageServer { form: current });
    };

    let field = move |name: &'static str, label: &'static str, kind: &'static str| {
        let value = move || {
            form.with(|f| match name {
                "name" => f.name.clone(),
                "email" => f.email.clone(),
                "subject" => f.subject.clone(),
                _ => f.message.clone(),
            })
        };
        let set = move |ev: ev::Event| {
            let v = event_target_value(&ev);
            form.update(|f| match name {
                "name" => f.name = v,
                "email" => f.email = v,
                "subject" => f.subject = v,
                _ => f.message = v,
            });
        };
        let class = "w-full px-4 py-2 rounded-md border border-muted/30 bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-primary";
        view! {
            <label class="block">
                <span class="block font-mono text-sm text-muted mb-1">{label}</span>
                {if kind == "textarea" {
                    Either::Left(
                        view! { <textarea rows="5" class=class prop:value=value on:input=set /> },
                    )
                } else {
                    Either::Right(
                        view! { <input type=kind class=class prop:value=value on:input=set /> },
                    )
                }}
            </label>
        }
    };

    view! {
        <section id="contact" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="mx-auto max-w-6xl">
                <SectionHeading number="06" title="Get In Touch" />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div>
                        <p class="text-lg text-muted mb-8">
                            "Have a project in mind or just want to say hello? My inbox is always open."
                        </p>
                        <ul class="space-y-4 mb-8">
                            {CONTACT_INFO
                                .iter()
                                .map(|item| {
                                    let value = match item.href {
                                        Some(href) => {
                                            Either::Left(
                                                view! {
                                                    <a href=href class="hover:text-primary">
                                                        {item.value}
                                                    </a>
                                                },
                                            )
                                        }
                                        None => Either::Right(item.value),
                                    };
                                    view! {
                                        <li class="flex items-center gap-4">
                                            <i class=format!("{} text-primary text-xl", item.icon.glyph_class()) />
                                            <div>
                                                <div class="text-xs text-muted font-mono">{item.label}</div>
                                                {value}
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="flex gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="text-2xl text-muted hover:text-primary"
                                        >
                                            <i class=link.icon.glyph_class() />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <form on:submit=on_submit class="space-y-4" novalidate=true>
                        <div class="grid sm:grid-cols-2 gap-4">
                            {field("name", "Name", "text")}
                            {field("email", "Email", "email")}
                        </div>
                        {field("subject", "Subject", "text")}
                        {field("message", "Message", "textarea")}
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="w-full px-6 py-3 rounded-md bg-primary text-background font-medium hover:opacity-90 disabled:opacity-50 transition-opacity duration-200"
                        >
                            {move || if pending.get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
