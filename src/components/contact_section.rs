//! Contact Section
//!
//! Contact details plus a message form that hands off to the visitor's
//! mail client.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use super::reveal_section::{RevealSection, SectionHeading};
use super::ui::{Button, ButtonVariant, Card, CardContent};
use crate::contact::{mailto_href, ContactFormError, ContactMessage};
use crate::content::PROFILE;
use crate::reveal::reveal_class;

fn open_mail_client(href: &str) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().set_href(href) {
        log::warn!("[CONTACT] could not open mail client: {:?}", e);
    }
}

/// Message form
#[component]
fn ContactForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal(None::<ContactFormError>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let msg = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        match msg.validate() {
            Ok(()) => {
                set_error.set(None);
                open_mail_client(&mailto_href(PROFILE.email, &msg));
            }
            Err(e) => {
                log::debug!("[CONTACT] rejected form: {}", e);
                set_error.set(Some(e));
            }
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit novalidate=true>
            <label class="form-field">
                <span>"Name"</span>
                <input
                    type="text"
                    name="name"
                    autocomplete="name"
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span>"Email"</span>
                <input
                    type="email"
                    name="email"
                    autocomplete="email"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span>"Message"</span>
                <textarea
                    name="message"
                    rows="5"
                    prop:value=message
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
            </label>
            {move || error.get().map(|e| view! { <p class="form-error" role="alert">{e.to_string()}</p> })}
            <Button variant=ButtonVariant::Primary submit=true class="contact-submit">
                <Icon kind=IconKind::Send />
                "Send message"
            </Button>
        </form>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <RevealSection id="contact" class="contact-section" let:visible>
            <div class="container">
                <div class=move || reveal_class(visible.get(), "reveal reveal-hidden", "reveal reveal-shown")>
                    <SectionHeading
                        title="Let's"
                        accent="Talk"
                        description="Have a project in mind or just want to say hello? My inbox is always open."
                    />
                    <div class="contact-grid">
                        <Card class="contact-card">
                            <CardContent>
                                <ul class="contact-details">
                                    <li>
                                        <Icon kind=IconKind::Mail />
                                        <a href=format!("mailto:{}", PROFILE.email)>{PROFILE.email}</a>
                                    </li>
                                    <li>
                                        <Icon kind=IconKind::MapPin />
                                        <span>{PROFILE.location}</span>
                                    </li>
                                </ul>
                                <div class="social-links">
                                    {PROFILE
                                        .socials
                                        .iter()
                                        .map(|s| {
                                            view! {
                                                <a href=s.url class="social-link" target="_blank" rel="noopener noreferrer">
                                                    {s.label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </CardContent>
                        </Card>
                        <Card class="contact-card">
                            <CardContent>
                                <ContactForm />
                            </CardContent>
                        </Card>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
