use crate::backend::{Services, submit_contact_form};
use crate::contact::ContactForm;
use crate::theme::Palette;
use crate::types::LicenseType;
use dioxus::prelude::*;

#[component]
pub fn ContactSection(palette: Palette) -> Element {
    let services = use_context::<Services>();
    let mut form = use_signal(ContactForm::default);
    let current = form();
    let field = palette.input;

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        let snapshot = form();
        let submitter = services.contact.clone();
        spawn(async move {
            match submit_contact_form(submitter.as_ref(), &snapshot).await {
                Ok(ack) => {
                    tracing::info!(reference = ?ack.reference, "contact form delivered");
                    form.set(ContactForm::default());
                }
                Err(err) => tracing::warn!(%err, "contact form not delivered"),
            }
        });
    };

    rsx! {
        section { class: format_args!("band {}", palette.section),
            h2 { "Get in Touch" }
            form { class: "contact-form", onsubmit: on_submit,
                input {
                    r#type: "text", placeholder: "Name", required: true, class: field,
                    value: "{current.name}",
                    oninput: move |ev| form.with_mut(|f| f.name = ev.value()),
                }
                input {
                    r#type: "email", placeholder: "Email", required: true, class: field,
                    value: "{current.email}",
                    oninput: move |ev| form.with_mut(|f| f.email = ev.value()),
                }
                input {
                    r#type: "text", placeholder: "Company", class: field,
                    value: "{current.company}",
                    oninput: move |ev| form.with_mut(|f| f.company = ev.value()),
                }
                select {
                    required: true, class: field,
                    value: current.license_value(),
                    onchange: move |ev| {
                        if let Err(err) = form.with_mut(|f| f.set_license_type(&ev.value())) {
                            tracing::warn!(%err, "license selection ignored");
                        }
                    },
                    option { value: "", "Select License Type" }
                    for kind in LicenseType::ALL {
                        option { key: "{kind.value()}", value: kind.value(), "{kind.label()}" }
                    }
                }
                textarea {
                    placeholder: "Your Message", required: true, class: field,
                    value: "{current.message}",
                    oninput: move |ev| form.with_mut(|f| f.message = ev.value()),
                }
                button { class: "btn-primary", r#type: "submit", "Submit" }
            }
        }
    }
}
