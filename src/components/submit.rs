//! Resource submission form.
//!
//! Fields are validated as a whole on submit. After the first attempt each
//! field is revalidated as it changes, so messages clear while the visitor
//! fixes them.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::classes;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{SUBMIT_ANCHOR, SUBMIT_DELAY_MS};
use crate::core::validation::{self, ValidationErrors};
use crate::models::{Category, ResourceSubmission, SubmissionField, Toast};
use crate::utils::pluralize;

stylance::import_crate_style!(css, "src/components/submit.module.css");

/// Presentation of one form field.
struct FieldLayout {
    field: SubmissionField,
    label: &'static str,
    placeholder: &'static str,
    hint: Option<&'static str>,
    input_type: &'static str,
    multiline: bool,
    /// Shares a row with its neighbour on wide screens.
    half: bool,
    /// Id of a `<datalist>` offering suggestions.
    suggestions: Option<&'static str>,
}

const CATEGORY_OPTIONS: &str = "submit-category-options";

const fn input(field: SubmissionField, label: &'static str, placeholder: &'static str) -> FieldLayout {
    FieldLayout {
        field,
        label,
        placeholder,
        hint: None,
        input_type: "text",
        multiline: false,
        half: false,
        suggestions: None,
    }
}

static RESOURCE_FIELDS: [FieldLayout; 8] = [
    input(SubmissionField::Name, "Resource Name *", "Coppell Community Center"),
    FieldLayout {
        suggestions: Some(CATEGORY_OPTIONS),
        ..input(
            SubmissionField::Category,
            "Category *",
            "e.g., Non-Profits, Health Services, Education",
        )
    },
    FieldLayout {
        hint: Some("Minimum 10 characters, maximum 500 characters"),
        multiline: true,
        ..input(
            SubmissionField::Description,
            "Description *",
            "Provide a brief description of the resource and its services...",
        )
    },
    input(SubmissionField::Address, "Address *", "123 Main St, Coppell, TX 75019"),
    FieldLayout {
        input_type: "tel",
        half: true,
        ..input(SubmissionField::Phone, "Phone Number *", "(972) 123-4567")
    },
    FieldLayout {
        input_type: "url",
        half: true,
        ..input(SubmissionField::Website, "Website *", "https://example.com")
    },
    input(SubmissionField::Hours, "Hours of Operation *", "Mon-Fri: 9AM-5PM"),
    FieldLayout {
        hint: Some("Separate multiple services with commas"),
        multiline: true,
        ..input(
            SubmissionField::Services,
            "Services Offered *",
            "List the main services offered (comma-separated)",
        )
    },
];

static SUBMITTER_FIELDS: [FieldLayout; 2] = [
    input(SubmissionField::SubmitterName, "Your Name *", "John Doe"),
    FieldLayout {
        hint: Some("We'll use this to contact you about your submission"),
        input_type: "email",
        ..input(SubmissionField::SubmitterEmail, "Your Email *", "john@example.com")
    },
];

#[component]
pub fn SubmitResourceForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let form = RwSignal::new(ResourceSubmission::default());
    let errors = RwSignal::new(ValidationErrors::default());
    let attempted = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        attempted.set(true);

        let submission = form.get_untracked();
        if let Err(failed) = validation::validate(&submission) {
            let count = failed.iter().count();
            log::debug!("submission rejected: {}", failed);
            errors.set(failed);
            ctx.notify(Toast::error("Please check the form").with_description(format!(
                "{} {} need attention.",
                count,
                pluralize(count, "field", "fields")
            )));
            return;
        }

        errors.set(ValidationErrors::default());
        submitting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            match serde_json::to_string(&submission.record()) {
                Ok(json) => log::info!("resource submitted: {}", json),
                Err(err) => log::warn!("resource submitted, payload not loggable: {}", err),
            }
            ctx.notify(Toast::success("Resource Submitted!").with_description(
                "Thank you for contributing to the Coppell community. \
                 We'll review your submission shortly.",
            ));
            form.try_set(ResourceSubmission::default());
            attempted.try_set(false);
            submitting.try_set(false);
        });
    };

    let field_view = move |layout: &'static FieldLayout| {
        view! { <FormField layout=layout form=form errors=errors attempted=attempted /> }
    };

    view! {
        <section id=SUBMIT_ANCHOR class=css::section>
            <div class=css::glow></div>

            <div class=css::container>
                <div class=css::header>
                    <span class=css::badge>"Submit a Resource"</span>
                    <h2 class=css::heading>
                        <span class=css::headingPlain>"Help Us "</span>
                        <span class=css::headingAccent>"Grow Together"</span>
                    </h2>
                    <p class=css::subtitle>
                        "Know of a valuable community resource? Share it with us to help \
                         strengthen our community network."
                    </p>
                </div>

                <div class=css::card>
                    <div class=css::cardHeader>
                        <h3 class=css::cardTitle>"Resource Information"</h3>
                        <p class=css::cardDescription>
                            "Fill out the form below to submit a new community resource for review"
                        </p>
                    </div>

                    <form class=css::form novalidate=true on:submit=on_submit>
                        <fieldset class=css::group>
                            <legend class=css::groupTitle>"Resource Details"</legend>
                            {RESOURCE_FIELDS.iter().map(field_view).collect_view()}
                            <datalist id=CATEGORY_OPTIONS>
                                {Category::ALL
                                    .into_iter()
                                    .map(|c| view! { <option value=c.label()></option> })
                                    .collect_view()}
                            </datalist>
                        </fieldset>

                        <fieldset class=format!("{} {}", css::group, css::groupDivided)>
                            <legend class=css::groupTitle>"Your Information"</legend>
                            {SUBMITTER_FIELDS.iter().map(field_view).collect_view()}
                        </fieldset>

                        <button
                            type="submit"
                            class=css::submit
                            disabled=move || submitting.get()
                        >
                            {move || {
                                if submitting.get() {
                                    "Submitting...".into_any()
                                } else {
                                    view! {
                                        <span class=css::submitIcon><Icon icon=ic::SEND /></span>
                                        "Submit Resource"
                                    }
                                        .into_any()
                                }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

/// Labelled input (or textarea) bound to one submission field.
#[component]
fn FormField(
    layout: &'static FieldLayout,
    form: RwSignal<ResourceSubmission>,
    errors: RwSignal<ValidationErrors>,
    attempted: RwSignal<bool>,
) -> impl IntoView {
    let field = layout.field;
    let id = format!("submit-{}", field.key());
    let value = move || form.with(|f| f.get(field).to_string());
    let message = move || errors.with(|e| e.get(field).map(str::to_string));

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.set(field, text));
        if attempted.get_untracked() {
            let result = form.with_untracked(|f| validation::validate_field(f, field));
            errors.update(|e| e.update_field(field, result));
        }
    };

    let control = if layout.multiline {
        view! {
            <textarea
                id=id.clone()
                name=field.key()
                class=format!("{} {}", css::control, css::multiline)
                placeholder=layout.placeholder
                aria-invalid=move || message().is_some().to_string()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                name=field.key()
                type=layout.input_type
                list=layout.suggestions
                class=css::control
                placeholder=layout.placeholder
                aria-invalid=move || message().is_some().to_string()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class=classes(css::field, css::half, layout.half)>
            <label for=id class=move || classes(css::label, css::labelError, message().is_some())>
                {layout.label}
            </label>
            {control}
            {layout.hint.map(|hint| view! { <p class=css::hint>{hint}</p> })}
            {move || message().map(|m| view! { <p class=css::error role="alert">{m}</p> })}
        </div>
    }
}
