use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::lead_form::{Field, FieldErrors, LeadForm, CONFIRMATION};

/// Stand-in for the network round trip; there is no submission endpoint.
const SUBMIT_DELAY_MS: u32 = 1_000;

#[derive(Properties, PartialEq)]
struct FieldProps {
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
    error: Option<&'static str>,
    oninput: Callback<(Field, String)>,
}

#[function_component(FormField)]
fn form_field(props: &FieldProps) -> Html {
    let oninput = {
        let field = props.field;
        let on_change = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    html! {
        <div class="lead-field">
            <label for={props.field.id()}>{props.label}</label>
            <input
                type={props.input_type}
                id={props.field.id()}
                required={true}
                aria-required="true"
                value={props.value.clone()}
                oninput={oninput}
                placeholder={props.placeholder}
                class={classes!(props.error.is_some().then(|| "invalid"))}
            />
            if let Some(error) = props.error {
                <span class="field-error" role="alert">{error}</span>
            }
        </div>
    }
}

#[function_component(LeadFormCard)]
pub fn lead_form_card() -> Html {
    let form = use_state(LeadForm::default);
    let errors = use_state(FieldErrors::default);
    let is_submitting = use_state(|| false);
    let confirmation = use_state(|| None::<&'static str>);

    let on_field_input = {
        let form = form.clone();
        let errors = errors.clone();
        let confirmation = confirmation.clone();
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);

            let mut remaining = (*errors).clone();
            if remaining.clear(field) {
                errors.set(remaining);
            }
            confirmation.set(None);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let confirmation = confirmation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let found = form.validate();
            let valid = found.is_empty();
            errors.set(found);
            if !valid {
                return;
            }

            is_submitting.set(true);
            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let confirmation = confirmation.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                info!("Consultation request accepted");
                confirmation.set(Some(CONFIRMATION));
                form.set(LeadForm::default());
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="lead-card">
            <style>{LEAD_STYLES}</style>
            <h2>{"Consultation Request"}</h2>
            <form onsubmit={onsubmit} novalidate={true}>
                <FormField
                    field={Field::FullName}
                    label="Full Name"
                    input_type="text"
                    placeholder="John Doe"
                    value={form.full_name.clone()}
                    error={errors.full_name}
                    oninput={on_field_input.clone()}
                />
                <FormField
                    field={Field::Email}
                    label="Contact Email"
                    input_type="email"
                    placeholder="john@company.com"
                    value={form.email.clone()}
                    error={errors.email}
                    oninput={on_field_input.clone()}
                />
                <FormField
                    field={Field::Phone}
                    label="Phone"
                    input_type="tel"
                    placeholder="+1 000 000 000"
                    value={form.phone.clone()}
                    error={errors.phone}
                    oninput={on_field_input}
                />
                <button
                    type="submit"
                    disabled={*is_submitting}
                    class={classes!("lead-submit", (*is_submitting).then(|| "sending"))}
                >
                    { if *is_submitting { "Sending..." } else { "Book a Call" } }
                </button>
                if let Some(message) = *confirmation {
                    <div class="success-message" role="status">{message}</div>
                }
            </form>
        </div>
    }
}

const LEAD_STYLES: &str = r#"
.lead-card {
    height: 100%;
    padding: 2.5rem;
    background: #fff;
    border: 1px solid rgba(0, 0, 0, 0.05);
    border-radius: 16px;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}
.lead-card h2 {
    margin: 0 0 2rem;
    text-align: center;
    font-family: var(--font-display);
    font-size: 1.875rem;
    text-transform: uppercase;
}
.lead-card form { display: flex; flex-direction: column; gap: 1.5rem; }
.lead-field { display: flex; flex-direction: column; gap: 0.5rem; }
.lead-field label {
    padding-left: 0.25rem;
    font-family: var(--font-mono);
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: rgba(0, 0, 0, 0.4);
}
.lead-field input {
    padding: 0.75rem 1rem;
    border: none;
    border-bottom: 1px solid rgba(0, 0, 0, 0.2);
    background: transparent;
    outline: none;
    transition: border-color 0.2s;
}
.lead-field input:focus { border-color: var(--brand-accent); }
.lead-field input.invalid { border-color: #ef4444; }
.field-error { padding-left: 0.25rem; font-family: var(--font-mono); font-size: 10px; color: #ef4444; }
.lead-submit {
    width: 100%;
    margin-top: 1rem;
    padding: 1rem 0;
    border: 2px solid var(--brand-dark);
    background: transparent;
    color: var(--brand-dark);
    font-family: var(--font-mono);
    font-weight: 700;
    font-size: 14px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    cursor: pointer;
    transition: all 0.2s;
}
.lead-submit:hover { background: var(--brand-dark); color: #fff; transform: translateY(-4px); }
.lead-submit.sending { border-color: #d1d5db; color: #9ca3af; cursor: not-allowed; }
.success-message { font-family: var(--font-mono); font-size: 12px; color: #16a34a; text-align: center; }
"#;
