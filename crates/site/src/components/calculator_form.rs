use calculators::{DynCalculator, Field, FieldErrors, Form, Report};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

use super::ResultCard;

/// Pause before showing a result, so the loading state registers
const RESULT_DELAY_MS: u32 = 600;

/// Check if user prefers reduced motion
fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Form generated from a calculator's field metadata.
///
/// Validation runs on submit. Invalid input shows inline messages and never
/// reaches the formula.
#[component]
pub fn CalculatorForm(calc: &'static dyn DynCalculator) -> impl IntoView {
    let form = RwSignal::new(Form::new());
    let errors = RwSignal::new(FieldErrors::default());
    let report = RwSignal::new(None::<Report>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        report.set(None);

        match calc.evaluate(&form.get_untracked()) {
            Err(field_errors) => errors.set(field_errors),
            Ok(result) => {
                errors.set(FieldErrors::default());
                if prefers_reduced_motion() {
                    report.set(Some(result));
                    return;
                }
                loading.set(true);
                spawn_local(async move {
                    TimeoutFuture::new(RESULT_DELAY_MS).await;
                    report.set(Some(result));
                    loading.set(false);
                });
            }
        }
    };

    let on_reset = move |_| {
        form.set(Form::new());
        errors.set(FieldErrors::default());
        report.set(None);
    };

    let inputs = calc
        .meta()
        .fields
        .iter()
        .map(|field| view! { <FieldInput field=*field form=form errors=errors /> })
        .collect_view();

    view! {
        <form class="calculator-form" on:submit=on_submit novalidate>
            {inputs}
            <div class="actions">
                <button type="submit" disabled=move || loading.get()>"Calculate"</button>
                <button type="button" class="secondary" on:click=on_reset>"Reset"</button>
            </div>
        </form>

        {move || loading.get().then(|| view! { <div class="muted">"Calculating..."</div> })}
        {move || report.get().map(|report| view! { <ResultCard report=report /> })}
    }
}

/// One labelled input with its inline error
#[component]
fn FieldInput(field: Field, form: RwSignal<Form>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    let name = field.name();
    let current = move || form.with(|f| f.get(name).unwrap_or_default().to_string());
    let error = move || errors.with(|e| e.get(name).map(str::to_string));

    let control = match field {
        Field::Number(number) => view! {
            <input
                id=name
                type="number"
                inputmode="decimal"
                min=number.min.to_string()
                max=number.max.to_string()
                step=number.step().to_string()
                prop:value=current
                on:input=move |ev| form.update(|f| f.set(name, event_target_value(&ev)))
            />
            <small class="muted">{number.describe_range()}</small>
        }
        .into_any(),
        Field::Choice(choice) => {
            let options = choice
                .options()
                .into_iter()
                .map(|option| {
                    let selected = move || form.with(|f| f.get(name) == Some(option.key));
                    view! { <option value=option.key selected=selected>{option.label}</option> }
                })
                .collect_view();

            view! {
                <select id=name on:change=move |ev| form.update(|f| f.set(name, event_target_value(&ev)))>
                    <option value="" selected=move || current().is_empty()>
                        {format!("Select a {}", choice.label.to_lowercase())}
                    </option>
                    {options}
                </select>
            }
            .into_any()
        }
    };

    view! {
        <div class="field" class:invalid=move || error().is_some()>
            <label for=name>{field.label()}</label>
            {control}
            {move || error().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>
    }
}
