use calculators::{Choice, registry};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::NotFoundPage;
use crate::components::CalculatorForm;

/// One calculator, looked up by the `:slug` route segment
#[component]
pub fn CalculatorPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    move || match registry::find(&slug()) {
        Some(calc) => {
            let info = calc.meta();
            view! {
                <main class="page">
                    <nav class="muted">
                        <A href="/">"calculators"</A>
                        " / "
                        {info.category.label()}
                    </nav>
                    <h1>{info.name}</h1>
                    <p class="muted">{info.description}</p>
                    <CalculatorForm calc=calc />
                </main>
            }
            .into_any()
        }
        None => view! { <NotFoundPage /> }.into_any(),
    }
}
