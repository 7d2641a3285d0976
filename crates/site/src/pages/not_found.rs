use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="page">
            <h1>"404 - Page not found"</h1>
            <p>
                <A href="/">"Back to all calculators"</A>
            </p>
        </main>
    }
}
