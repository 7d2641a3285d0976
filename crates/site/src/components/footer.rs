use leptos::prelude::*;
use leptos_router::components::A;
use shared::CONFIG;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <p class="muted">{CONFIG.disclaimer}</p>
            <p>
                "© " {year} " " {CONFIG.name} " · "
                <A href="/">"calculators"</A>
                " · "
                <A href="/glossary">"glossary"</A>
            </p>
        </footer>
    }
}
