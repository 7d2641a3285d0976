use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Footer;
use crate::pages::{CalculatorPage, GlossaryPage, HomePage, NotFoundPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/calculators/:slug") view=CalculatorPage />
                <Route path=path!("/glossary") view=GlossaryPage />
            </Routes>
            <Footer />
        </Router>
    }
}
