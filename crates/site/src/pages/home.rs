use calculators::{Choice, registry};
use leptos::prelude::*;
use leptos_router::components::A;
use shared::CONFIG;

use crate::components::Section;

#[component]
pub fn HomePage() -> impl IntoView {
    let groups = registry::grouped()
        .into_iter()
        .map(|(category, calcs)| {
            view! {
                <Section id=category.key() title=category.label()>
                    <div class="calculator-list">
                        {calcs.into_iter().map(|calc| {
                            let info = calc.meta();
                            view! {
                                <div>
                                    <A href=format!("/calculators/{}", info.slug)>{info.name}</A>
                                    <span class="muted">" · " {info.description}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </Section>
            }
        })
        .collect_view();

    view! {
        <main class="page">
            <header class="masthead">
                <h1>{CONFIG.name}</h1>
                <div class="muted">{CONFIG.tagline}</div>
            </header>

            {groups}

            <Section id="resources" title="Resources">
                <div>
                    <A href="/glossary">"glossary"</A>
                </div>
                <div>
                    <a href=CONFIG.links.creator_portal target="_blank" rel="noopener noreferrer">
                        "creator portal ↗"
                    </a>
                </div>
                <div>
                    <a href=CONFIG.links.irs_self_employment target="_blank" rel="noopener noreferrer">
                        "self-employment tax ↗"
                    </a>
                </div>
            </Section>

            // Changelog
            <Section id="changelog" title="Changelog">
                {CONFIG.changelog.iter().map(|entry| view! {
                    <div>
                        <strong>{entry.date}</strong> "  " {entry.event}
                    </div>
                }).collect_view()}
            </Section>
        </main>
    }
}
