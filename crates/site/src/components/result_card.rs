use calculators::Report;
use calculators::format::format_value;
use leptos::prelude::*;
use shared::CONFIG;

/// Headline value, range, rating badge, interpretation and metrics
#[component]
pub fn ResultCard(report: Report) -> impl IntoView {
    let summary = report.summary;
    let unit = summary.unit;

    let range = summary
        .min
        .zip(summary.max)
        .map(|(min, max)| format!("{} – {}", format_value(min, unit), format_value(max, unit)));

    let badge = summary.rating.zip(summary.rating_label).map(|(tag, label)| {
        view! { <span class=format!("badge rating-{tag}")>{label}</span> }
    });

    let metrics = summary
        .additional_metrics
        .iter()
        .map(|metric| {
            view! {
                <div class="metric">
                    <strong>{metric.label}</strong>
                    " "
                    {format_value(metric.value, metric.unit)}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="result-card">
            <div class="headline">
                <span class="value">{format_value(summary.value, unit)}</span>
                {badge}
            </div>
            {range.map(|range| view! { <div class="muted">"Range " {range}</div> })}
            <p>{summary.interpretation}</p>
            <div class="metrics">{metrics}</div>
            <p class="muted disclaimer">{CONFIG.disclaimer}</p>
        </div>
    }
}
