use leptos::prelude::*;

use crate::components::Section;

/// Term and definition, in display order
const TERMS: &[(&str, &str)] = &[
    ("RPM", "Revenue per 1,000 views. What a creator earns for every thousand views of monetized content."),
    ("CPM", "Cost per 1,000 impressions. What an advertiser pays to show an ad a thousand times."),
    ("CPV", "Cost per view. Ad spend divided by video views, shown in cents."),
    ("CPC", "Cost per click. Ad spend divided by clicks."),
    ("CPA", "Cost per acquisition. Ad spend divided by conversions."),
    ("CAC", "Customer acquisition cost. Total marketing spend divided by new customers."),
    ("LTV", "Customer lifetime value. Gross profit a customer brings in before they churn."),
    ("ROI", "Return on investment. Profit as a percentage of what was spent."),
    ("Coin", "Virtual currency viewers buy and send as gifts. Has a fixed dollar value."),
    ("Diamond", "Virtual currency creators receive for gifts. Can be withdrawn at a fixed rate."),
    ("Engagement rate", "Likes, comments and shares per post as a percentage of followers."),
    ("Completion rate", "Share of views that watched a video to the end."),
    ("Follower tier", "Audience size band (nano, micro, mid, macro, mega) that scales sponsorship rates."),
    ("Niche multiplier", "Per-niche scale applied to base rates, reflecting how much advertisers pay in each niche."),
    ("Break-even", "Sales needed for profit per sale to cover the ad spend."),
    ("Self-employment tax", "Social Security and Medicare tax paid by creators on net self-employment income."),
    ("Effective tax rate", "Total tax as a percentage of gross income."),
    ("Marginal rate", "Federal rate applied to the last dollar of taxable income."),
];

#[component]
pub fn GlossaryPage() -> impl IntoView {
    view! {
        <main class="page">
            <h1>"Glossary"</h1>
            <Section id="terms" title="Terms">
                <dl>
                    {TERMS.iter().map(|(term, definition)| view! {
                        <dt><strong>{*term}</strong></dt>
                        <dd>{*definition}</dd>
                    }).collect_view()}
                </dl>
            </Section>
        </main>
    }
}
