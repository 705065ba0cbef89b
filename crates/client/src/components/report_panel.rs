use leptos::{component, view, IntoView, ReadSignal, Signal, SignalWith};
use shared::{
    render::{report_description, ReportPanel},
    state::DashboardState,
};

use crate::components::{Card, Placeholder};

#[component]
pub fn ReportPanelView(state: ReadSignal<DashboardState>) -> impl IntoView {
    let description = Signal::derive(move || state.with(report_description));

    view! {
        <Card title="Training Report" description>
            { move || match state.with(ReportPanel::from_state) {
                ReportPanel::Published { published_at, html } => view! {
                    <div class="report">
                        <p class="published-banner">"📄 Published on: "{published_at}</p>
                        // Raw html in the markdown was escaped when rendering
                        <div class="prose" inner_html=html/>
                    </div>
                }.into_view(),
                panel => panel
                    .placeholder()
                    .map(|text| view! { <Placeholder text/> })
                    .into_view(),
            }}
        </Card>
    }
}
