use leptos::{component, view, Callable, Callback, CollectView, IntoView, ReadSignal, SignalWith};
use shared::{
    render::{SessionCard, SessionsPanel},
    state::DashboardState,
};

use crate::components::{Card, Placeholder};

#[component]
pub fn SessionsPanelView(
    state: ReadSignal<DashboardState>,
    on_select: Callback<shared::model::Session>,
) -> impl IntoView {
    view! {
        <Card title="My Training Sessions" description="Training sessions for your company staff">
            { move || match state.with(SessionsPanel::from_state) {
                SessionsPanel::Cards(cards) => view! {
                    <div class="session-list">
                        { cards
                            .into_iter()
                            .map(|card| view! { <SessionCardView card on_select/> })
                            .collect_view()
                        }
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

#[component]
fn SessionCardView(card: SessionCard, on_select: Callback<shared::model::Session>) -> impl IntoView {
    let SessionCard { session, start_date, selected } = card;
    let class = if selected { "session-card selected" } else { "session-card" };
    let name = session.name.clone();
    let location = session.location.clone();

    view! {
        <article class=class on:click=move |_| on_select.call(session.clone())>
            <h3>{name}</h3>
            <div class="session-meta">
                <span>"📍 "{location}</span>
                <span>"📅 "{start_date}</span>
            </div>
        </article>
    }
}
