use leptos::{component, view, CollectView, IntoView, ReadSignal, SignalGet, SignalSet, WriteSignal};
use shared::render::Tab;

#[component]
pub fn TabBar(tab: ReadSignal<Tab>, set_tab: WriteSignal<Tab>) -> impl IntoView {
    view! {
        <nav class="tabs" role="tablist">
            { Tab::ALL.into_iter().map(|t| view! {
                <button
                    role="tab"
                    class:active=move || tab.get() == t
                    aria-selected=move || (tab.get() == t).to_string()
                    on:click=move |_| set_tab.set(t)
                >
                    { t.label() }
                </button>
            }).collect_view() }
        </nav>
    }
}
