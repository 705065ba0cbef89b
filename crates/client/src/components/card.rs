use leptos::{component, view, Children, IntoView, MaybeSignal, SignalGet};

/// A titled panel
#[component]
pub fn Card(
    title: &'static str,
    #[prop(into)] description: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="card">
            <header class="card-header">
                <h2 class="card-title">{title}</h2>
                <p class="card-description">{move || description.get()}</p>
            </header>
            <div class="card-content">
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn Placeholder(text: &'static str) -> impl IntoView {
    view! { <p class="placeholder">{text}</p> }
}
