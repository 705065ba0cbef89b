use leptos::{component, view, IntoView};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <small>{
                format!("Version: {}{}",
                    env!("CARGO_PKG_VERSION"),
                    option_env!("BUILD_TIME")
                        .map(|v| format!(" - {v}"))
                        .unwrap_or_default())
            }</small>
        </footer>
    }
}
