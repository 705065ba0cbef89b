use leptos::{component, view, Callable, Callback, IntoView};
use shared::model::SupervisorUser;

#[component]
pub fn Header(user: SupervisorUser, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <header class="top-bar">
            <div>
                <h1>"Supervisor Dashboard"</h1>
                <p class="welcome">"Welcome, "{user.full_name}</p>
            </div>
            <button class="outline" on:click=move |_| on_logout.call(())>
                "Logout"
            </button>
        </header>
    }
}
