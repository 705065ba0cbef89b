use leptos::{
    component, create_rw_signal, create_signal, spawn_local, view, Callback, IntoView, SignalGet,
};
use shared::{
    api::HttpSupervisorApi,
    config::DashboardConfig,
    dashboard::Dashboard,
    model::{Session, SupervisorUser},
    render::Tab,
    state::DashboardState,
};

use crate::components::{
    AttendancePanelView, Footer, Header, ReportPanelView, SessionsPanelView, TabBar, ToastStack,
    Toaster,
};

#[component]
pub fn App(user: SupervisorUser, on_logout: Callback<()>, config: DashboardConfig) -> impl IntoView {
    let toaster = Toaster::new(&config);
    let state = create_rw_signal(DashboardState::default());
    let dashboard = Dashboard::new(HttpSupervisorApi::new(config.api_base.clone()), state, toaster);
    let (tab, set_tab) = create_signal(Tab::default());

    let mount = dashboard.clone();
    spawn_local(async move { mount.mount().await });

    let on_select = Callback::new(move |session: Session| {
        let dashboard = dashboard.clone();
        spawn_local(async move { dashboard.select(session).await });
    });

    let state = state.read_only();

    view! {
        <div class="dashboard">
            <Header user on_logout/>
            <main class="container">
                <TabBar tab set_tab/>
                { move || match tab.get() {
                    Tab::Sessions => view! { <SessionsPanelView state on_select/> }.into_view(),
                    Tab::Attendance => view! { <AttendancePanelView state/> }.into_view(),
                    Tab::Reports => view! { <ReportPanelView state/> }.into_view(),
                }}
            </main>
            <Footer/>
            <ToastStack toaster/>
        </div>
    }
}
