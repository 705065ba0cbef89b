use console_error_panic_hook::set_once as set_panic_hook;
use leptos::{mount_to_body, view, Callback};
use shared::{config::DashboardConfig, model::SupervisorUser, utils::tracing::configure_tracing_once};
use tracing::{error, info, warn};
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};
use web_sys::js_sys::Function;

mod components;
use components::App;

/// Mounts the supervisor dashboard into `<body>`
///
/// `on_logout` is called with no arguments when the Logout button is pressed.
/// `config_json` optionally overrides fields of [DashboardConfig]
#[wasm_bindgen]
pub fn start_client(full_name: String, on_logout: Function, config_json: Option<String>) {
    set_panic_hook();

    let parsed = DashboardConfig::parse(config_json.as_deref());
    let config = parsed.as_ref().cloned().unwrap_or_default();
    configure_tracing_once(config.max_level());
    if let Err(e) = parsed {
        warn!("Ignoring invalid dashboard config: {e}");
    }
    info!("Starting supervisor dashboard (api: {})", config.api_base);

    let user = SupervisorUser { full_name };

    mount_to_body(move || {
        let on_logout = Callback::new(move |_: ()| {
            if let Err(e) = on_logout.call0(&JsValue::NULL) {
                error!("Logout callback failed: {e:?}");
            }
        });

        view! { <App user on_logout config/> }
    });
}
