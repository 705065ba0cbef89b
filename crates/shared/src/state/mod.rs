use std::{cell::RefCell, rc::Rc};

mod slot;
pub use slot::*;

mod dashboard_state;
pub use dashboard_state::*;

/// Somewhere a [DashboardState] lives
///
/// The browser uses a leptos signal so panels re-render on change. Anything
/// else can use `Rc<RefCell<_>>`
pub trait StateCell: Clone + 'static {
    /// Run `f` against the state. `None` if the state is gone (the owning
    /// component was unmounted)
    fn modify<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R>;
}

impl StateCell for Rc<RefCell<DashboardState>> {
    fn modify<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[cfg(feature = "wasm")]
impl StateCell for leptos::RwSignal<DashboardState> {
    fn modify<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> Option<R> {
        leptos::SignalUpdate::try_update(self, f)
    }
}
