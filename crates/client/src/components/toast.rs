use std::{collections::VecDeque, time::Duration};

use leptos::{
    component, create_rw_signal, set_timeout, store_value, view, CollectView, IntoView, RwSignal,
    SignalGet, SignalUpdate, StoredValue,
};
use shared::{
    config::DashboardConfig,
    notice::{push_visible, Notice, NoticeLevel, NoticeSink},
};

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// The toast stack, fed by the dashboard as a [NoticeSink]
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<VecDeque<Toast>>,
    next_id: StoredValue<u64>,
    info_duration: Duration,
    error_duration: Duration,
}

impl Toaster {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            toasts: create_rw_signal(VecDeque::new()),
            next_id: store_value(0),
            info_duration: config.toast_duration(NoticeLevel::Info),
            error_duration: config.toast_duration(NoticeLevel::Error),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl NoticeSink for Toaster {
    fn notify(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let dismiss_after = match notice.level {
            NoticeLevel::Error => self.error_duration,
            NoticeLevel::Info => self.info_duration,
        };

        self.toasts.update(|toasts| push_visible(toasts, Toast { id, notice }));

        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), dismiss_after);
    }
}

#[component]
pub fn ToastStack(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toasts">
            { move || toaster.toasts.get()
                .into_iter()
                .map(|toast| {
                    let id = toast.id;
                    let class = match toast.notice.level {
                        NoticeLevel::Error => "toast error",
                        NoticeLevel::Info => "toast info",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| toaster.dismiss(id)>
                            { toast.notice.message }
                        </div>
                    }
                })
                .collect_view()
            }
        </div>
    }
}
