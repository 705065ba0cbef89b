use leptos::{component, view, CollectView, IntoView, ReadSignal, Signal, SignalWith};
use shared::{
    model::AttendanceStatus,
    render::{attendance_description, AttendancePanel, AttendanceRow},
    state::DashboardState,
};

use crate::components::{Card, Placeholder};

#[component]
pub fn AttendancePanelView(state: ReadSignal<DashboardState>) -> impl IntoView {
    let description = Signal::derive(move || state.with(attendance_description));

    view! {
        <Card title="Staff Attendance" description>
            { move || match state.with(AttendancePanel::from_state) {
                AttendancePanel::Rows(rows) => view! { <AttendanceTable rows/> }.into_view(),
                panel => panel
                    .placeholder()
                    .map(|text| view! { <Placeholder text/> })
                    .into_view(),
            }}
        </Card>
    }
}

#[component]
fn AttendanceTable(rows: Vec<AttendanceRow>) -> impl IntoView {
    view! {
        <div class="table-scroll">
            <table class="attendance">
                <thead>
                    <tr>
                        <th>"Participant"</th>
                        <th>"Clock In"</th>
                        <th>"Clock Out"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    { rows.into_iter().map(|row| view! {
                        <tr>
                            <td>
                                <p class="participant-name">{row.participant_name}</p>
                                <p class="participant-email">{row.participant_email}</p>
                            </td>
                            <td>{row.clock_in}</td>
                            <td>{row.clock_out}</td>
                            <td><StatusBadge status=row.status/></td>
                        </tr>
                    }).collect_view() }
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn StatusBadge(status: AttendanceStatus) -> impl IntoView {
    let class = match status {
        AttendanceStatus::Complete => "badge complete",
        AttendanceStatus::InProgress => "badge in-progress",
    };
    view! {
        <span class=class>
            { (status == AttendanceStatus::Complete).then_some("✓ ") }
            { status.label() }
        </span>
    }
}
