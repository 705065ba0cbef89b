mod app;
pub use app::*;

mod attendance_panel;
pub use attendance_panel::*;

mod card;
pub use card::*;

mod footer;
pub use footer::*;

mod header;
pub use header::*;

mod report_panel;
pub use report_panel::*;

mod sessions_panel;
pub use sessions_panel::*;

mod tabs;
pub use tabs::*;

mod toast;
pub use toast::*;
