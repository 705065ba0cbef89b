mod session;
pub use session::*;

mod attendance;
pub use attendance::*;

mod report;
pub use report::*;

mod user;
pub use user::*;
