mod delivery;
mod form;
mod inbox;
mod session;
mod status_check;
mod types;
mod workflow;

pub use delivery::*;
pub use form::*;
pub use inbox::*;
pub use session::*;
pub use status_check::*;
pub use types::*;
pub use workflow::*;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
