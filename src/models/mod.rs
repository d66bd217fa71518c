pub mod event;
pub mod reservation;
pub mod session;
pub mod sheet;
pub mod user;

pub use event::*;
pub use reservation::*;
pub use session::*;
pub use sheet::*;
pub use user::*;
