pub mod clock;
pub mod ledger;
pub mod owner;
pub mod projects;
pub mod timer;

pub use clock::{Clock, SystemClock};
pub use ledger::{Ledger, OVERTIME_THRESHOLD_HOURS};
pub use owner::Owner;
pub use projects::{DEFAULT_PROJECT, ProjectList};
pub use timer::{TickObserver, Timer};
