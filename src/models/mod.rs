pub mod category;
pub mod entry;
pub mod summary;

pub use category::Category;
pub use entry::{EntryDraft, MidnightPolicy, TimeEntry};
pub use summary::Summary;
