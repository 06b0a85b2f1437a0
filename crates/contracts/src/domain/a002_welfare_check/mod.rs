pub mod aggregate;
pub mod view;

pub use aggregate::{Assessment, WelfareCheck, WelfareCheckDetail};
pub use view::WelfareRecord;
