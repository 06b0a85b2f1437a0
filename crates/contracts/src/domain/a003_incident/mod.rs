pub mod aggregate;
pub mod view;

pub use aggregate::{Incident, ResolveIncidentRequest, ResolveStatus};
pub use view::IncidentRecord;
