pub mod aggregate;
pub mod view;

pub use aggregate::{Dependant, Family, Practitioner, Profile, ServiceUser};
pub use view::{nationalities, PractitionerInfo, ServiceUserRecord};
