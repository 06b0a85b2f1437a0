pub mod aggregate;
pub mod relocation;

pub use aggregate::{capacity_rooms, room_update_payload, CapacityRoom, CapacityQuery};
pub use relocation::{RelocateRequest, RelocationError, RelocationSelection};
