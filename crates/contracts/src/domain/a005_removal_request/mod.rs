pub mod aggregate;
pub mod requests;
pub mod transfer_selection;
pub mod view;

pub use aggregate::{RemovalKind, RemovalRequest};
pub use requests::{ApproveRemovalRequest, ApproveTransferRequest, RejectRemovalRequest};
pub use transfer_selection::TransferSelection;
pub use view::{status_label, RemovalRecord};
