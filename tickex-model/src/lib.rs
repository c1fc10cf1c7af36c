//! Core data model definitions shared across Tickex crates.

pub mod scan;
pub mod verify;

// Intentionally curated re-exports for downstream consumers.
pub use scan::ScanPhase;
#[cfg(feature = "chrono")]
pub use scan::ScanReport;
pub use verify::{
    MSG_TICKET_INVALID, MSG_TICKET_VALID, TicketStatus, VerifyRequest,
    VerifyResponse,
};
