//! Wire types for the ticket verification endpoint.

use std::fmt;

/// Message returned alongside [`TicketStatus::Valid`].
pub const MSG_TICKET_VALID: &str = "Ticket valid";

/// Message returned alongside [`TicketStatus::Invalid`].
pub const MSG_TICKET_INVALID: &str = "Ticket invalid";

/// Classification of a scanned payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TicketStatus {
    Valid,
    Invalid,
}

impl TicketStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, TicketStatus::Valid)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Valid => write!(f, "valid"),
            TicketStatus::Invalid => write!(f, "invalid"),
        }
    }
}

/// Body of `POST /api/verify`. The `qrcode` field carries the decoded
/// payload, whether it came from a camera frame or manual entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerifyRequest {
    pub qrcode: String,
}

impl VerifyRequest {
    pub fn new(qrcode: impl Into<String>) -> Self {
        VerifyRequest {
            qrcode: qrcode.into(),
        }
    }
}

/// Result record produced by the verification endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerifyResponse {
    pub status: TicketStatus,
    pub message: String,
}

impl VerifyResponse {
    pub fn new(status: TicketStatus, message: String) -> Self {
        VerifyResponse { status, message }
    }

    /// Canonical response for a valid ticket.
    pub fn valid() -> Self {
        VerifyResponse {
            status: TicketStatus::Valid,
            message: MSG_TICKET_VALID.to_string(),
        }
    }

    /// Canonical response for an invalid ticket.
    pub fn invalid() -> Self {
        VerifyResponse {
            status: TicketStatus::Invalid,
            message: MSG_TICKET_INVALID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_matches_wire_casing() {
        assert_eq!(TicketStatus::Valid.to_string(), "valid");
        assert_eq!(TicketStatus::Invalid.to_string(), "invalid");
    }

    #[test]
    fn canonical_responses_carry_fixed_messages() {
        assert_eq!(VerifyResponse::valid().message, MSG_TICKET_VALID);
        assert_eq!(VerifyResponse::invalid().message, MSG_TICKET_INVALID);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&VerifyResponse::valid()).unwrap();
        assert_eq!(json, r#"{"status":"valid","message":"Ticket valid"}"#);
    }
}
