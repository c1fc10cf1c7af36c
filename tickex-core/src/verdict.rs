//! The ticket validity predicate.
//!
//! A payload is valid iff its uppercased form starts with `VALID`. The
//! predicate is total over strings: empty or malformed input is simply
//! invalid, never an error.

use tickex_model::{TicketStatus, VerifyResponse};

const VALID_PREFIX: &str = "VALID";

/// Classify a payload.
pub fn classify(payload: &str) -> TicketStatus {
    if payload.to_uppercase().starts_with(VALID_PREFIX) {
        TicketStatus::Valid
    } else {
        TicketStatus::Invalid
    }
}

/// Build the endpoint response for a payload, with the fixed message pair.
pub fn respond(payload: &str) -> VerifyResponse {
    match classify(payload) {
        TicketStatus::Valid => VerifyResponse::valid(),
        TicketStatus::Invalid => VerifyResponse::invalid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_match_is_case_insensitive() {
        assert_eq!(classify("valid-ticket-42"), TicketStatus::Valid);
        assert_eq!(classify("VALIDXYZ"), TicketStatus::Valid);
        assert_eq!(classify("VaLiD"), TicketStatus::Valid);
    }

    #[test]
    fn non_prefixed_payloads_are_invalid() {
        assert_eq!(classify("invalidcode"), TicketStatus::Invalid);
        assert_eq!(classify(""), TicketStatus::Invalid);
        assert_eq!(classify(" VALID"), TicketStatus::Invalid);
        assert_eq!(classify("xVALID123"), TicketStatus::Invalid);
    }

    #[test]
    fn responses_carry_the_fixed_message_pair() {
        assert_eq!(respond("VALID123"), VerifyResponse::valid());
        assert_eq!(respond("abc"), VerifyResponse::invalid());
    }
}
