//! Participant slot accounting
//!
//! Confirmed-slot counting and the capacity invariant. Pure and cheap
//! enough to recompute on every edit-form change.

use crate::models::{Participant, PaymentStatus};
use crate::utils::errors::{PlayDeskError, Result};

/// Sum of `quantity` over participants whose payment went through.
/// Pending and failed registrations never consume capacity.
pub fn confirmed_slots(participants: &[Participant]) -> u32 {
    participants
        .iter()
        .filter(|p| p.payment_status == PaymentStatus::Success)
        .map(|p| p.quantity)
        .sum()
}

/// Outcome of a capacity check over a proposed participant list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityCheck {
    pub confirmed: u32,
    pub slots_left: i64,
}

/// Enforce the capacity invariant for a proposed participant list.
///
/// Returns the recomputed confirmed total and remaining slots, or a
/// `CapacityExceeded` rejection when the total overshoots the limit. A
/// rejected mutation must not be applied.
pub fn check_capacity(participants: &[Participant], limit: u32) -> Result<CapacityCheck> {
    let confirmed = confirmed_slots(participants);
    if confirmed > limit {
        return Err(PlayDeskError::CapacityExceeded { confirmed, limit });
    }
    Ok(CapacityCheck {
        confirmed,
        slots_left: i64::from(limit) - i64::from(confirmed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;

    use crate::models::SkillLevel;

    fn participant(status: PaymentStatus, quantity: u32) -> Participant {
        Participant {
            id: None,
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            skill_level: SkillLevel::Beginner,
            quantity,
            amount: 299.0,
            booking_date: Utc::now(),
            payment_status: status,
            refunded: false,
            refund_date: None,
        }
    }

    #[test]
    fn test_empty_input_counts_zero() {
        assert_eq!(confirmed_slots(&[]), 0);
    }

    #[test]
    fn test_only_successful_payments_count() {
        let participants = vec![
            participant(PaymentStatus::Success, 2),
            participant(PaymentStatus::Pending, 3),
            participant(PaymentStatus::Failed, 1),
            participant(PaymentStatus::Success, 1),
        ];
        assert_eq!(confirmed_slots(&participants), 3);
    }

    #[test]
    fn test_zero_quantity_contributes_nothing() {
        let participants = vec![participant(PaymentStatus::Success, 0)];
        assert_eq!(confirmed_slots(&participants), 0);
    }

    #[test]
    fn test_capacity_within_limit() {
        let participants = vec![
            participant(PaymentStatus::Success, 3),
            participant(PaymentStatus::Success, 2),
        ];
        let check = check_capacity(&participants, 8).unwrap();
        assert_eq!(check.confirmed, 5);
        assert_eq!(check.slots_left, 3);
    }

    #[test]
    fn test_capacity_at_limit_is_accepted() {
        let participants = vec![participant(PaymentStatus::Success, 8)];
        let check = check_capacity(&participants, 8).unwrap();
        assert_eq!(check.slots_left, 0);
    }

    #[test]
    fn test_capacity_exceeded_is_rejected() {
        let participants = vec![
            participant(PaymentStatus::Success, 6),
            participant(PaymentStatus::Success, 3),
        ];
        assert_matches!(
            check_capacity(&participants, 8),
            Err(PlayDeskError::CapacityExceeded {
                confirmed: 9,
                limit: 8
            })
        );
    }

    #[test]
    fn test_pending_payments_never_trip_the_limit() {
        let participants = vec![
            participant(PaymentStatus::Success, 8),
            participant(PaymentStatus::Pending, 10),
        ];
        assert!(check_capacity(&participants, 8).is_ok());
    }
}
