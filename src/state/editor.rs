//! Event edit sessions
//!
//! A working copy of one event plus a participant form draft, mirroring the
//! admin edit modal. Every participant mutation revalidates the capacity
//! invariant before being applied: a rejected mutation leaves both the
//! event and the draft untouched so the admin can correct the form instead
//! of starting over. Derived counts are recomputed after every accepted
//! change.

use chrono::{DateTime, Utc};

use crate::filters::{check_capacity, confirmed_slots};
use crate::models::{Event, Participant, PaymentStatus, SkillLevel};
use crate::services::EventService;
use crate::utils::errors::{PlayDeskError, Result};
use crate::utils::helpers::is_valid_phone;

/// In-progress participant form state. `skill_level` stays unset until the
/// admin picks one; building a participant from an incomplete draft fails
/// validation.
#[derive(Debug, Clone)]
pub struct ParticipantDraft {
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub skill_level: Option<SkillLevel>,
    pub payment_status: PaymentStatus,
    pub quantity: u32,
    pub amount: f64,
    pub booking_date: DateTime<Utc>,
    refunded: bool,
    refund_date: Option<DateTime<Utc>>,
}

impl ParticipantDraft {
    /// A blank draft for a new registration, priced at the event's rate.
    fn fresh(price: f64) -> Self {
        Self {
            id: None,
            name: String::new(),
            phone: String::new(),
            skill_level: None,
            payment_status: PaymentStatus::Success,
            quantity: 1,
            amount: price,
            booking_date: Utc::now(),
            refunded: false,
            refund_date: None,
        }
    }

    fn from_participant(participant: &Participant) -> Self {
        Self {
            id: participant.id.clone(),
            name: participant.name.clone(),
            phone: participant.phone.clone(),
            skill_level: Some(participant.skill_level),
            payment_status: participant.payment_status,
            quantity: participant.quantity,
            amount: participant.amount,
            booking_date: participant.booking_date,
            refunded: participant.refunded,
            refund_date: participant.refund_date,
        }
    }

    /// Validate the required fields and produce a participant record.
    fn build(&self) -> Result<Participant> {
        if self.name.trim().is_empty() {
            return Err(PlayDeskError::Validation(
                "Participant name is required".to_string(),
            ));
        }
        if self.phone.trim().is_empty() || !is_valid_phone(&self.phone) {
            return Err(PlayDeskError::Validation(
                "A valid participant phone number is required".to_string(),
            ));
        }
        let skill_level = self.skill_level.ok_or_else(|| {
            PlayDeskError::Validation("Participant skill level is required".to_string())
        })?;
        if self.quantity == 0 {
            return Err(PlayDeskError::Validation(
                "Participant quantity must be at least 1".to_string(),
            ));
        }

        Ok(Participant {
            id: self.id.clone(),
            name: self.name.trim().to_string(),
            phone: self.phone.clone(),
            skill_level,
            quantity: self.quantity,
            amount: self.amount,
            booking_date: self.booking_date,
            payment_status: self.payment_status,
            refunded: self.refunded,
            refund_date: self.refund_date,
        })
    }
}

/// Edit session over a working copy of one event
#[derive(Debug)]
pub struct EventEditor {
    event: Event,
    draft: ParticipantDraft,
    editing_index: Option<usize>,
    selected: Vec<usize>,
}

impl EventEditor {
    /// Open an edit session on a copy of the given event.
    pub fn new(event: Event) -> Self {
        let draft = ParticipantDraft::fresh(event.price);
        Self {
            event,
            draft,
            editing_index: None,
            selected: Vec::new(),
        }
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Mutable access for the detail-tab fields (name, slot, price, ...).
    /// Identifier and slug stay immutable through the serialization layer.
    pub fn event_mut(&mut self) -> &mut Event {
        &mut self.event
    }

    pub fn draft(&self) -> &ParticipantDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ParticipantDraft {
        &mut self.draft
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing_index
    }

    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Confirmed-slot total of the working copy.
    pub fn confirmed_participants(&self) -> u32 {
        confirmed_slots(&self.event.participants)
    }

    /// Add the drafted participant. Drafts with a successful payment are
    /// checked against the participant limit; pending and failed drafts are
    /// always admitted since they consume no capacity.
    pub fn add_participant(&mut self) -> Result<()> {
        let participant = self.draft.build()?;

        if participant.payment_status == PaymentStatus::Success {
            let mut proposed = self.event.participants.clone();
            proposed.push(participant.clone());
            check_capacity(&proposed, self.event.participants_limit)?;
        }

        self.event.participants.push(participant);
        self.recount();
        self.reset_draft();
        Ok(())
    }

    /// Load an existing participant into the draft for editing.
    pub fn begin_edit(&mut self, index: usize) -> Result<()> {
        let participant = self
            .event
            .participants
            .get(index)
            .ok_or(PlayDeskError::ParticipantNotFound { index })?;
        self.draft = ParticipantDraft::from_participant(participant);
        self.editing_index = Some(index);
        Ok(())
    }

    /// Apply the draft back onto the participant being edited, subject to
    /// the same validation as an add.
    pub fn save_participant_edit(&mut self) -> Result<()> {
        let index = self.editing_index.ok_or_else(|| {
            PlayDeskError::Validation("No participant edit in progress".to_string())
        })?;
        if index >= self.event.participants.len() {
            return Err(PlayDeskError::ParticipantNotFound { index });
        }

        let participant = self.draft.build()?;

        if participant.payment_status == PaymentStatus::Success {
            let mut proposed = self.event.participants.clone();
            proposed[index] = participant.clone();
            check_capacity(&proposed, self.event.participants_limit)?;
        }

        self.event.participants[index] = participant;
        self.recount();
        self.editing_index = None;
        self.reset_draft();
        Ok(())
    }

    /// Remove a participant and recompute the derived counts.
    pub fn delete_participant(&mut self, index: usize) -> Result<()> {
        if index >= self.event.participants.len() {
            return Err(PlayDeskError::ParticipantNotFound { index });
        }
        self.event.participants.remove(index);

        // Keep the refund selection aligned with the shifted indexes.
        self.selected.retain(|&i| i != index);
        for i in self.selected.iter_mut() {
            if *i > index {
                *i -= 1;
            }
        }
        if self.editing_index == Some(index) {
            self.editing_index = None;
            self.reset_draft();
        }

        self.recount();
        Ok(())
    }

    /// Toggle a participant's membership in the refund selection. Already
    /// refunded participants are not selectable.
    pub fn toggle_selection(&mut self, index: usize) -> Result<()> {
        let participant = self
            .event
            .participants
            .get(index)
            .ok_or(PlayDeskError::ParticipantNotFound { index })?;
        if participant.refunded {
            return Err(PlayDeskError::NotRefundable {
                reason: "participant was already refunded".to_string(),
            });
        }

        if let Some(pos) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(pos);
        } else {
            self.selected.push(index);
        }
        Ok(())
    }

    /// Refund every selected participant, one request per participant in
    /// selection order. Each participant is marked refunded as its
    /// confirmation arrives; a failure stops the run and the caller is
    /// expected to re-fetch authoritative state. Returns the number of
    /// refunds issued.
    pub async fn refund_selected(&mut self, service: &EventService) -> Result<u32> {
        if self.selected.is_empty() {
            return Err(PlayDeskError::Validation(
                "No participants selected for refund".to_string(),
            ));
        }

        let mut refunded = 0u32;
        for index in self.selected.clone() {
            let participant = self
                .event
                .participants
                .get(index)
                .ok_or(PlayDeskError::ParticipantNotFound { index })?;
            if !participant.is_refundable() {
                return Err(PlayDeskError::NotRefundable {
                    reason: format!(
                        "payment status is {}",
                        participant.payment_status.as_str()
                    ),
                });
            }
            let participant_id = participant.id.clone().ok_or_else(|| {
                PlayDeskError::NotRefundable {
                    reason: "registration has not been persisted yet".to_string(),
                }
            })?;

            service
                .refund_participant(&self.event.id, &participant_id)
                .await?;

            let participant = &mut self.event.participants[index];
            participant.refunded = true;
            participant.refund_date = Some(Utc::now());
            refunded += 1;
        }

        self.selected.clear();
        Ok(refunded)
    }

    /// Consume the session and return the edited event for saving.
    pub fn into_event(self) -> Event {
        self.event
    }

    /// A refunded participant keeps its payment status, so refunds never
    /// change the confirmed total; only add/edit/delete call this.
    fn recount(&mut self) {
        let confirmed = confirmed_slots(&self.event.participants);
        self.event.current_participants = confirmed;
        self.event.slots_left =
            i64::from(self.event.participants_limit) - i64::from(confirmed);
    }

    fn reset_draft(&mut self) {
        self.draft = ParticipantDraft::fresh(self.event.price);
    }
}
