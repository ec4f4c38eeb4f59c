//! `POST /api/send-appointment`

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use super::{accept, deliver, require_mail};
use crate::error::{SiteError, SuccessBody};
use crate::forms::AppointmentRequest;
use crate::notifications::{AppointmentNotification, Notification};
use crate::state::AppState;
use crate::storage::AppointmentRecord;

const SUCCESS: &str = "Appointment request submitted successfully";
const FAILURE: &str = "Failed to process appointment request. Please try again later.";

/// Log an appointment request and forward it to the center's inbox
///
/// The log write is queued before the email is sent and never affects the
/// response.
///
/// # Errors
///
/// 400 for an invalid body, 500 when mail is unconfigured or delivery fails
pub async fn send_appointment(
    State(state): State<AppState>,
    payload: Result<Json<AppointmentRequest>, JsonRejection>,
) -> Result<SuccessBody, SiteError> {
    require_mail(&state)?;
    let form = accept(payload)?;

    state
        .appointments()
        .append(AppointmentRecord::new(form.clone()));

    let config = state.config();
    let scheduling_link = &config.booking.scheduling_link;
    let email = AppointmentNotification::new(&form, scheduling_link)
        .compose(&config.mail.sender(), config.mail.receiver_address());
    let message_id = deliver(&state, email, FAILURE).await?;

    info!(message_id = %message_id, child_age = %form.child_age, "Appointment request delivered");
    Ok(SuccessBody::new(SUCCESS)
        .with_message_id(message_id)
        .with_calendly_link(scheduling_link.clone()))
}
