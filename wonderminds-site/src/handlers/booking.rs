//! `POST /api/send-booking`

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, warn};

use super::{accept, deliver, require_mail};
use crate::error::{SiteError, SuccessBody};
use crate::forms::BookingRequest;
use crate::notifications::{format, BookingConfirmation, BookingNotification, Notification};
use crate::state::AppState;

const SUCCESS: &str = "Booking request sent successfully";
const FAILURE: &str = "Failed to send booking request";

/// Notify the admin of a pre-booking, then confirm to the parent
///
/// # Errors
///
/// 400 for an invalid body, 500 when mail is unconfigured or either email
/// fails to send
pub async fn send_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<SuccessBody, SiteError> {
    require_mail(&state)?;
    let form = accept(payload)?;

    let mail = &state.config().mail;
    let sender = mail.sender();

    let admin = BookingNotification::new(&form, format::received_now())
        .compose(&sender, mail.admin_address());
    let admin_id = deliver(&state, admin, FAILURE).await?;

    let confirmation = BookingConfirmation::new(&form).compose(&sender, &form.email);
    deliver(&state, confirmation, FAILURE).await.inspect_err(|_| {
        warn!(admin_message_id = %admin_id, "Admin already notified of booking, parent confirmation failed");
    })?;

    info!(admin_message_id = %admin_id, "Booking request delivered");
    Ok(SuccessBody::new(SUCCESS))
}
