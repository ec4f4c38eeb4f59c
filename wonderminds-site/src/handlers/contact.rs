//! `POST /api/send-email`

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use super::{accept, deliver, require_mail};
use crate::error::{SiteError, SuccessBody};
use crate::forms::ContactMessage;
use crate::notifications::{ContactNotification, Notification};
use crate::state::AppState;

const SUCCESS: &str = "Email sent successfully";
const FAILURE: &str = "Failed to send email. Please try again later.";

/// Forward a contact form message to the center's inbox
///
/// # Errors
///
/// 400 for an invalid body, 500 when mail is unconfigured or delivery fails
pub async fn send_email(
    State(state): State<AppState>,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> Result<SuccessBody, SiteError> {
    require_mail(&state)?;
    let form = accept(payload)?;

    let mail = &state.config().mail;
    let email = ContactNotification::new(&form).compose(&mail.sender(), mail.receiver_address());
    let message_id = deliver(&state, email, FAILURE).await?;

    info!(message_id = %message_id, "Contact message delivered");
    Ok(SuccessBody::new(SUCCESS).with_message_id(message_id))
}
