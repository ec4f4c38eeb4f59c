//! `POST /api/send-visit`

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, warn};

use super::{accept, deliver, require_mail};
use crate::error::{SiteError, SuccessBody};
use crate::forms::VisitRequest;
use crate::notifications::{format, Notification, VisitConfirmation, VisitNotification};
use crate::state::AppState;

const SUCCESS: &str = "Visit request sent successfully";
const FAILURE: &str = "Failed to send visit request";

/// Notify the admin of a visit request, then confirm to the visitor
///
/// # Errors
///
/// 400 for an invalid body, 500 when mail is unconfigured or either email
/// fails to send
pub async fn send_visit(
    State(state): State<AppState>,
    payload: Result<Json<VisitRequest>, JsonRejection>,
) -> Result<SuccessBody, SiteError> {
    require_mail(&state)?;
    let form = accept(payload)?;

    let mail = &state.config().mail;
    let sender = mail.sender();

    let admin = VisitNotification::new(&form, format::received_now())
        .compose(&sender, mail.admin_address());
    let admin_id = deliver(&state, admin, FAILURE).await?;

    let confirmation = VisitConfirmation::new(&form).compose(&sender, &form.email);
    deliver(&state, confirmation, FAILURE).await.inspect_err(|_| {
        warn!(admin_message_id = %admin_id, "Admin already notified of visit, visitor confirmation failed");
    })?;

    info!(admin_message_id = %admin_id, date = %form.date, "Visit request delivered");
    Ok(SuccessBody::new(SUCCESS))
}
