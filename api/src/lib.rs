//! Server surface for the site: the contact message model and its submission endpoint.

use dioxus::prelude::*;

mod contact;
pub use contact::{
    is_plausible_email, ContactError, ContactField, ContactMessage, MAX_EMAIL_CHARS,
    MAX_MESSAGE_CHARS, MAX_NAME_CHARS,
};

#[cfg(not(target_arch = "wasm32"))]
pub mod inbox;

/// Accept a message from the contact form, validate it and store it in the inbox.
#[server]
pub async fn submit_contact_message(message: ContactMessage) -> Result<(), ServerFnError> {
    use dioxus::logger::tracing::{info, warn};

    let message = message.normalized().map_err(|err| {
        warn!("[contact] rejected submission: {err}");
        ServerFnError::ServerError(err.to_string())
    })?;

    let id = inbox::store(inbox::inbox_path(), message.clone()).await.map_err(|err| {
        warn!("[contact] {err}");
        ServerFnError::ServerError(err.to_string())
    })?;

    info!("[contact] stored message {id} from {}", message.email);
    Ok(())
}
