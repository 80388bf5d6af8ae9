//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::broadcast;

use armory_core::{Notification, ViewState, WeaponDraft, WeaponId};

use crate::error::CliError;

/// Parse a weapon id typed on the command line.
pub fn parse_id(raw: &str) -> Result<WeaponId, CliError> {
    Ok(raw.parse::<WeaponId>()?)
}

/// Fold every notification already published into `view`.
pub fn settle(rx: &mut broadcast::Receiver<Arc<Notification>>, mut view: ViewState) -> ViewState {
    while let Ok(notification) = rx.try_recv() {
        tracing::trace!(?notification, "applying notification");
        view = view.reduce(&notification);
    }
    view
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Refuses outright when stdin is not a terminal, since nobody can answer.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::ConfirmationRequired {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Read a weapon from a JSON file for `--from-file`.
pub fn read_weapon_file(path: &Path) -> Result<WeaponDraft, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("invalid weapon JSON in {}: {e}", path.display()),
    })
}
