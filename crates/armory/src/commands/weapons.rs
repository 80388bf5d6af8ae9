//! Weapon command handlers.
//!
//! Every facade call here is preceded by a fresh subscription; the
//! notifications it publishes are folded into a `ViewState`, which is what
//! gets rendered.

use serde::Serialize;

use armory_core::{Facade, ViewState, WeaponForm, WeaponId};

use crate::cli::{GlobalOpts, OutputFormat, WeaponFields, WeaponsArgs, WeaponsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Serialize)]
struct Existence {
    id: WeaponId,
    exists: bool,
}

#[derive(Serialize)]
struct Created {
    id: WeaponId,
}

pub async fn handle(
    facade: &Facade,
    args: WeaponsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        WeaponsCommand::Get { id } => {
            let id = util::parse_id(&id)?;
            ensure_exists(facade, id).await?;

            let mut rx = facade.subscribe();
            let outcome = facade.fetch(id).await;
            render_view(&util::settle(&mut rx, ViewState::Idle), global);
            outcome.map(drop).map_err(Into::into)
        }

        WeaponsCommand::Exists { id } => {
            let id = util::parse_id(&id)?;
            let exists = facade.exists(id).await;
            let out = output::render_single(
                &global.output,
                &Existence { id, exists },
                |e| {
                    if e.exists {
                        format!("Weapon with ID {} exists.", e.id)
                    } else {
                        format!("Weapon with ID {} does not exist.", e.id)
                    }
                },
                |e| e.exists.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        WeaponsCommand::List => {
            let mut rx = facade.subscribe();
            let outcome = facade.fetch_all().await;
            render_view(&util::settle(&mut rx, ViewState::Idle), global);
            outcome.map(drop).map_err(Into::into)
        }

        WeaponsCommand::Add { fields, from_file } => {
            let draft = match from_file {
                Some(path) => util::read_weapon_file(&path)?,
                None => {
                    require_all(&fields)?;
                    let mut form = WeaponForm::default();
                    apply_fields(&mut form, fields);
                    form.to_draft()?
                }
            };

            let mut rx = facade.subscribe();
            let outcome = facade.create(&draft).await;
            render_view(&util::settle(&mut rx, ViewState::open_add_form()), global);
            let id = outcome?;
            if global.output != OutputFormat::Table {
                let out = output::render_single(
                    &global.output,
                    &Created { id },
                    |c| c.id.to_string(),
                    |c| c.id.to_string(),
                );
                output::print_output(&out, global.quiet);
            }
            Ok(())
        }

        WeaponsCommand::Update { id, fields } => {
            let id = util::parse_id(&id)?;
            ensure_exists(facade, id).await?;

            let mut rx = facade.subscribe();
            let outcome = facade.fetch(id).await;
            let view = util::settle(&mut rx, ViewState::open_edit_form(id));
            outcome?;
            let ViewState::EditForm { mut form, .. } = view else {
                return Err(CliError::RequestFailed {
                    message: format!("Server returned a different weapon than ID {id}"),
                    status: 200,
                });
            };

            apply_fields(&mut form, fields);
            let draft = form.to_draft()?;
            let accepted = facade.update(id, &draft).await;
            render_view(&ViewState::after_update(id, accepted), global);
            if accepted {
                Ok(())
            } else {
                Err(CliError::UpdateRejected { id: id.get() })
            }
        }

        WeaponsCommand::Delete { id } => {
            let id = util::parse_id(&id)?;
            ensure_exists(facade, id).await?;

            if !util::confirm(
                &format!("Delete weapon {id}? This cannot be undone."),
                &format!("delete weapon {id}"),
                global.yes,
            )? {
                return Ok(());
            }

            let mut rx = facade.subscribe();
            let outcome = facade.delete(id).await;
            render_view(&util::settle(&mut rx, ViewState::Idle), global);
            outcome.map(drop).map_err(Into::into)
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Show a view. `Error` views are left for the caller to report with the
/// matching exit code.
fn render_view(view: &ViewState, global: &GlobalOpts) {
    match view {
        ViewState::List(weapons) => {
            let out = output::render_weapons(&global.output, weapons);
            output::print_output(&out, global.quiet);
        }
        ViewState::Detail(weapon) => {
            let out = output::render_weapon(&global.output, weapon);
            output::print_output(&out, global.quiet);
        }
        ViewState::Notice(message) => output::print_notice(message, global),
        ViewState::Error(message) => tracing::debug!(%message, "operation reported an error"),
        other => tracing::debug!(view = ?other, "nothing to render"),
    }
}

async fn ensure_exists(facade: &Facade, id: WeaponId) -> Result<(), CliError> {
    if facade.exists(id).await {
        Ok(())
    } else {
        Err(CliError::NotFound {
            message: format!("Weapon with ID {id} does not exist."),
        })
    }
}

fn require_all(fields: &WeaponFields) -> Result<(), CliError> {
    let required = [
        ("name", fields.name.is_some()),
        ("type", fields.kind.is_some()),
        ("manufacturer", fields.manufacturer.is_some()),
        ("caliber", fields.caliber.is_some()),
        ("magazine-capacity", fields.magazine_capacity.is_some()),
        ("fire-rate", fields.fire_rate.is_some()),
        ("ammo-count", fields.ammo_count.is_some()),
    ];
    match required.iter().find(|(_, present)| !present) {
        Some((flag, _)) => Err(CliError::Validation {
            field: (*flag).into(),
            reason: format!("--{flag} is required unless --from-file is given"),
        }),
        None => Ok(()),
    }
}

/// Overwrite the form fields the user supplied; keep the rest.
fn apply_fields(form: &mut WeaponForm, fields: WeaponFields) {
    let WeaponFields {
        name,
        kind,
        manufacturer,
        caliber,
        magazine_capacity,
        fire_rate,
        ammo_count,
        images,
    } = fields;

    for (slot, value) in [
        (&mut form.name, name),
        (&mut form.kind, kind),
        (&mut form.manufacturer, manufacturer),
        (&mut form.caliber, caliber),
        (&mut form.magazine_capacity, magazine_capacity),
        (&mut form.fire_rate, fire_rate),
        (&mut form.ammo_count, ammo_count),
        (&mut form.images, images),
    ] {
        if let Some(value) = value {
            *slot = value;
        }
    }
}
