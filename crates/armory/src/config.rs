//! CLI configuration -- thin wrapper around `armory_config` shared types.
//!
//! Adds the resolution step that layers `GlobalOpts` flag overrides
//! (--server, --insecure, --timeout) on top of the active profile.

use clap::parser::ValueSource;
use clap::{ArgMatches, ValueEnum};

use armory_core::FacadeConfig;

use crate::cli::{ColorMode, GlobalOpts};
use crate::error::CliError;

pub use armory_config::{Config, Defaults, Profile, config_path, load_config, save_config};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Fill `--output` and `--color` from `[defaults]` when neither the flag nor
/// its environment variable was given.
pub fn apply_defaults(
    global: &mut GlobalOpts,
    matches: &ArgMatches,
    defaults: &Defaults,
) -> Result<(), CliError> {
    if left_at_default(matches, "output") {
        global.output = parse_default("output", &defaults.output)?;
    }
    if left_at_default(matches, "color") {
        global.color = parse_default::<ColorMode>("color", &defaults.color)?;
    }
    Ok(())
}

fn left_at_default(matches: &ArgMatches, id: &str) -> bool {
    matches!(matches.value_source(id), None | Some(ValueSource::DefaultValue))
}

fn parse_default<T: ValueEnum>(key: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|_| CliError::Validation {
        field: format!("defaults.{key}"),
        reason: format!("invalid {key} '{raw}' in [defaults]"),
    })
}

/// Build the facade configuration for this invocation.
///
/// Flags win over the profile. An explicitly requested profile must exist;
/// otherwise a missing profile falls back to built-in defaults, so a bare
/// `armory --server URL ...` works without any config file.
pub fn resolve_facade_config(
    global: &GlobalOpts,
    config: &Config,
) -> Result<FacadeConfig, CliError> {
    let name = active_profile_name(global, config);
    let mut profile = match config.profile(&name) {
        Ok(profile) => profile.clone(),
        Err(err) if global.profile.is_some() => return Err(err.into()),
        Err(_) => Profile::default(),
    };

    if let Some(ref server) = global.server {
        profile.server.clone_from(server);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }

    tracing::debug!(profile = %name, server = %profile.server, "resolved profile");
    Ok(armory_config::profile_to_facade_config(
        &profile,
        &config.defaults,
    )?)
}
