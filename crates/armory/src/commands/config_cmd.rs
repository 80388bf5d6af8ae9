//! Config subcommand handlers.

use std::io::IsTerminal;

use dialoguer::{Confirm, Input};
use serde::Serialize;
use tabled::Tabled;

use armory_core::config::DEFAULT_SERVER;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct ProfileEntry {
    name: String,
    server: String,
    default: bool,
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "Profile")]
    name: String,
    #[tabled(rename = "Server")]
    server: String,
}

impl From<&ProfileEntry> for ProfileRow {
    fn from(p: &ProfileEntry) -> Self {
        Self {
            marker: if p.default { "*" } else { "" },
            name: p.name.clone(),
            server: p.server.clone(),
        }
    }
}

/// Map a dialoguer failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(
                &global.output,
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_default(),
                |c| toml::to_string_pretty(c).unwrap_or_default(),
            );
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            let active = config::active_profile_name(global, &cfg);
            let entries: Vec<ProfileEntry> = cfg
                .profiles
                .iter()
                .map(|(name, p)| ProfileEntry {
                    name: name.clone(),
                    server: p.server.clone(),
                    default: *name == active,
                })
                .collect();
            if entries.is_empty() {
                output::print_notice("No profiles configured. Run: armory config init", global);
                return Ok(());
            }
            let out = output::render_list(
                &global.output,
                &entries,
                |p| ProfileRow::from(p),
                |p| p.name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;
            cfg.profile(&name)?;
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            output::print_notice(&format!("Default profile set to '{name}'"), global);
            Ok(())
        }
    }
}

/// Guided setup: add or replace one profile and make it the default.
fn init(global: &GlobalOpts) -> Result<(), CliError> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::Validation {
            field: "interactive".into(),
            reason: "config init needs an interactive terminal".into(),
        });
    }

    let mut cfg: Config = config::load_config()?;

    let name: String = Input::new()
        .with_prompt("Profile name")
        .default(global.profile.clone().unwrap_or_else(|| "default".into()))
        .interact_text()
        .map_err(prompt_err)?;

    let server: String = Input::new()
        .with_prompt("Service URL")
        .default(global.server.clone().unwrap_or_else(|| DEFAULT_SERVER.into()))
        .validate_with(|input: &String| -> Result<(), String> {
            url::Url::parse(input)
                .map(drop)
                .map_err(|e| format!("invalid URL: {e}"))
        })
        .interact_text()
        .map_err(prompt_err)?;

    let insecure = server.starts_with("https://")
        && Confirm::new()
            .with_prompt("Accept self-signed certificates?")
            .default(false)
            .interact()
            .map_err(prompt_err)?;

    let timeout: String = Input::new()
        .with_prompt("Request timeout in seconds (blank for none)")
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() || input.trim().parse::<u64>().is_ok() {
                Ok(())
            } else {
                Err("enter a whole number of seconds".into())
            }
        })
        .interact_text()
        .map_err(prompt_err)?;

    cfg.profiles.insert(
        name.clone(),
        Profile {
            server,
            ca_cert: None,
            insecure: insecure.then_some(true),
            timeout: timeout.trim().parse().ok(),
        },
    );
    cfg.default_profile = Some(name.clone());
    config::save_config(&cfg)?;

    output::print_notice(
        &format!(
            "Saved profile '{name}' to {}",
            config::config_path().display()
        ),
        global,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn entries() -> Vec<ProfileEntry> {
        vec![
            ProfileEntry {
                name: "lab".into(),
                server: "http://lab.internal:8080".into(),
                default: false,
            },
            ProfileEntry {
                name: "local".into(),
                server: DEFAULT_SERVER.into(),
                default: true,
            },
        ]
    }

    #[test]
    fn profile_table_marks_the_default() {
        let out = output::render_list(
            &OutputFormat::Table,
            &entries(),
            |p| ProfileRow::from(p),
            |p| p.name.clone(),
        );
        assert!(out.contains("Profile"));
        assert!(out.contains("http://lab.internal:8080"));
        assert!(out.contains('*'));
    }

    #[test]
    fn profile_plain_lists_names() {
        let out = output::render_list(
            &OutputFormat::Plain,
            &entries(),
            |p| ProfileRow::from(p),
            |p| p.name.clone(),
        );
        assert_eq!(out, "lab\nlocal");
    }
}
