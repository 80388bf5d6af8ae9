//! Keyword classification and text generation.

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use armory_core::{Facade, ViewState};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output::{self, Exchange};

use super::util;

pub async fn search(facade: &Facade, keyword: &str, global: &GlobalOpts) -> Result<(), CliError> {
    let mut rx = facade.subscribe();
    let spinner = spinner(global, format!("Classifying '{keyword}'..."));
    let outcome = facade.classify(keyword).await;
    spinner.finish_and_clear();

    if let ViewState::SearchResults { keyword, payload } = util::settle(&mut rx, ViewState::Idle) {
        let exchange = Exchange::new("keyword", &keyword, &payload);
        output::print_output(&output::render_exchange(&global.output, &exchange), global.quiet);
    }
    outcome.map(drop).map_err(Into::into)
}

pub async fn ask(facade: &Facade, prompt: &str, global: &GlobalOpts) -> Result<(), CliError> {
    if prompt.trim().is_empty() {
        return Err(CliError::Validation {
            field: "prompt".into(),
            reason: "Please enter a prompt.".into(),
        });
    }

    let mut rx = facade.subscribe();
    let spinner = spinner(global, "Generating...".into());
    let outcome = facade.generate(prompt).await;
    spinner.finish_and_clear();

    if let ViewState::Reply { prompt, response } = util::settle(&mut rx, ViewState::Idle) {
        let exchange = Exchange::new("prompt", &prompt, &response);
        output::print_output(&output::render_exchange(&global.output, &exchange), global.quiet);
    }
    outcome.map(drop).map_err(Into::into)
}

/// A stderr spinner, hidden when quiet or when stderr is not a terminal.
fn spinner(global: &GlobalOpts, message: String) -> ProgressBar {
    if global.quiet || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.set_style(ProgressStyle::default_spinner());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
