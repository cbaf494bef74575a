//! The default command: the form/card flow.

use anyhow::{bail, Result};

use sweet_surprise::config::{self, Config};
use sweet_surprise::tui::{CardApp, CardOutcome, FormApp, FormOutcome, Theme};
use sweet_surprise::Greeting;

/// Options resolved from CLI flags.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub muted: bool,
    pub reduced_motion: bool,
    pub theme: Option<String>,
    pub name: Option<String>,
    pub message: Option<String>,
}

/// Run the greeting card: form, then card, looping on edit.
///
/// Field values survive the edit round-trip, and the mute toggle persists
/// across replays and edits within one session.
pub fn handle_run(opts: RunOptions) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        bail!("sweet-surprise needs an interactive terminal");
    }

    let config = Config::load()?;
    let theme_name = opts.theme.unwrap_or_else(|| config.theme.clone());
    let theme = Theme::by_name(&theme_name);
    // Sampled once, before any view opens
    let reduced_motion = config::reduced_motion(opts.reduced_motion, &config);
    let mut muted = opts.muted || config.muted;

    let mut greeting = Greeting::new(
        opts.name.unwrap_or_default(),
        opts.message.unwrap_or_default(),
    );

    loop {
        let form = FormApp::new(greeting.clone(), theme.clone())?;
        match form.run()? {
            FormOutcome::Quit => return Ok(()),
            FormOutcome::Submit(submitted) => greeting = submitted,
        }

        let mut card = CardApp::new(greeting.clone(), theme.clone(), muted, reduced_motion)?;
        let outcome = card.run()?;
        muted = card.muted();
        drop(card); // releases the audio handles before the next view

        match outcome {
            CardOutcome::Quit => return Ok(()),
            CardOutcome::Edit => continue,
        }
    }
}
