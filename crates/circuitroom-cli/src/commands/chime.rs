use clap::Subcommand;

use circuitroom_core::{ChimeNotifier, Config};

use crate::bell::TerminalChime;

#[derive(Subcommand)]
pub enum ChimeAction {
    /// Play the completion chime once, without any timer involved
    Test,
}

pub fn run(action: ChimeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ChimeAction::Test => {
            let config = Config::load_or_default();
            let chime = TerminalChime::new(config.chime.volume);
            chime.chime("chime-test", "Test bell")?;
        }
    }
    Ok(())
}
