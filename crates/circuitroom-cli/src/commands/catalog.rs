use std::path::PathBuf;

use clap::Subcommand;

use circuitroom_core::exercise::format_clock;
use circuitroom_core::Catalog;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Print a catalog (the built-in circuit unless --path is given)
    Show {
        /// Catalog TOML file to read
        #[arg(long)]
        path: Option<PathBuf>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the built-in circuit to a TOML file as a starting point
    Init {
        /// Destination file (must not exist)
        path: PathBuf,
    },
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CatalogAction::Show { path, json } => {
            let catalog = match path {
                Some(p) => Catalog::load(&p)?,
                None => Catalog::builtin(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                for (i, draft) in catalog.exercises.iter().enumerate() {
                    println!(
                        "{:2}. {} ({})\n    {}",
                        i + 1,
                        draft.name,
                        format_clock(draft.duration),
                        draft.description
                    );
                }
            }
        }
        CatalogAction::Init { path } => {
            if path.exists() {
                return Err(format!("{} already exists", path.display()).into());
            }
            let content = toml::to_string_pretty(&Catalog::builtin())?;
            std::fs::write(&path, content)?;
            println!("wrote built-in circuit to {}", path.display());
        }
    }
    Ok(())
}
