use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

use embernav::app::relate::{format_listing, related_files, synthesize_path};
use embernav::domain::model::FileCategory;
use embernav::infra::config::Config;
use embernav::infra::{editor, workspace};
use embernav::ui::app::PickerApp;

#[derive(Parser)]
#[command(
    name = "embernav",
    version,
    about = "Navigate between related files in Ember-style projects",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the files related to a path
    Related {
        /// Source file, project-relative or absolute
        path: String,
        /// Emit the candidates as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pick a related file interactively and open it
    Open {
        /// Source file, project-relative or absolute
        path: String,
        /// Print the chosen path instead of launching an editor
        #[arg(long)]
        print: bool,
    },
    /// Print the canonical path for a category and part
    Path {
        /// Category key, e.g. component-template
        category: String,
        /// Logical part name, e.g. widget or users/edit
        part: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    embernav::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Related { path, json } => run_related(&path, json),
        Commands::Open { path, print } => run_open(&path, print),
        Commands::Path { category, part } => run_path(&category, &part),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "embernav", &mut io::stdout());
            Ok(())
        }
    }
}

fn run_related(path: &str, json: bool) -> Result<()> {
    let root = workspace::project_root()?;
    let relative = workspace::to_project_relative(&root, path);
    let candidates = related_files(&relative);

    if json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
        return Ok(());
    }

    // An unclassified path is a silent no-op, not an error.
    if candidates.is_empty() {
        tracing::debug!(path = %relative, "no related files to suggest");
        return Ok(());
    }

    println!("{}", format_listing(&candidates));
    Ok(())
}

fn run_open(path: &str, print: bool) -> Result<()> {
    let config = Config::load()?;
    let root = workspace::project_root()?;
    let relative = workspace::to_project_relative(&root, path);
    let candidates = related_files(&relative);

    if candidates.is_empty() {
        tracing::debug!(path = %relative, "no related files to suggest");
        return Ok(());
    }

    let picker = PickerApp::new(config.clone(), candidates);
    let Some(choice) = picker.run()? else {
        return Ok(());
    };

    let target = workspace::resolve(&root, &choice.path);
    if print {
        println!("{}", target.display());
        return Ok(());
    }
    editor::open_in_editor(&config, &target)
}

fn run_path(category: &str, part: &str) -> Result<()> {
    let category: FileCategory = category.parse()?;
    println!("{}", synthesize_path(part, category));
    Ok(())
}
