// memlens: ASCII memory-layout diagrams for sequences, text and records

use std::io;

use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use memlens::gallery::{self, Section};
use memlens::ui::App;

#[derive(Debug, Parser)]
#[command(
    name = "memlens",
    version,
    about = "Walk through memory-layout diagrams of live Rust values"
)]
struct Cli {
    /// Print the diagrams to stdout instead of opening the viewer
    #[arg(long)]
    plain: bool,

    /// Only run the given part of the gallery (repeatable)
    #[arg(long, value_enum)]
    only: Vec<SectionArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SectionArg {
    Sequences,
    Text,
    Records,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Sequences => Section::Sequences,
            SectionArg::Text => Section::Text,
            SectionArg::Records => Section::Records,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let sections: Vec<Section> = if cli.only.is_empty() {
        Section::ALL.to_vec()
    } else {
        cli.only.iter().copied().map(Section::from).collect()
    };

    let transcript = gallery::build(&sections);

    if cli.plain {
        print!("{}", transcript.to_text());
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(transcript);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
