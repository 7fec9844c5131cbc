use clap::Parser;
use env_logger::Env;
use kartik::error::Result;
use kartik::menu::Menu;
use kartik::opener::SystemOpener;
use kartik::profile::Profile;
use kartik::prompt::DialoguerPrompter;
use kartik::terminal::ConsoleTerminal;

mod args;
use args::Cli;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    Cli::parse();

    let profile = Profile::builtin()?;
    let mut menu = Menu::new(
        profile,
        DialoguerPrompter::new(),
        SystemOpener,
        ConsoleTerminal::new(),
    );
    menu.run()
}
