use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
/// and then loads the dataset once to verify it parses.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.data.clone(), cli.test)?;

    let path = Config::config_file();
    let mut cfg = Config::load()?;

    // In test mode nothing was written, so fold the override in by hand.
    if cfg.data_file.is_none()
        && let Some(custom) = &cli.data
    {
        cfg.data_file = Some(custom.clone());
    }

    println!("⚙️  Initializing timey…");
    println!("📄 Config file : {}", path.display());
    match &cfg.data_file {
        Some(custom) => println!("🗂️  Data file   : {}", custom),
        None => println!("🗂️  Data file   : built-in fixtures"),
    }

    let session = Session::open(&cfg)?;
    println!(
        "✅ Dataset loaded: {} tasks, {} projects, {} clients, {} employees",
        session.store.tasks().len(),
        session.store.projects().len(),
        session.store.clients().len(),
        session.store.employees().len(),
    );

    println!("🎉 timey initialization completed!");
    Ok(())
}
