/// GLprimer - transform inspector
///
/// Examples:
///   glprimer frame --time 2.0
///   glprimer eval "rotx(pi/10) * translate(0, 0, 3) * scale(0.5)" --point 1,1,1
///   glprimer mesh --box 0.2,0.2,1.0
use clap::Parser;
use glprimer_terminal::{run, Cli};
use std::io::stdout;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let mut out = stdout().lock();
    run(&cli, &mut out)
}
