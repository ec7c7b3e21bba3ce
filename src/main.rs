use anyhow::Result;
use shopping_list::app::App;
use shopping_list::cli::{self, Cli};

fn main() -> Result<()> {
    let matches = cli::app().get_matches();
    let cli = Cli::from_matches(&matches)?;
    App::start(cli)
}
