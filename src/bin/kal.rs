extern crate kalends as lib;

use flexi_logger::{FileSpec, Logger};
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::StructOpt;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;

use lib::config;
use lib::events::Dispatcher;
use lib::ui::App;

#[derive(Debug, StructOpt)]
#[structopt(name = "kal", about = "A single-month terminal calendar.")]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show the current month non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let config = config::load_suitable_config(args.configfile.as_deref())?;

    let app = App::new(&config);

    if args.show {
        let stdout = io::stdout();
        app.show(&mut stdout.lock())?;
        return Ok(());
    }

    let dispatcher = Dispatcher::from_config(&config);

    let stdout = io::stdout().into_raw_mode()?;
    let mut screen = AlternateScreen::from(stdout);
    write!(screen, "{}", termion::cursor::Hide)?;

    let result = app.run(dispatcher, &mut screen);

    write!(screen, "{}", termion::cursor::Show)?;
    screen.flush()?;

    result.map_err(Into::into)
}
