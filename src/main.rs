use anyhow::Result;
use grocer_core::{backup, FrequencyTable, LoadError, Loader};
use log::info;
use std::io;
use std::path::PathBuf;
use structopt::StructOpt;

mod menu;

use menu::Words;

#[derive(Debug, StructOpt)]
#[structopt(name = "grocer", about = "Corner Grocer item frequency tracker.")]
struct Opt {
    /// Whitespace-separated list of purchased items
    #[structopt(
        long,
        parse(from_os_str),
        default_value = "CS210_Project_Three_Input_File.txt"
    )]
    input: PathBuf,

    /// Where the frequency backup is written on start
    #[structopt(long, parse(from_os_str), default_value = "frequency.dat")]
    backup: PathBuf,

    /// Histogram marker
    #[structopt(long, default_value = "*")]
    marker: char,

    /// Hide the load progress bar
    #[structopt(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    info!("Configuration: {:?}", opt);

    let loader = if opt.quiet {
        Loader::quiet()
    } else {
        Loader::new()
    };

    let table = match loader.load(&opt.input) {
        Ok(table) => table,
        Err(LoadError::Open { .. }) => {
            println!("Error opening file.");
            FrequencyTable::new()
        }
        Err(err) => {
            println!("Error reading file: {}", err);
            FrequencyTable::new()
        }
    };

    if backup::save(&table, &opt.backup).is_err() {
        println!(
            "Error: Could not create backup file: {}",
            opt.backup.display()
        );
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut words = Words::new(stdin.lock());
    menu::run(&table, opt.marker, &mut words, &mut stdout.lock())?;
    Ok(())
}
