extern crate unibrf;

use log::LevelFilter;
use std::{io, path::PathBuf, process};
use structopt::StructOpt;
use unibrf::{batch, config::Options, diagnostic, stdio, table, Converter};

#[derive(StructOpt, Debug)]
#[structopt(name = "unibrf-tool")]
/// Braille Ready Format conversion with options, table dumps and batch conversion.
struct Opt {
    #[structopt(subcommand)]
    command: Command,

    #[structopt(long, parse(from_os_str))]
    /// A YAML file of conversion options.
    config: Option<PathBuf>,

    #[structopt(short = "v", parse(from_occurrences))]
    /// Verbosity of output.
    verbose: usize,
}

#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
enum Command {
    /// Convert text using the configured options.
    #[structopt(setting = structopt::clap::AppSettings::AllowLeadingHyphen)]
    Convert {
        #[structopt(allow_hyphen_values = true)]
        /// The text to convert. Standard input is read if not specified.
        text: Option<String>,
    },

    /// Print the Braille to BRF table as YAML.
    Table,

    /// Convert every matching file in a folder.
    Batch {
        #[structopt(parse(from_os_str))]
        /// The folder to convert.
        folder: PathBuf,

        #[structopt(long, parse(from_os_str))]
        /// Where to write converted files. They're written next to their inputs if not specified.
        out_dir: Option<PathBuf>,

        /// Prints out actions instead of doing them.
        #[structopt(long)]
        dry_run: bool,
    },
}

fn main() {
    let Opt {
        command,
        config,
        verbose,
    } = Opt::from_args();

    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let options = match config {
        Some(path) => match Options::load(&path) {
            Ok(options) => {
                log::info!("loaded options from {}", path.display());
                options
            }
            Err(err) => {
                eprintln!("\"{}\" - {}", path.display(), err);
                process::exit(1);
            }
        },
        None => Options::default(),
    };
    let converter = Converter::new(options);

    match command {
        Command::Convert { text } => {
            let text = text.unwrap_or_else(stdio::read_stdin);
            let brf = converter.convert(&text, diagnostic::stderr());
            stdio::write_stdout(&brf);
        }
        Command::Table => {
            let entries = table::entries().collect::<Vec<_>>();
            if let Err(err) = serde_yaml::to_writer(io::stdout(), &entries) {
                eprintln!("{}", err);
                process::exit(1);
            }
        }
        Command::Batch {
            folder,
            out_dir,
            dry_run,
        } => {
            let summary = batch::convert_dir(&folder, out_dir.as_deref(), &converter, dry_run);

            for report in &summary.reports {
                for diagnostic in &report.diagnostics {
                    eprintln!("\"{}\": {}", report.input.display(), diagnostic);
                }
            }

            log::info!("converted {} files", summary.reports.len());

            if !summary.errors.is_empty() {
                for (path, err) in &summary.errors {
                    eprintln!("\"{}\" - {}", path.display(), err);
                }
                process::exit(1);
            }
        }
    }
}
