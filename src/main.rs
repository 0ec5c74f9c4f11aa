use clap::Parser;
use pathclip::logger::initialize_logger;
use pathclip::{aggregate_selection, copy_paths_to_clipboard, PathCopierConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[arg(required = true, help = "Files or folders to copy; folders expand recursively")]
    paths: Vec<String>,
    #[arg(
        short,
        long,
        help = "Base directory for the //-path headers; only file names are used if omitted"
    )]
    root: Option<PathBuf>,
    #[arg(long, help = "Print the bundle to stdout instead of the clipboard")]
    stdout: bool,
    #[arg(short = 'M', long, default_value = "gpt-4o")]
    model: String,
    #[arg(short = 's', long, default_value = "false")]
    no_stats: bool,
}

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();
    initialize_logger();

    if cli_args.stdout {
        match aggregate_selection(&cli_args.paths, cli_args.root.as_deref()).await {
            Ok(payload) => print!("{}", payload),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let config = PathCopierConfig {
        root: cli_args.root,
        model: cli_args.model,
        no_stats: cli_args.no_stats,
    };
    if let Err(e) = copy_paths_to_clipboard(config, cli_args.paths).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
