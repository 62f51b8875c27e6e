use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use release_meta::{meta, release_info, resolver, ui};

#[derive(clap::Parser)]
#[command(
    name = "release-meta",
    about = "Compute release version strings and emit them as a metadata fragment"
)]
struct Args {
    #[arg(
        short = 'C',
        long,
        help = "Resolve from this directory instead of the current one"
    )]
    dir: Option<PathBuf>,

    #[arg(
        long,
        default_value = resolver::DEFAULT_GIT_PREFIX,
        help = "Build metadata prefix for git-derived builds"
    )]
    git_prefix: String,

    #[arg(
        short,
        long,
        help = "Write the metadata fragment to a file instead of stdout"
    )]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("{} {}", meta::PROGRAM_NAME, env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let result = match &args.dir {
        Some(dir) => resolver::resolve(dir, meta::BASE_VERSION, &args.git_prefix),
        None => resolver::resolve_current_dir(meta::BASE_VERSION, &args.git_prefix),
    };
    let versions = match result {
        Ok(versions) => versions,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = release_info::write(path, &versions) {
                ui::display_error(&format!("Cannot write '{}': {}", path.display(), e));
                std::process::exit(1);
            }
            ui::display_success(&format!("Wrote release metadata to {}", path.display()));
        }
        None => print!("{}", release_info::emit(&versions)),
    }

    Ok(())
}
