use std::{error::Error, fs::File, path::PathBuf};

use clap::Parser;
use exif_orientation::{open_orientation, read_orientation_seekable, LocalFileSystem};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JPEG files to inspect
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Skip unneeded segments by seeking instead of reading
    #[arg(long)]
    seek: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    for path in &cli.files {
        let res = if cli.seek {
            File::open(path)
                .map(read_orientation_seekable)
                .map_err(Into::into)
        } else {
            open_orientation(&LocalFileSystem, path)
        };

        match res {
            Ok(o) => println!("{:<40}=> {}({})", path.display(), o, o.code()),
            Err(e) => eprintln!("{}: {e}", path.display()),
        }
    }

    Ok(())
}
