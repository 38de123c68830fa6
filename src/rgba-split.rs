use log::warn;
use rgba_splitter::SUPPORTED_EXTENSIONS;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct Opts {
    /// Images to split. Opens a file picker when empty.
    paths: Vec<PathBuf>,
}

fn pick_files() -> Vec<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select Image Files")
        .add_filter("Image-Files", SUPPORTED_EXTENSIONS)
        .pick_files()
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::from_args();

    let paths = if opts.paths.is_empty() {
        pick_files()
    } else {
        for path in opts.paths.iter().filter(|p| !rgba_splitter::is_supported(p)) {
            warn!("{} is not a known image extension, trying anyway", path.display());
        }
        opts.paths
    };

    if paths.is_empty() {
        return Ok(());
    }

    let report = rgba_splitter::process(&paths);

    if report.failed() > 0 {
        anyhow::bail!(
            "{} of {} files could not be split",
            report.failed(),
            report.outcomes.len()
        );
    }

    Ok(())
}
