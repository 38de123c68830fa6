use crate::channel::Channel;
use crate::error::SplitError;
use crate::split::split_channel;
use image::RgbaImage;
use log::{debug, error, info};
use rayon::prelude::*;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<Vec<PathBuf>, SplitError>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &SplitError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.input.as_path(), e)))
    }
}

/// `dir/name.ext` -> `dir/name`. Inputs without an extension are rejected,
/// their output directory would be the input itself.
pub fn output_dir(input: &Path) -> Result<PathBuf, SplitError> {
    if input.extension().is_none() {
        return Err(SplitError::InvalidPath(input.to_path_buf()));
    }

    let stem = input
        .file_stem()
        .ok_or_else(|| SplitError::InvalidPath(input.to_path_buf()))?;
    let parent = input
        .parent()
        .ok_or_else(|| SplitError::InvalidPath(input.to_path_buf()))?;

    Ok(parent.join(stem))
}

pub fn output_file(dir: &Path, stem: &OsStr, channel: Channel) -> PathBuf {
    let mut name = stem.to_os_string();
    name.push("_");
    name.push(channel.name());
    name.push(".png");
    dir.join(name)
}

/// Picks the decoder from the file contents, falling back to the extension.
fn decode(input: &Path) -> image::ImageResult<image::DynamicImage> {
    image::io::Reader::open(input)?
        .with_guessed_format()?
        .decode()
}

fn write_channel(image: &RgbaImage, path: &Path) -> Result<(), SplitError> {
    // Every pixel is opaque gray, so the red plane alone is lossless.
    let mut gray = image::GrayImage::new(image.width(), image.height());
    for (dest, src) in gray.iter_mut().zip(image.chunks_exact(4)) {
        *dest = src[0];
    }

    gray.save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| SplitError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Splits one file into its four channel PNGs, returning the written paths in
/// [`Channel::ALL`] order. Files written before a failure are left on disk.
pub fn process_file(input: &Path) -> Result<Vec<PathBuf>, SplitError> {
    let dir = output_dir(input)?;
    let stem = dir
        .file_name()
        .ok_or_else(|| SplitError::InvalidPath(input.to_path_buf()))?
        .to_os_string();

    std::fs::create_dir_all(&dir).map_err(|source| SplitError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    let source = decode(input)
        .map_err(|source| SplitError::Decode {
            path: input.to_path_buf(),
            source,
        })?
        .to_rgba8();

    // Every channel is attempted even when another one fails.
    let written: Vec<Result<PathBuf, SplitError>> = Channel::ALL
        .par_iter()
        .map(|&channel| -> Result<PathBuf, SplitError> {
            let path = output_file(&dir, &stem, channel);
            write_channel(&split_channel(&source, channel), &path)?;
            debug!("wrote {}", path.display());
            Ok(path)
        })
        .collect();

    written.into_iter().collect()
}

/// Processes every file concurrently and returns once all of them are done.
pub fn process(paths: &[PathBuf]) -> BatchReport {
    let outcomes = paths
        .par_iter()
        .map(|input| {
            let result = process_file(input);

            match &result {
                Ok(_) => info!("split {}", input.display()),
                Err(err) => {
                    let causes: Vec<String> =
                        anyhow::Chain::new(err).map(|cause| cause.to_string()).collect();
                    error!("{}", causes.join(": "));
                }
            }

            FileOutcome {
                input: input.clone(),
                result,
            }
        })
        .collect();

    BatchReport { outcomes }
}
