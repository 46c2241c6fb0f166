//! Converting every matching file under a directory.

use crate::{convert::Converter, diagnostic::Diagnostic};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// The result of converting one file.
#[derive(Debug)]
pub struct Report {
    pub input: PathBuf,
    pub output: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

/// Everything that happened during a batch conversion.
#[derive(Debug, Default)]
pub struct Summary {
    pub reports: Vec<Report>,
    pub errors: Vec<(PathBuf, BatchError)>,
}

/// Convert every file under `root` whose extension matches the converter's input extension.
///
/// Outputs are written next to their inputs, or at the same relative path under `out_dir` if
/// it's given. Nothing is written when `dry_run` is set. A failing file doesn't stop the others;
/// its error is collected in the summary instead.
pub fn convert_dir(
    root: &Path,
    out_dir: Option<&Path>,
    converter: &Converter,
    dry_run: bool,
) -> Summary {
    let options = converter.options();
    let mut errors = Vec::new();
    let mut inputs = Vec::new();

    for entry in WalkDir::new(root).sort_by(|a, b| a.file_name().cmp(b.file_name())) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file()
                    && has_extension(entry.path(), &options.input_extension)
                {
                    inputs.push(entry.into_path());
                }
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                errors.push((path, BatchError::CouldntWalk(err)));
            }
        }
    }

    log::info!("found {} files to convert in {}", inputs.len(), root.display());

    let bar = ProgressBar::new(inputs.len() as u64);
    bar.set_message("Converting files...");

    let results = inputs
        .into_par_iter()
        .map(|input| {
            let output = output_path(root, &input, out_dir, &options.output_extension);
            let res = convert_file(converter, &input, &output, dry_run);
            bar.inc(1);
            match res {
                Ok(diagnostics) => Ok(Report {
                    input,
                    output,
                    diagnostics,
                }),
                Err(err) => Err((input, err)),
            }
        })
        .collect::<Vec<_>>();

    bar.finish();

    let mut reports = Vec::new();
    for res in results {
        match res {
            Ok(report) => reports.push(report),
            Err(err) => errors.push(err),
        }
    }

    Summary { reports, errors }
}

/// Convert a single file, returning the diagnostics it produced.
pub fn convert_file(
    converter: &Converter,
    input: &Path,
    output: &Path,
    dry_run: bool,
) -> Result<Vec<Diagnostic>, BatchError> {
    if input == output {
        return Err(BatchError::WouldOverwriteInput);
    }

    let text = fs::read_to_string(input).map_err(BatchError::CouldntRead)?;
    let mut diagnostics = Vec::new();
    let brf = converter.convert(&text, &mut diagnostics);

    if dry_run {
        log::info!("would write {}", output.display());
        return Ok(diagnostics);
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(BatchError::CouldntCreateDir)?;
    }
    fs::write(output, brf).map_err(BatchError::CouldntWrite)?;
    log::debug!("wrote {}", output.display());

    Ok(diagnostics)
}

/// Where the converted version of `input` goes.
///
/// # Examples
///
/// ```rust
/// # use std::path::Path;
/// # use unibrf::batch::output_path;
/// let root = Path::new("books");
/// let input = Path::new("books/ch1/page.txt");
/// assert_eq!(Path::new("books/ch1/page.brf"), output_path(root, input, None, "brf"));
/// assert_eq!(
///     Path::new("out/ch1/page.brf"),
///     output_path(root, input, Some(Path::new("out")), "brf"),
/// );
/// ```
pub fn output_path(root: &Path, input: &Path, out_dir: Option<&Path>, extension: &str) -> PathBuf {
    let base = match out_dir {
        None => input.to_path_buf(),
        Some(dir) => match input.strip_prefix(root) {
            Ok(relative) if !relative.as_os_str().is_empty() => dir.join(relative),
            _ => dir.join(input.file_name().unwrap_or_else(|| input.as_os_str())),
        },
    };
    base.with_extension(extension)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().map_or(false, |ext| ext == extension)
}

#[derive(Debug)]
pub enum BatchError {
    CouldntWalk(walkdir::Error),
    CouldntRead(io::Error),
    CouldntCreateDir(io::Error),
    CouldntWrite(io::Error),
    WouldOverwriteInput,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BatchError::CouldntWalk(e) => write!(f, "couldn't walk directory: {}", e),
            BatchError::CouldntRead(e) => write!(f, "couldn't read file: {}", e),
            BatchError::CouldntCreateDir(e) => write!(f, "couldn't create directory: {}", e),
            BatchError::CouldntWrite(e) => write!(f, "couldn't write file: {}", e),
            BatchError::WouldOverwriteInput => write!(f, "output would overwrite input"),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::CouldntWalk(e) => Some(e),
            BatchError::CouldntRead(e) => Some(e),
            BatchError::CouldntCreateDir(e) => Some(e),
            BatchError::CouldntWrite(e) => Some(e),
            BatchError::WouldOverwriteInput => None,
        }
    }
}
