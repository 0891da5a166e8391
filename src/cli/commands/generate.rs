use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{self, Path, PathBuf},
};

use tracing::{info, instrument, warn};

use crate::{
    assets::{self, GOLANGCI_CONFIG},
    cli::{CliError, CommandResult, registry::Command, types::Invocation},
};

/// Owner read/write only.
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Builds the `generate` command.
///
/// # Example Usage
///
/// ```bash
/// lintcfg generate .
/// lintcfg generate ~/src/my-service
/// ```
pub fn command() -> Command {
    Command::new("generate", "Creates the .golangci.yml in specified path.")
        .with_arg("directory", "path to the directory", true)
        .with_example("lintcfg generate .")
        .with_example("lintcfg generate ~/src/my-service")
        .with_handler(run)
}

/// Writes the bundled config into the directory named by the first argument.
///
/// The dispatcher rejects a missing directory before this runs.
///
/// # Errors
///
/// * `CliError::PathResolution` - If the directory can't be made absolute
/// * `CliError::AssetRead` - If the config isn't bundled
/// * `CliError::Write` - If the file can't be written
fn run(_invocation: &mut Invocation<'_>, args: &[String]) -> CommandResult {
    let directory = args.first().ok_or_else(|| {
        CliError::MissingArgument("path to the directory should be specified".to_string())
    })?;

    write_asset(directory, GOLANGCI_CONFIG)?;
    Ok(())
}

/// Writes the bundled asset `name` to `<directory>/<name>`.
///
/// Relative directories resolve against the current working directory. The
/// directory must already exist. An existing file keeps its contents until
/// the new bytes are written. Its permissions are narrowed to owner
/// read/write when the caller owns it, otherwise a warning is logged.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// * `CliError::PathResolution` - If `directory` can't be made absolute
/// * `CliError::AssetRead` - If no asset called `name` is bundled
/// * `CliError::Write` - If the file can't be created or written
#[instrument]
pub fn write_asset(directory: &str, name: &str) -> Result<PathBuf, CliError> {
    let directory = path::absolute(directory).map_err(|source| CliError::PathResolution {
        path: directory.to_string(),
        source,
    })?;

    let data = assets::get(name)
        .ok_or_else(|| CliError::AssetRead(format!("asset '{name}' is not bundled")))?;

    let target = directory.join(name);
    write_owner_only(&target, data).map_err(|source| CliError::Write {
        path: target.clone(),
        source,
    })?;

    info!(path = %target.display(), bytes = data.len(), "Wrote config file");
    Ok(target)
}

fn write_owner_only(path: &Path, data: &[u8]) -> io::Result<()> {
    write_with(path, data, restrict_to_owner)
}

fn write_with(
    path: &Path,
    data: &[u8],
    restrict: fn(&File) -> io::Result<()>,
) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(false);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path)?;

    // A file owned by someone else can't be chmod'ed; its contents stay
    // untouched until here.
    if let Err(e) = restrict(&file) {
        warn!(
            path = %path.display(),
            error = %e,
            "Could not restrict config file permissions"
        );
    }

    file.set_len(0)?;
    file.write_all(data)
}

/// The creation mode only applies to new files.
#[cfg(unix)]
fn restrict_to_owner(file: &File) -> io::Result<()> {
    use std::{fs::Permissions, os::unix::fs::PermissionsExt};
    file.set_permissions(Permissions::from_mode(FILE_MODE))
}

#[cfg(not(unix))]
fn restrict_to_owner(_file: &File) -> io::Result<()> {
    Ok(())
}
