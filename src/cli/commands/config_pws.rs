//! treeline config-pws - Prepare a Sails project for PWS
//!
//! Writes the two environment config files, links `.cfignore` to
//! `.gitignore` so pushes honor the existing ignore rules, and installs the
//! npm packages the generated config needs.

use std::env;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::output;
use crate::core::{TreelineError, TreelineResult};
use crate::installer;
use crate::templates;

#[derive(Args)]
pub struct ConfigPwsArgs {
    /// Project directory
    #[arg(long, default_value = ".")]
    pub cwd: PathBuf,
}

pub async fn execute(args: ConfigPwsArgs) -> TreelineResult<()> {
    let project_dir = if args.cwd.is_absolute() {
        args.cwd.clone()
    } else {
        env::current_dir()?.join(&args.cwd)
    };

    write_artifacts(&project_dir)?;
    installer::install_packages(&project_dir).await;

    output::success("Project is ready for PWS. Deploy with 'cf treeline deploy'.");
    Ok(())
}

/// Write the config files and ignore link. Split out from `execute` so the
/// filesystem half stays testable without spawning npm.
fn write_artifacts(project_dir: &Path) -> TreelineResult<()> {
    for path in templates::write_config_files(project_dir)? {
        output::success(&format!("Updated {}", path.display()));
    }
    link_cfignore(project_dir)
}

/// Create `.cfignore -> .gitignore` unless `.cfignore` is already present.
///
/// `symlink_metadata` rather than `exists` so a dangling link from an earlier
/// run still counts as present instead of failing the re-link.
fn link_cfignore(project_dir: &Path) -> TreelineResult<()> {
    let link = project_dir.join(".cfignore");
    if link.symlink_metadata().is_ok() {
        return Ok(());
    }

    symlink(Path::new(".gitignore"), &link).map_err(|source| TreelineError::IgnoreLink {
        link: link.clone(),
        target: PathBuf::from(".gitignore"),
        source,
    })?;
    output::success("Linked .cfignore to .gitignore");
    Ok(())
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
