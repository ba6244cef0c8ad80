//! npm dependency installation for `config-pws`
//!
//! Installs the Sails runtime packages the generated config relies on. A
//! failed install is reported and skipped; the remaining packages are still
//! attempted and the overall command succeeds regardless.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::cli::output;

/// Packages the generated development config depends on at runtime.
pub const PACKAGES: [&str; 3] = ["connect-redis@1.4.5", "sails-postgresql", "socket.io-redis"];

/// Run `npm install <pkg> --save --save-exact` for each fixed package.
pub async fn install_packages(project_dir: &Path) {
    for (index, package) in PACKAGES.iter().enumerate() {
        output::step(
            index + 1,
            PACKAGES.len(),
            &format!("Installing {}", package),
        );

        let result = Command::new("npm")
            .args(["install", package, "--save", "--save-exact"])
            .current_dir(project_dir)
            .stdout(Stdio::inherit())
            .status()
            .await;

        match result {
            Ok(status) if status.success() => {}
            Ok(status) => {
                output::warning(&format!("Error installing {}: {}", package, status));
            }
            Err(err) => {
                output::warning(&format!("Error installing {}: {}", package, err));
            }
        }
    }
}
