use crate::errata::domain::ErratumPayload;
use crate::ports::outbound::ErratumPublisher;
use crate::shared::error::ErrataError;
use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

/// PulpAdminPublisher adapter invoking `pulp-admin rpm repo uploads erratum`
///
/// The package and reference rows are staged as header-less CSV files in
/// `work_dir`. Both files are temporary handles removed when they go out of
/// scope, whatever the outcome of the command.
pub struct PulpAdminPublisher {
    command: String,
    work_dir: PathBuf,
}

impl PulpAdminPublisher {
    pub fn new(command: impl Into<String>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            work_dir: work_dir.into(),
        }
    }

    fn stage<T: Serialize>(&self, rows: &[T], prefix: &str, suffix: &str) -> Result<NamedTempFile> {
        let file = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(suffix)
            .tempfile_in(&self.work_dir)
            .with_context(|| format!("Failed to create staging file in {}", self.work_dir.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(file.path())?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        Ok(file)
    }

    /// Runs the tool with captured output so nothing it prints reaches our
    /// stdout
    fn invoke(&self, advisory_id: &str, args: &[String]) -> Result<Output> {
        let output = Command::new(&self.command)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ErrataError::PublishFailed {
                advisory_id: advisory_id.to_string(),
                details: format!("could not run {}: {}", self.command, e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            tracing::debug!(advisory = advisory_id, output = %stdout.trim(), "publishing tool output");
        }
        Ok(output)
    }
}

/// Builds the argument list passed after the program name
fn command_args(payload: &ErratumPayload, references_csv: &Path, packages_csv: &Path) -> Vec<String> {
    vec![
        "rpm".to_string(),
        "repo".to_string(),
        "uploads".to_string(),
        "erratum".to_string(),
        format!("--title={}", payload.title),
        format!("--description={}", payload.description),
        format!("--version={}", payload.version),
        format!("--release={}", payload.release_tag),
        format!("--type={}", payload.advisory_type),
        format!("--severity={}", payload.severity),
        format!("--status={}", payload.status),
        format!("--updated={}", payload.updated),
        format!("--issued={}", payload.issued),
        format!("--reference-csv={}", references_csv.display()),
        format!("--pkglist-csv={}", packages_csv.display()),
        format!("--from={}", payload.contact_email),
        format!("--repo-id={}", payload.publish_target_id),
        format!("--erratum-id={}", payload.advisory_id),
    ]
}

impl ErratumPublisher for PulpAdminPublisher {
    fn publish(&self, payload: &ErratumPayload) -> Result<()> {
        let prefix = format!("{}.", payload.advisory_id);
        let packages_csv = self.stage(&payload.packages, &prefix, ".packages.csv")?;
        let references_csv = self.stage(&payload.references, &prefix, ".references.csv")?;

        let args = command_args(payload, references_csv.path(), packages_csv.path());
        tracing::debug!(
            advisory = %payload.advisory_id,
            repository = %payload.repository_label,
            command = %self.command,
            "invoking publishing tool"
        );

        let output = self.invoke(&payload.advisory_id, &args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let details = match stderr.trim() {
                "" => format!("{} exited with {}", self.command, output.status),
                stderr => format!("{} exited with {}: {}", self.command, output.status, stderr),
            };
            return Err(ErrataError::PublishFailed {
                advisory_id: payload.advisory_id.clone(),
                details,
            }
            .into());
        }

        Ok(())
    }
}
