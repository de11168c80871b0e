//! Command implementations behind the CLI.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::CommandFactory;

use crate::build_info::BuildInfo;
use crate::cli::{Cli, DiffArgs};
use crate::client::CleverClient;
use crate::config::{App, Settings};
use crate::error::Result;
use crate::mail::{ReportSender, SmtpReportSender};
use crate::report::MissingReport;
use crate::roster::Roster;
use crate::traits::DEFAULT_PAGE_LIMIT;
use crate::transport::RetryingTransport;

/// Everything a finished diff produced.
#[derive(Debug, Clone)]
pub struct DiffOutcome {
    pub report: MissingReport,
    pub accelerator: Roster,
    pub growth: Roster,
    /// Where the JSON report was written, when requested.
    pub json_path: Option<PathBuf>,
}

/// Load settings through `lookup`, set up report mail and run [`diff`].
///
/// Settings are resolved before the transport is used, so incomplete
/// credentials fail without any request, token exchange included. A mail
/// relay that cannot be set up is logged and delivery is skipped.
///
/// # Errors
///
/// Returns [`RosterError::ConfigMissing`](crate::RosterError::ConfigMissing)
/// for incomplete credentials, otherwise whatever [`diff`] returns.
pub async fn diff_with_lookup<F>(
    lookup: F,
    transport: Arc<RetryingTransport>,
    args: &DiffArgs,
    out_dir: &Path,
) -> Result<DiffOutcome>
where
    F: Fn(&str) -> Option<String>,
{
    let settings = Settings::from_lookup(lookup)?;

    let sender = match settings.mail.clone().map(SmtpReportSender::new) {
        Some(Ok(sender)) => Some(sender),
        Some(Err(e)) => {
            tracing::error!(error = %e, "unable to set up report mail");
            None
        }
        None => None,
    };

    diff(
        &settings,
        transport,
        args,
        sender.as_ref().map(|s| s as &dyn ReportSender),
        out_dir,
    )
    .await
}

/// Fetch the district's roster through both apps and report the difference.
///
/// Both rosters must be fetched completely; any fetch error aborts the run.
/// A delivery failure is logged and otherwise ignored, while a failure to
/// write the requested JSON file is returned.
///
/// # Errors
///
/// Returns authentication, fetch and JSON persistence errors.
#[tracing::instrument(skip(settings, transport, sender, out_dir), fields(district = %args.district))]
pub async fn diff(
    settings: &Settings,
    transport: Arc<RetryingTransport>,
    args: &DiffArgs,
    sender: Option<&dyn ReportSender>,
    out_dir: &Path,
) -> Result<DiffOutcome> {
    tracing::info!("processing district with Clever ID {}", args.district);

    let accelerator = fetch_roster(&transport, settings, App::Accelerator, &args.district).await?;
    let growth = fetch_roster(&transport, settings, App::Growth, &args.district).await?;

    let report = MissingReport::between(&args.district, &growth, &accelerator);
    tracing::info!(
        students = report.missing_students.len(),
        teachers = report.missing_teachers.len(),
        schools = report.missing_schools.len(),
        "roster comparison finished"
    );

    match sender {
        Some(sender) => {
            if let Err(e) = sender.send_report(&report).await {
                tracing::error!(error = %e, "unable to send summary email message");
            }
        }
        None => tracing::warn!("mail settings incomplete, summary email not sent"),
    }

    let json_path = if args.json {
        Some(report.write_json(out_dir)?)
    } else {
        None
    };

    Ok(DiffOutcome {
        report,
        accelerator,
        growth,
        json_path,
    })
}

async fn fetch_roster(
    transport: &Arc<RetryingTransport>,
    settings: &Settings,
    app: App,
    district_id: &str,
) -> Result<Roster> {
    let client = CleverClient::connect(Arc::clone(transport), settings, app, district_id).await?;
    tracing::info!(%app, "fetching roster");
    Roster::fetch(&client, DEFAULT_PAGE_LIMIT).await
}

/// Write the command overview shown for a bare invocation.
///
/// # Errors
///
/// Returns an I/O error if `out` cannot be written.
pub fn help(out: &mut impl Write) -> Result<()> {
    Cli::command().write_help(out)?;
    writeln!(out)?;
    Ok(())
}

/// The line printed by the `version` command.
pub fn version(build: &BuildInfo) -> String {
    format!("version {build}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use std::io;

    /// A writer whose every write fails.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_help_lists_commands() {
        let mut out = Vec::new();
        help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("diff"));
        assert!(text.contains("version"));
    }

    #[test]
    fn test_help_write_failure_is_returned() {
        let err = help(&mut ClosedPipe).unwrap_err();
        match err {
            RosterError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
