//! Discrepancy report rendering and delivery.
//!
//! The HTML body is rendered with tera from a template embedded at compile
//! time and sent over SMTP with STARTTLS and PLAIN authentication, so the
//! app password is only ever sent over an encrypted connection.

use async_trait::async_trait;
use lettre::message::header::{ContentDisposition, ContentTransferEncoding, ContentType};
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tera::{Context, Tera};

use crate::config::MailSettings;
use crate::error::{RosterError, Result};
use crate::report::MissingReport;

const TEMPLATE_NAME: &str = "missing_report.html";
const TEMPLATE: &str = include_str!("../templates/missing_report.html");

/// Subject line of the report mail.
pub const SUBJECT: &str = "\u{1F575}\u{FE0F} Clever Discrepancy Report";

/// Render the report as an HTML fragment.
///
/// # Errors
///
/// Returns [`RosterError::Template`] if rendering fails.
pub fn render_summary(report: &MissingReport) -> Result<String> {
    let mut engine = Tera::default();
    engine.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;

    let mut context = Context::new();
    context.insert("district_name", &report.district_name);
    context.insert("district_id", &report.district_id);
    context.insert("missing_students", &report.missing_students);
    context.insert("missing_teachers", &report.missing_teachers);
    context.insert("missing_schools", &report.missing_schools);

    Ok(engine.render(TEMPLATE_NAME, &context)?)
}

/// Build the report mail: UTF-8 HTML, quoted-printable, shown inline.
///
/// # Errors
///
/// Returns [`RosterError::Mail`] if an address is invalid.
pub fn compose_message(settings: &MailSettings, html: String) -> Result<Message> {
    Message::builder()
        .from(
            settings
                .from
                .parse()
                .map_err(|e| RosterError::Mail(format!("invalid sender address: {e}")))?,
        )
        .to(settings
            .to
            .parse()
            .map_err(|e| RosterError::Mail(format!("invalid recipient address: {e}")))?)
        .subject(SUBJECT)
        .header(ContentType::TEXT_HTML)
        .header(ContentTransferEncoding::QuotedPrintable)
        .header(ContentDisposition::inline())
        .body(html)
        .map_err(|e| RosterError::Mail(format!("failed to build message: {e}")))
}

/// Delivers a finished report somewhere a person will read it.
#[async_trait]
pub trait ReportSender: Send + Sync {
    async fn send_report(&self, report: &MissingReport) -> Result<()>;
}

/// Sends the report by mail through an SMTP relay.
pub struct SmtpReportSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    settings: MailSettings,
}

impl std::fmt::Debug for SmtpReportSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpReportSender")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl SmtpReportSender {
    /// Create a sender for the configured relay.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Mail`] if the relay cannot be configured.
    pub fn new(settings: MailSettings) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .map_err(|e| RosterError::Mail(format!("invalid SMTP relay: {e}")))?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.from.clone(),
                settings.password.clone(),
            ))
            .authentication(vec![Mechanism::Plain])
            .build();

        Ok(Self {
            transport,
            settings,
        })
    }
}

#[async_trait]
impl ReportSender for SmtpReportSender {
    #[tracing::instrument(skip(self, report), fields(district = %report.district_id))]
    async fn send_report(&self, report: &MissingReport) -> Result<()> {
        let html = render_summary(report)?;
        let message = compose_message(&self.settings, html)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| RosterError::Mail(format!("SMTP send failed: {e}")))?;

        tracing::info!(to = %self.settings.to, "report mail sent");
        Ok(())
    }
}
