//! Portfolio Contact - terminal contact form
//!
//! Shows the owner's contact channels, then collects a name, email, and message and
//! relays them to the configured mail service. Logs go to stderr; stdout is the form.

use anyhow::Result;
use portfolio_contact::domain::FieldErrors;
use portfolio_contact::form::{FormListener, Notice};
use portfolio_contact::{
    profile, AsyncRelayClient, Config, ContactForm, ContactSubmission, FormError, FormField,
    Metrics, RelayClient, SubmissionOutcome,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Prints form side effects the way the page shows them: inline errors and alerts.
struct TerminalListener;

impl FormListener for TerminalListener {
    fn on_field_errors(&self, errors: &FieldErrors) {
        for error in errors.iter() {
            println!("  {}: {}", error.field.label(), error.message);
        }
    }

    fn on_notice(&self, notice: Notice) {
        match notice {
            Notice::Sent => println!("\n[ok] {}\n", notice),
            Notice::RetryLater => println!("\n[!] {}\n", notice),
        }
    }
}

type Input = Lines<BufReader<Stdin>>;

/// Print a prompt and read one line; `None` on end of input.
async fn ask(input: &mut Input, prompt: &str) -> Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(prompt.as_bytes()).await?;
    stdout.flush().await?;
    Ok(input.next_line().await?)
}

/// Ask a yes/no question, defaulting to no.
async fn confirm(input: &mut Input, question: &str) -> Result<bool> {
    let answer = ask(input, &format!("{} [y/N] ", question)).await?;
    Ok(matches!(
        answer.as_deref().map(str::trim),
        Some("y") | Some("Y") | Some("yes")
    ))
}

/// Fill the form field by field. Enter keeps the current value. Returns false on end of input.
async fn fill(form: &mut ContactForm, input: &mut Input) -> Result<bool> {
    for field in FormField::ALL {
        let current = form.value(field).to_string();
        let prompt = if current.is_empty() {
            format!("{}: ", field.label())
        } else {
            format!("{} [{}]: ", field.label(), current)
        };

        match ask(input, &prompt).await? {
            None => return Ok(false),
            Some(line) if line.trim().is_empty() && !current.is_empty() => {}
            Some(line) => form.set_field(field, line),
        }
    }
    Ok(true)
}

async fn run(submission: &ContactSubmission, config: &Config) -> Result<()> {
    println!("Get In Touch\n");
    for channel in profile::channels(config) {
        println!("  {:<9} {}  <{}>", channel.title, channel.value, channel.link);
    }
    println!();

    let mut form = ContactForm::new();
    form.add_listener(Arc::new(TerminalListener));
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if !fill(&mut form, &mut input).await? {
            return Ok(());
        }

        match form.submit(submission).await {
            Ok(SubmissionOutcome::Sent(_)) => {
                if !confirm(&mut input, "Send another message?").await? {
                    return Ok(());
                }
            }
            Ok(SubmissionOutcome::Failed(_)) => {
                if !confirm(&mut input, "Edit and try again?").await? {
                    return Ok(());
                }
            }
            Err(FormError::Invalid(_)) => println!(),
            Err(e) => warn!("Submission not started: {}", e),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only so the form owns stdout)
    let fallback = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Relaying contact messages to {}", config.relay_endpoint);

    let metrics = Metrics::new();
    let relay = AsyncRelayClient::new(RelayClient::new(&config).with_metrics(metrics.clone()));
    let submission = ContactSubmission::new(Arc::new(relay)).with_metrics(metrics.clone());

    run(&submission, &config).await?;

    info!("Session finished: {:?}", metrics.summary());
    Ok(())
}
