use super::Command;
use crate::config::Config;
use crate::error::{OptionExt, Result, WrapErr};
use async_trait::async_trait;
use contact::{ContactSink, ContactSubmission, DeliveryError, EmailServiceKeys, Notification, SendRequest};
use std::path::PathBuf;
use std::sync::Mutex;

/// Keeps the rendered request instead of posting it.
#[derive(Default)]
struct DryRunSink {
    rendered: Mutex<Vec<String>>,
}

#[async_trait]
impl ContactSink for DryRunSink {
    async fn deliver(&self, request: &SendRequest<'_>) -> std::result::Result<(), DeliveryError> {
        let json = request.to_json()?;
        self.rendered
            .lock()
            .map_err(|_| DeliveryError::Unreachable("dry-run sink poisoned".into()))?
            .push(json);
        Ok(())
    }
}

async fn dry_run(keys: &EmailServiceKeys, submission: &ContactSubmission) -> (Vec<String>, Notification) {
    let sink = DryRunSink::default();
    let notification = contact::submit(&sink, keys, submission).await;
    let rendered = sink.rendered.into_inner().unwrap_or_default();
    (rendered, notification)
}

pub struct ContactCommand {
    config: Config,
    submission: PathBuf,
}

impl ContactCommand {
    pub fn new(cfg: Config, submission: PathBuf) -> Self {
        Self { config: cfg, submission }
    }
}

#[async_trait]
impl Command for ContactCommand {
    async fn execute(&self) -> Result<()> {
        let keys = self
            .config
            .contact
            .as_ref()
            .ok_or_eyre("No [contact] keys in the configuration file")?;
        let content = std::fs::read_to_string(&self.submission)
            .wrap_err_with(|| format!("Read {} error", self.submission.display()))?;
        let submission: ContactSubmission =
            serde_json::from_str(&content).wrap_err("Parse contact submission error")?;

        let (rendered, notification) = dry_run(keys, &submission).await;
        for request in rendered {
            println!("{request}");
        }
        eprintln!("{}", notification.message());
        Ok(())
    }
}
