//! Background bug report delivery.

use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Reports waiting for delivery. A full queue drops new reports.
const QUEUE_CAPACITY: usize = 32;

/// How long [`BugReportService::shutdown`] waits for the queue to drain.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

/// Queued, best-effort bug report delivery.
///
/// Construct once at startup and pass explicitly to whoever reports.
/// [`BugReportService::enqueue`] never blocks; a background task posts each
/// report to the API and swallows failures. No ordering or delivery
/// guarantee: queued reports are lost if the process exits before the
/// worker drains them.
pub struct BugReportService {
    tx: Mutex<Option<mpsc::Sender<String>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl BugReportService {
    /// Spawns the delivery worker. Must be called within a tokio runtime.
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
        let worker = tokio::spawn(deliver_loop(
            rx,
            api_url.into(),
            api_key.into(),
            application.into(),
        ));

        Self {
            tx: Mutex::new(Some(tx)),
            worker: Mutex::new(Some(worker)),
        }
    }

    /// Queues a report body. Never blocks; drops the report when the queue
    /// is full or the service has been shut down.
    pub fn enqueue(&self, report_text: String) {
        match self.tx.lock().unwrap().as_ref() {
            Some(tx) => {
                if let Err(e) = tx.try_send(report_text) {
                    debug!(error = %e, "bug report dropped");
                }
            }
            None => debug!("bug report service closed, report dropped"),
        }
    }

    /// Stops accepting reports and gives the worker a moment to drain.
    pub async fn shutdown(&self) {
        let tx = self.tx.lock().unwrap().take();
        drop(tx);

        let worker = self.worker.lock().unwrap().take();
        if let Some(worker) = worker
            && tokio::time::timeout(SHUTDOWN_GRACE, worker).await.is_err()
        {
            debug!("bug report worker still busy at shutdown, abandoning queue");
        }
    }
}

async fn deliver_loop(
    mut rx: mpsc::Receiver<String>,
    api_url: String,
    api_key: String,
    application: String,
) {
    let client = reqwest::Client::new();
    while let Some(text) = rx.recv().await {
        if let Err(e) = deliver(&client, &api_url, &api_key, &application, &text).await {
            debug!(error = %e, "bug report delivery failed");
        }
    }
}

async fn deliver(
    client: &reqwest::Client,
    api_url: &str,
    api_key: &str,
    application: &str,
    text: &str,
) -> Result<(), reqwest::Error> {
    let payload = serde_json::json!({
        "message": text,
        "applicationName": application,
    });

    let response = client
        .post(api_url)
        .header("X-API-KEY", api_key)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(payload.to_string())
        .send()
        .await?;
    response.error_for_status()?;

    Ok(())
}
