use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// How long to wait for a stream to hit EOF once the child is gone.
/// A grandchild can inherit the pipe and keep it open past the kill.
const DRAIN_GRACE: Duration = Duration::from_secs(1);

/// Drains one child stream in the background so the child never blocks on a full pipe
pub(super) struct OutputCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
    task: JoinHandle<()>,
}

impl OutputCapture {
    pub(super) fn spawn<R>(mut reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = buffer.clone();

        let task = tokio::spawn(async move {
            let mut chunk = [0u8; 4096];
            loop {
                match reader.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => sink.lock().await.extend_from_slice(&chunk[..n]),
                }
            }
        });

        Self { buffer, task }
    }

    /// Everything read so far, lossily decoded
    pub(super) async fn finish(self) -> String {
        let Self { buffer, mut task } = self;

        if tokio::time::timeout(DRAIN_GRACE, &mut task).await.is_err() {
            task.abort();
        }

        let bytes = buffer.lock().await;
        let text = String::from_utf8_lossy(&bytes).trim_end().to_string();
        text
    }
}

/// Finish an optional capture, empty when the stream was not piped
pub(super) async fn finish(capture: Option<OutputCapture>) -> String {
    match capture {
        Some(capture) => capture.finish().await,
        None => String::new(),
    }
}
