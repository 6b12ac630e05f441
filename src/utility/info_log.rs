// Standard library
use std::fmt;
use std::sync::Arc;

// 3rd party crates
use tokio::sync::RwLock;
use tracing::trace;

/// Prefix of each record in the log.
pub const LOG_PREFIX: &str = "[LOG]: ";

/// Append-only text record shown to the user with `--verbose`.
#[derive(Default)]
pub struct InfoLog {
    buffer: String,
}

impl InfoLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. Blank input is ignored.
    pub fn log(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        self.buffer.push_str(LOG_PREFIX);
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    pub fn get(&self) -> String {
        self.buffer.clone()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

/// Cloneable handle to a single [`InfoLog`].
#[derive(Clone, Default)]
pub struct SharedInfoLog(Arc<RwLock<InfoLog>>);

impl fmt::Debug for SharedInfoLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedInfoLog")
            .field("inner", &"<InfoLog>")
            .finish()
    }
}

impl SharedInfoLog {
    pub fn new() -> Self {
        Self(Arc::new(RwLock::new(InfoLog::new())))
    }

    pub async fn log(&self, text: &str) {
        trace!("info log: {}", text);
        self.0.write().await.log(text);
    }

    pub async fn get(&self) -> String {
        self.0.read().await.get()
    }

    pub async fn clear(&self) {
        self.0.write().await.clear();
    }
}
