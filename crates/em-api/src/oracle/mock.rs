//! Mock oracle for testing — replies with a canned hint or failure.

use std::sync::Mutex;

use async_trait::async_trait;
use em_protocol::hint::ExtractionHint;

use super::{Oracle, OracleError, OracleResult};

enum Reply {
    Hint(ExtractionHint),
    Unparseable(String),
}

/// An oracle that returns the same reply to every query and records the
/// texts it was asked about.
pub struct StaticOracle {
    reply: Reply,
    seen: Mutex<Vec<String>>,
}

impl StaticOracle {
    /// Always answer with `hint`.
    pub fn replying(hint: ExtractionHint) -> Self {
        Self {
            reply: Reply::Hint(hint),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Always fail as if the model returned `raw`, which is not valid JSON.
    pub fn unparseable(raw: impl Into<String>) -> Self {
        Self {
            reply: Reply::Unparseable(raw.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Texts received so far, oldest first.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Oracle for StaticOracle {
    async fn extract(&self, text: &str) -> OracleResult<ExtractionHint> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(text.to_string());
        }
        match &self.reply {
            Reply::Hint(hint) => Ok(hint.clone()),
            Reply::Unparseable(raw) => Err(OracleError::Parse {
                message: "expected value at line 1 column 1".into(),
                raw: raw.clone(),
            }),
        }
    }

    fn provider_name(&self) -> &str {
        "static"
    }
}
