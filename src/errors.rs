use thiserror::Error;

/// Moonscribe errors
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("未找到环境变量 {var}")]
    ConfigurationMissing { var: String },
    #[error("{0}")]
    RequestFailure(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ChatError::RequestFailure(format!("request timed out: {}", e))
        } else {
            ChatError::RequestFailure(e.to_string())
        }
    }
}

/// Shorten an upstream body so it fits in an error message.
pub(crate) fn truncate(s: &str) -> String {
    const MAX: usize = 512;
    if s.len() > MAX {
        let end = s
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|&i| i <= MAX)
            .last()
            .unwrap_or(MAX);
        format!("{}… ({} bytes)", &s[..end], s.len())
    } else {
        s.to_string()
    }
}
