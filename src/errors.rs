use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Anything that went wrong on the wire: connect, DNS, reset, timeout or a
    /// body that could not be read to the end.
    #[error(transparent)]
    Transport(reqwest::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Cannot build HTTP client")]
    Client(#[source] reqwest::Error),
}

impl ProbeError {
    /// True when the server could not be reached at all (e.g. connection refused)
    pub fn is_connect(&self) -> bool {
        matches!(self, ProbeError::Transport(e) if e.is_connect())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ProbeError::Transport(e) if e.is_timeout())
    }

    /// Message with the whole source chain, joined by `": "`.
    ///
    /// reqwest only puts the top-level context in its `Display` output, the
    /// OS reason ("Connection refused") lives further down the chain.
    pub fn report_message(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            msg.push_str(": ");
            msg.push_str(&err.to_string());
            source = std::error::Error::source(err);
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_message_is_not_repeated() {
        let err = ProbeError::from(ConfigError::ZeroSnippet);
        assert!(!err.is_connect());
        assert!(!err.is_timeout());
        assert_eq!(
            err.report_message(),
            "max_snippet_chars must be at least 1"
        );
    }
}
