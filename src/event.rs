use std::fmt;
use url::Url;

/// Everything the probe has to tell the outside world, in the order it
/// happens. A run produces `Started` followed by either `Status` + `Data`,
/// `Status` + `Error` (body broke off) or just `Error` (never connected).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeEvent {
    /// About to issue the request
    Started { url: Url },
    /// Response head received, body not read yet
    Status { code: u16 },
    /// Body stream ended; holds the truncated, decoded body
    Data { snippet: String },
    /// Transport failure
    Error { message: String },
}

/// Renders the console line for the event (without the trailing newline).
impl fmt::Display for ProbeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeEvent::Started { .. } => write!(f, "Testing API..."),
            ProbeEvent::Status { code } => write!(f, "Status: {code}"),
            ProbeEvent::Data { snippet } => write!(f, "Data: {snippet}"),
            ProbeEvent::Error { message } => write!(f, "Error: {message}"),
        }
    }
}
