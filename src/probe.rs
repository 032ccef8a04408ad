use crate::config::ProbeConfig;
use crate::errors::ProbeError;
use crate::event::ProbeEvent;
use crate::net::{fetch_streaming, ProbeResponse};
use crate::report::Reporter;

/// A configured, ready-to-run probe.
///
/// One [`run`](Probe::run) issues exactly one request: redirects are not
/// followed, there is no retry and no cancellation. Without a configured timeout the run waits for as long as
/// the server keeps the connection open.
pub struct Probe {
    client: reqwest::Client,
    config: ProbeConfig,
}

impl Probe {
    pub fn new(config: ProbeConfig) -> Result<Self, ProbeError> {
        // Report the first response head as-is, never chase a Location
        let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(ua) = &config.user_agent {
            builder = builder.user_agent(ua.as_str());
        }
        let client = builder.build().map_err(ProbeError::Client)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Runs the probe, feeding every outcome to `reporter` as it happens.
    ///
    /// Transport failures are reported as [`ProbeEvent::Error`] *and* returned,
    /// so callers can decide whether they matter. HTTP error statuses are a
    /// normal `Ok` response.
    pub async fn run<R>(&self, reporter: &mut R) -> Result<ProbeResponse, ProbeError>
    where
        R: Reporter + ?Sized,
    {
        reporter.on_event(&ProbeEvent::Started {
            url: self.config.url.clone(),
        });

        let res = fetch_streaming(&self.client, self.config.url.clone(), |code| {
            reporter.on_event(&ProbeEvent::Status { code })
        })
        .await;

        match res {
            Ok(resp) => {
                reporter.on_event(&ProbeEvent::Data {
                    snippet: resp.snippet(self.config.max_snippet_chars),
                });
                Ok(resp)
            }
            Err(e) => {
                let err = ProbeError::Transport(e);
                let message = err.report_message();
                log::debug!("probe of {} failed: {message}", self.config.url);
                reporter.on_event(&ProbeEvent::Error { message });
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_keeps_config() {
        let cfg = ProbeConfig::builder()
            .timeout(Duration::from_secs(3))
            .user_agent("probe-test")
            .build()
            .unwrap();
        let probe = Probe::new(cfg.clone()).unwrap();
        assert_eq!(probe.config(), &cfg);
    }

    #[test]
    fn invalid_user_agent_fails_client_construction() {
        let cfg = ProbeConfig::builder().user_agent("bad\nagent").build().unwrap();
        let err = Probe::new(cfg).err().expect("client build should fail");
        assert!(matches!(err, ProbeError::Client(_)));
        assert!(err.report_message().starts_with("Cannot build HTTP client"));
    }
}
