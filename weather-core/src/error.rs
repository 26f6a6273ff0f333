use reqwest::StatusCode;
use thiserror::Error;

/// Which upstream hop failed: the points call resolves coordinates to a
/// forecast endpoint, the forecast call fetches the period list from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamCall {
    Points,
    Forecast,
}

impl UpstreamCall {
    pub const fn as_str(self) -> &'static str {
        match self {
            UpstreamCall::Points => "points",
            UpstreamCall::Forecast => "forecast",
        }
    }
}

impl std::fmt::Display for UpstreamCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures raised while resolving a forecast.
///
/// These carry enough detail for server-side logs; the HTTP layer answers
/// the caller with a generic message and never puts them on the wire.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The network call errored or timed out before a response arrived.
    #[error("{call} request failed: {source}")]
    UpstreamUnavailable {
        call: UpstreamCall,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success HTTP status.
    #[error("{call} request returned status {status}: {body}")]
    UpstreamBadStatus {
        call: UpstreamCall,
        status: StatusCode,
        body: String,
    },

    /// The body could not be decoded, or an expected field was absent.
    #[error("failed to decode {call} response: {detail}")]
    UpstreamMalformedResponse { call: UpstreamCall, detail: String },

    /// The upstream returned an empty period list.
    #[error("no forecast periods available")]
    NoForecastAvailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_call_labels() {
        assert_eq!(UpstreamCall::Points.to_string(), "points");
        assert_eq!(UpstreamCall::Forecast.to_string(), "forecast");
    }

    #[test]
    fn error_messages_name_the_failing_call() {
        let err = ForecastError::UpstreamBadStatus {
            call: UpstreamCall::Points,
            status: StatusCode::FORBIDDEN,
            body: "missing user agent".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("points"));
        assert!(msg.contains("403"));

        let err = ForecastError::UpstreamMalformedResponse {
            call: UpstreamCall::Forecast,
            detail: "expected value".to_string(),
        };
        assert!(err.to_string().contains("forecast"));
    }
}
