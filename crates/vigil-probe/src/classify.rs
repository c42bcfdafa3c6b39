//! Outcome classification.
//!
//! Maps a raw probe result plus a check's expectations into an
//! `Outcome`. Pure; no I/O.

use vigil_core::CheckSpec;

use crate::prober::RawResult;

/// Classified result of one probe.
///
/// Mismatch variants carry the observed value so the scheduler can log
/// it alongside the check identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Status and body matched expectations.
    Healthy,
    /// Observed status differed from the expected one.
    WrongStatus(u16),
    /// Status matched but the trimmed body did not.
    WrongBody(String),
    /// The probe did not complete (transport failure or timeout).
    Error(String),
}

impl Outcome {
    /// Gauge value published for this outcome: 1 healthy, 0 otherwise.
    pub fn gauge_value(&self) -> u8 {
        match self {
            Outcome::Healthy => 1,
            _ => 0,
        }
    }
}

/// Classify a raw probe result against a check's expectations.
///
/// Status is authoritative: a status mismatch is reported even when
/// the body would also have mismatched. The body comparison trims
/// surrounding whitespace and is skipped when the check declares no
/// expected response.
pub fn classify(check: &CheckSpec, raw: &RawResult) -> Outcome {
    match raw {
        RawResult::Failed(reason) => Outcome::Error(reason.clone()),
        RawResult::Response { status, body } => {
            if *status != check.status {
                Outcome::WrongStatus(*status)
            } else if let Some(expected) = &check.response {
                if body.trim() != expected {
                    Outcome::WrongBody(body.clone())
                } else {
                    Outcome::Healthy
                }
            } else {
                Outcome::Healthy
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(status: u16, response: Option<&str>) -> CheckSpec {
        CheckSpec {
            name: "web".to_string(),
            url: "http://localhost/".to_string(),
            status,
            response: response.map(str::to_string),
            interval: None,
        }
    }

    fn response(status: u16, body: &str) -> RawResult {
        RawResult::Response {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn matching_status_and_body_is_healthy() {
        let outcome = classify(&check(200, Some("OK")), &response(200, "OK\n"));
        assert_eq!(outcome, Outcome::Healthy);
        assert_eq!(outcome.gauge_value(), 1);
    }

    #[test]
    fn wrong_status() {
        let outcome = classify(&check(200, Some("OK")), &response(503, "OK"));
        assert_eq!(outcome, Outcome::WrongStatus(503));
        assert_eq!(outcome.gauge_value(), 0);
    }

    #[test]
    fn wrong_body() {
        let outcome = classify(&check(200, Some("OK")), &response(200, "FAIL"));
        assert_eq!(outcome, Outcome::WrongBody("FAIL".to_string()));
        assert_eq!(outcome.gauge_value(), 0);
    }

    #[test]
    fn transport_failure_is_error() {
        let outcome = classify(
            &check(200, Some("OK")),
            &RawResult::Failed("connection refused".to_string()),
        );
        assert_eq!(outcome, Outcome::Error("connection refused".to_string()));
        assert_eq!(outcome.gauge_value(), 0);
    }

    #[test]
    fn status_checked_before_body() {
        // Both mismatch; status wins.
        let outcome = classify(&check(200, Some("OK")), &response(503, "FAIL"));
        assert_eq!(outcome, Outcome::WrongStatus(503));
    }

    #[test]
    fn body_not_checked_without_expectation() {
        let outcome = classify(&check(200, None), &response(200, "anything"));
        assert_eq!(outcome, Outcome::Healthy);
    }

    #[test]
    fn non_default_expected_status() {
        let outcome = classify(&check(204, None), &response(204, ""));
        assert_eq!(outcome, Outcome::Healthy);
    }

    #[test]
    fn body_trimmed_both_sides() {
        let outcome = classify(&check(200, Some("pong")), &response(200, "  pong \r\n"));
        assert_eq!(outcome, Outcome::Healthy);
    }
}
