use spoken_time_protocol::{ErrorResponse, TimeRequest, TimeResponse};
use tracing::{info, warn};

use crate::converter::{BritishTimeConverter, TimeConverter};
use crate::error::ConversionError;

/// Request-level entry point for transports: converts a request and logs the outcome.
#[derive(Debug, Clone)]
pub struct TimeService<C = BritishTimeConverter> {
    converter: C,
}

impl TimeService<BritishTimeConverter> {
    /// Service over the built-in British rule table.
    pub fn british() -> Self {
        Self::new(BritishTimeConverter::new())
    }
}

impl<C: TimeConverter> TimeService<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Converts the request's time, echoing the original input in the response.
    pub fn convert_time(&self, request: &TimeRequest) -> Result<TimeResponse, ConversionError> {
        info!(time = %request.time, "converting time");

        match self.converter.parse_and_convert(&request.time) {
            Ok(spoken_form) => {
                info!(time = %request.time, spoken = %spoken_form, "converted time");
                Ok(TimeResponse::new(request.time.clone(), spoken_form))
            }
            Err(err) => {
                warn!(time = %request.time, error = %err, "time conversion failed");
                Err(err)
            }
        }
    }
}

/// Builds the failure envelope a transport returns for `err` at `path`.
///
/// Internal defects get a generic message so rule-table details do not leak.
pub fn error_response(err: &ConversionError, path: &str) -> ErrorResponse {
    if err.is_client_error() {
        ErrorResponse::bad_request(err.to_string(), path)
    } else {
        ErrorResponse::internal_error(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use spoken_time_protocol::Time;

    mock! {
        pub Converter {}

        impl TimeConverter for Converter {
            fn parse(&self, text: &str) -> Result<Time, ConversionError>;
            fn convert(&self, time: &Time) -> Result<String, ConversionError>;
        }
    }

    #[test]
    fn echoes_input_next_to_spoken_form() {
        let service = TimeService::british();
        let response = service
            .convert_time(&TimeRequest::new("6:32"))
            .expect("convert");

        assert_eq!(response, TimeResponse::new("6:32", "six thirty two"));
    }

    #[test]
    fn parses_before_converting() {
        let mut converter = MockConverter::new();
        converter
            .expect_parse()
            .withf(|text| text == "09:45")
            .times(1)
            .returning(|_| Ok(Time::new(9, 45)));
        converter
            .expect_convert()
            .withf(|time| *time == Time::new(9, 45))
            .times(1)
            .returning(|_| Ok("quarter to ten".to_string()));

        let service = TimeService::new(converter);
        let response = service
            .convert_time(&TimeRequest::new("09:45"))
            .expect("convert");
        assert_eq!(response.spoken_form, "quarter to ten");
    }

    #[test]
    fn stops_after_a_parse_failure() {
        let mut converter = MockConverter::new();
        converter
            .expect_parse()
            .returning(|text| Err(ConversionError::range(text)));
        converter.expect_convert().never();

        let service = TimeService::new(converter);
        let err = service
            .convert_time(&TimeRequest::new("25:00"))
            .unwrap_err();
        assert_eq!(err, ConversionError::range("25:00"));
    }

    #[test]
    fn client_errors_keep_their_message() {
        let err = ConversionError::range("12:60");
        let response = error_response(&err, "/api/v1/time/convert");

        assert_eq!(response.status, 400);
        assert_eq!(response.message, err.to_string());
        assert_eq!(response.path, "/api/v1/time/convert");
    }

    #[test]
    fn defects_are_reported_generically() {
        let err = ConversionError::NoRule(Time::new(3, 3));
        let response = error_response(&err, "/api/v1/time/convert");

        assert_eq!(response.status, 500);
        assert_eq!(response.error, "Internal Server Error");
        assert!(!response.message.contains("03:03"));
    }
}
