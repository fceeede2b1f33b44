//! Connect-status checking.

use reqwest::{Response, StatusCode};

use crate::error::{Error, Result};

/// Map a non-2xx connect status to its diagnostic label.
pub fn diagnostic_label(status: StatusCode) -> &'static str {
    match status.as_u16() {
        401 => "Unauthorized",
        403 => "Forbidden",
        406 => "Not Acceptable",
        413 => "A parameter list is too long",
        416 => "Range Unacceptable",
        420 => "Rate Limited",
        _ => "Unknown",
    }
}

/// Pass 2xx responses through; turn anything else into a
/// [`Error::ResponseStatus`] carrying the label and the verbatim body.
pub async fn check_response(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::ResponseStatus {
        status,
        label: diagnostic_label(status),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_labels() {
        let cases = [
            (401, "Unauthorized"),
            (403, "Forbidden"),
            (406, "Not Acceptable"),
            (413, "A parameter list is too long"),
            (416, "Range Unacceptable"),
            (420, "Rate Limited"),
            (404, "Unknown"),
            (500, "Unknown"),
        ];
        for (code, label) in cases {
            assert_eq!(
                diagnostic_label(StatusCode::from_u16(code).unwrap()),
                label,
                "status {code}"
            );
        }
    }

    #[test]
    fn test_error_message_carries_body() {
        let err = Error::ResponseStatus {
            status: StatusCode::UNAUTHORIZED,
            label: "Unauthorized",
            body: "bad token".into(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("Unauthorized"));
        assert!(rendered.contains("bad token"));
    }
}
