use error_common::{codes, MediDoctorError};
use thiserror::Error;

use crate::operation::Operation;

/// Closed set of failure kinds callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network unreachable, DNS, timeout, body read interrupted
    TransportFailure,
    /// Backend answered with a non-2xx status
    HttpFailure,
    /// 2xx answer whose body does not match the expected shape
    DecodeFailure,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{operation}: backend request failed: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{}", http_failure_message(.operation, .detail))]
    Http {
        operation: Operation,
        status: u16,
        detail: Option<String>,
    },

    #[error("{operation}: unexpected response body: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },
}

fn http_failure_message(operation: &Operation, detail: &Option<String>) -> String {
    detail
        .clone()
        .unwrap_or_else(|| operation.failure_message().to_string())
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport { .. } => ErrorKind::TransportFailure,
            ApiError::Http { .. } => ErrorKind::HttpFailure,
            ApiError::Decode { .. } => ErrorKind::DecodeFailure,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            ApiError::Transport { operation, .. }
            | ApiError::Http { operation, .. }
            | ApiError::Decode { operation, .. } => *operation,
        }
    }

    /// HTTP status for [`ErrorKind::HttpFailure`]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::TransportFailure => codes::gateway::TRANSPORT_FAILURE,
            ErrorKind::HttpFailure => codes::gateway::HTTP_FAILURE,
            ErrorKind::DecodeFailure => codes::gateway::DECODE_FAILURE,
        }
    }
}

impl From<ApiError> for MediDoctorError {
    fn from(err: ApiError) -> Self {
        MediDoctorError::gateway(err.code(), err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
