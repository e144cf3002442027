/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! `awsJson1_1` request serialization and response parsing.
//!
//! Every operation is a `POST /` whose JSON body is the serialized input, routed by the
//! `X-Amz-Target` header. Failed responses carry an error code that selects the modeled error
//! to deserialize the body into.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use smithy_types::Error as GenericError;
use std::error::Error;
use std::fmt;
use tracing::{debug, trace};

pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

const TARGET_HEADER: &str = "x-amz-target";
const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Ties an operation to its input, output, and error types.
pub trait OperationShape {
    /// Operation name as it appears in the model.
    const NAME: &'static str;
    /// Value of the `X-Amz-Target` header.
    const TARGET: &'static str;

    type Input: Serialize;
    type Output: DeserializeOwned;
    type Error: ParseErrorResponse;
}

/// Builds an operation error out of a failed response.
pub trait ParseErrorResponse: Sized {
    /// `meta` holds the error code, message, and request ID already read from the response.
    fn from_error_response(meta: GenericError, body: &[u8]) -> Self;

    fn from_unhandled(err: BoxError) -> Self;
}

/// Failure to turn an input into a request.
#[derive(Debug)]
pub enum SerializationError {
    Json(serde_json::Error),
    Http(http::Error),
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationError::Json(_) => write!(f, "failed to serialize the request body"),
            SerializationError::Http(_) => write!(f, "failed to construct the HTTP request"),
        }
    }
}

impl Error for SerializationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SerializationError::Json(err) => Some(err),
            SerializationError::Http(err) => Some(err),
        }
    }
}

/// Serializes `input` into the request for operation `O`.
pub fn serialize_request<O: OperationShape>(
    input: &O::Input,
) -> Result<http::Request<Bytes>, SerializationError> {
    let body = serde_json::to_vec(input).map_err(SerializationError::Json)?;
    trace!(operation = O::NAME, body = %String::from_utf8_lossy(&body), "serialized request");
    http::Request::builder()
        .method(http::Method::POST)
        .uri("/")
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .header(TARGET_HEADER, O::TARGET)
        .body(Bytes::from(body))
        .map_err(SerializationError::Http)
}

/// Parses the response to operation `O`.
///
/// Success responses deserialize into the operation output; an empty body is treated as `{}`.
/// Any other status is turned into the operation error.
pub fn parse_response<O: OperationShape>(
    response: &http::Response<Bytes>,
) -> Result<O::Output, O::Error> {
    let body = response.body().as_ref();
    if !response.status().is_success() {
        let meta = parse_error_metadata(response.headers(), body);
        debug!(
            operation = O::NAME,
            status = response.status().as_u16(),
            code = ?meta.code(),
            request_id = ?meta.request_id(),
            "service returned an error"
        );
        return Err(O::Error::from_error_response(meta, body));
    }
    let body = if body.is_empty() { &b"{}"[..] } else { body };
    serde_json::from_slice(body).map_err(|err| O::Error::from_unhandled(err.into()))
}

#[derive(Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(rename = "__type", default)]
    type_: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(rename = "Message", default)]
    message_capitalized: Option<String>,
    #[serde(rename = "errorMessage", default)]
    error_message: Option<String>,
}

/// Reads the error code, message, and request ID out of a failed response.
///
/// The code comes from the `x-amzn-errortype` header, falling back to the `code` and then the
/// `__type` body field. Either way it's passed through [`sanitize_error_code`].
///
/// A body that isn't a JSON object contributes nothing; the headers are still read.
pub fn parse_error_metadata(headers: &http::HeaderMap, body: &[u8]) -> GenericError {
    let error_body = if body.is_empty() {
        ErrorBody::default()
    } else {
        serde_json::from_slice::<ErrorBody>(body).unwrap_or_else(|err| {
            debug!(error = %err, "error response body is not JSON");
            ErrorBody::default()
        })
    };
    let ErrorBody {
        code,
        type_,
        message,
        message_capitalized,
        error_message,
    } = error_body;

    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    let mut builder = GenericError::builder();
    if let Some(code) = header(ERROR_TYPE_HEADER).or(code).or(type_) {
        builder = builder.code(sanitize_error_code(&code));
    }
    if let Some(message) = message.or(message_capitalized).or(error_message) {
        builder = builder.message(message);
    }
    if let Some(request_id) = header(REQUEST_ID_HEADER) {
        builder = builder.request_id(request_id);
    }
    builder.build()
}

/// Strips a namespace prefix (`aws.glue#`) and a trailing URL (`:http://...`) from an error code.
pub fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}
