//! Converts handler panics into the standard 500 body.

use std::any::Any;

use anyhow::anyhow;
use axum::{
    body::Body,
    http::Response,
    response::IntoResponse,
};
use tower_http::catch_panic::ResponseForPanic;

use crate::errors::AppError;

/// Panic responder for `CatchPanicLayer`. In debug mode the panic payload is logged.
#[derive(Debug, Clone, Copy)]
pub struct PanicResponder {
    debug: bool,
}

impl PanicResponder {
    pub fn new(debug: bool) -> Self {
        PanicResponder { debug }
    }
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Body> {
        let cause = if self.debug {
            anyhow!("handler panicked: {}", panic_message(err.as_ref()))
        } else {
            anyhow!("handler panicked")
        };
        AppError::Internal(cause).into_response()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
