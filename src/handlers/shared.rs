use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// Error payload returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessBody {
    pub success: bool,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    /// `{ "success": true }` for operations with nothing to return.
    pub fn done() -> HttpResponse {
        HttpResponse::Ok().json(SuccessBody { success: true })
    }
}
