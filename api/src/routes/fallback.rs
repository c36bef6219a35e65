use crate::errors::ApiError;

/// Any path other than `/`
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// A known path hit with the wrong method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
