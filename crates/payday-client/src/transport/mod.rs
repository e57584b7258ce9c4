//! Transport layer: the seam between typed API calls and the wire.

pub mod http_client;
pub mod protocol;

pub use http_client::HttpClient;
pub use protocol::{ApiRequest, ApiResponse, Method};

use crate::errors::TransportError;

/// Executes one request against the API. `Ok` means an HTTP response came
/// back, whatever its status; `Err` means none did.
pub trait HttpTransport: Send + Sync {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        (**self).execute(request)
    }
}
