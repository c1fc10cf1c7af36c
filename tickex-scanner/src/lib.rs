//! Native scanning client for the Tickex demo.
//!
//! A camera seam implementation that feeds still images through the
//! polling loop in `tickex-core`, an optional QR decode capability, and
//! the HTTP client that submits decoded payloads to the verification
//! endpoint.

pub mod api_client;
pub mod camera;
#[cfg(feature = "qr")]
pub mod decode;

pub use api_client::ApiClient;
pub use camera::StillCamera;
#[cfg(feature = "qr")]
pub use decode::QrDecoder;
