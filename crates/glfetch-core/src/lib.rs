pub mod config;
pub mod logging;

pub mod credential;
pub mod error;
pub mod fetcher;
pub mod request;
pub mod transport;

pub use credential::AuthToken;
pub use error::FetchError;
pub use fetcher::{BytesWritten, FileFetcher};
pub use request::{DownloadRequest, PathEncoding};
