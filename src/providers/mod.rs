pub mod constants;
pub mod errors;
pub mod functions;
pub mod inetcluecom;
pub mod inetipinfo;
pub mod ipifyorg;
pub mod ipinfoio;
pub mod toolpageorg;
pub mod traits;

pub use errors::ProviderError;
pub use traits::IpProvider;
