// Project imports
use crate::providers::IpProvider;
use crate::utility::info_log::SharedInfoLog;

/// Resolves the public IP address by asking providers until enough of them agree.
pub struct IpDetector {
    pub providers: Vec<Box<dyn IpProvider>>,
    pub info_log: SharedInfoLog,
    /// Fixed shuffle seed. `None` reseeds from the clock on every run.
    pub seed: Option<u64>,
}
