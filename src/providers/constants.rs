/// Keys of all known providers, as used in the `[providers]` settings.
pub const PROVIDER_KEYS: [&str; 5] = [
    IPINFOIO_KEY,
    INETIPINFO_KEY,
    INETCLUECOM_KEY,
    TOOLPAGEORG_KEY,
    IPIFYORG_KEY,
];

pub const IPINFOIO_KEY: &str = "ipinfoio";
pub const INETIPINFO_KEY: &str = "inetipinfo";
pub const INETCLUECOM_KEY: &str = "inetcluecom";
pub const TOOLPAGEORG_KEY: &str = "toolpageorg";
pub const IPIFYORG_KEY: &str = "ipifyorg";

/// Default endpoints
pub const IPINFOIO_URL: &str = "https://ipinfo.io/";
pub const INETIPINFO_URL: &str = "https://inet-ip.info/json";
pub const INETCLUECOM_URL: &str = "http://inetclue.com/";
pub const TOOLPAGEORG_URL: &str = "https://en.toolpage.org/tool/ip-address";
// Returns IPv4 or IPv6, whichever the caller connects with.
pub const IPIFYORG_URL: &str = "https://api64.ipify.org?format=json";
