pub mod http;
pub mod info_log;
pub mod ip_detector;
pub mod normalizer;
