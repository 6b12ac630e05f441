// Standard library
use std::net::{IpAddr, Ipv4Addr};

/// Number of numerical labels in a dotted-quad address.
const IPV4_LABELS: usize = 4;

/// Trims a zero padded IPv4 address, e.g. "001.001.001.001" becomes "1.1.1.1".
///
/// This is not a validator. Anything that does not look like four numeric
/// labels is returned as is. A label of 0 and a label outside of 1..=255 both
/// end up as a zero byte.
pub fn normalize_ipv4(raw: &str) -> String {
    // Already canonical.
    if let Ok(ip) = raw.parse::<IpAddr>() {
        if ip.to_string() == raw {
            return raw.to_string();
        }
    }

    let labels: Vec<&str> = raw.split('.').collect();
    if labels.len() != IPV4_LABELS {
        return raw.to_string();
    }

    let mut octets = [0u8; IPV4_LABELS];
    for (index, label) in labels.iter().enumerate() {
        let value: i64 = match label.parse() {
            Ok(value) => value,
            Err(_) => return raw.to_string(),
        };

        if value > 0 {
            if let Ok(byte) = u8::try_from(value) {
                octets[index] = byte;
            }
        }
    }

    Ipv4Addr::from(octets).to_string()
}
