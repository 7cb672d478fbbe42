use honggfuzz::fuzz;

use base32check::base32::{decode, encode};

fn main() {
    loop {
        fuzz!(|data: &str| {
            if let Ok(decoded) = decode(data) {
                assert_eq!(encode(&decoded).len(), data.len());
            }
        });
    }
}
