use honggfuzz::fuzz;

use base32check::{decode, decode_prefixed, decode_versioned};

fn main() {
    loop {
        fuzz!(|data: &str| {
            decode(data).ok();
            decode_versioned(data).ok();
            decode_prefixed(data).ok();
        });
    }
}
