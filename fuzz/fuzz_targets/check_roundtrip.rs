use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let encoded = base32check::encode(data);
            assert_eq!(base32check::decode(&encoded).unwrap(), data);

            let encoded = base32check::encode_prefixed(data);
            assert_eq!(base32check::decode_prefixed(&encoded).unwrap(), data);

            if let Some((&version, payload)) = data.split_first() {
                let encoded = base32check::encode_versioned(payload, version);
                let (decoded, decoded_version) = base32check::decode_versioned(&encoded).unwrap();
                assert_eq!(decoded, payload);
                assert_eq!(decoded_version, version);
            }
        });
    }
}
