use qrcode::QrCode;

use std::io::Write;

fn main() {
    let input = std::env::args().nth(1).unwrap_or_default();
    let encoded = base32check::encode_prefixed(input.as_bytes());
    let code = QrCode::new(&encoded).unwrap();
    let string = code
        .render::<char>()
        .quiet_zone(false)
        .module_dimensions(2, 1)
        .build();
    let mut stdout = std::io::stdout();
    stdout.write_all(format!("{string}\n\n").as_bytes()).unwrap();
    stdout.write_all(format!("{encoded}\n").as_bytes()).unwrap();
    stdout.flush().unwrap();
}
