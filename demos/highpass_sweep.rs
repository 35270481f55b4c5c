use std::io::Write;

use rc_response::filter::{RcFilter, ResponseTap};
use rc_response::sweep::{sweep_response, write_response_points_csv, FrequencySweep};

fn main() {
    // 1 kΩ / 1 µF high-pass, corner near 159 Hz.
    let filter = RcFilter::new(1_000.0, 1.0e-6).expect("positive parts");

    // 0.1 Hz .. 100 kHz, 10 Hz apart
    let sweep = FrequencySweep::new(0.1, 1.0e5, 10.0).expect("valid range");

    let points = sweep_response(&filter, ResponseTap::HighPass, &sweep);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_response_points_csv(&mut out, &points).expect("write to stdout");
    out.flush().expect("flush stdout");
}
