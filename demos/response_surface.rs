use std::io::Write;

use rc_response::filter::ResponseTap;
use rc_response::surface::{response_surface, write_surface_csv, SurfaceAxes};
use rc_response::sweep::{linspace, FrequencySweep};

fn main() {
    // 100 Ω against capacitances from 1 nF to 1 mF, 0.1 Hz .. 1 MHz.
    let capacitances = linspace(1.0e-9, 1.0e-3, 100);
    let frequencies = FrequencySweep::new(0.1, 1.0e6, 1.0e3).expect("valid range");

    let axes = SurfaceAxes::new(capacitances, frequencies.samples()).expect("valid axes");
    let grid = response_surface(100.0, &axes, ResponseTap::HighPass).expect("valid surface");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_surface_csv(&mut out, &axes, &grid).expect("write to stdout");
    out.flush().expect("flush stdout");
}
