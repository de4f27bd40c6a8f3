use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// sRGB gamma expansion of an 8-bit channel, scaled to the 0..=100 range
/// used by the RGB to XYZ matrix.
fn srgb_to_linear_percent(channel: u8) -> f64 {
    let value = channel as f64 / 255.0;
    let linear = if value > 0.04045 {
        ((value + 0.055) / 1.055).powf(2.4)
    } else {
        value / 12.92
    };
    linear * 100.0
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("gamma_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // `{:?}` prints the shortest representation that round-trips, so the
    // table is bit-identical to evaluating the formula at runtime.
    writeln!(file, "/// Lookup table for 8-bit sRGB to linear RGB (percent scale)").unwrap();
    writeln!(file, "/// Index: 8-bit channel value, Value: linear value * 100").unwrap();
    writeln!(file, "pub static SRGB_TO_LINEAR_PERCENT: [f64; 256] = [").unwrap();
    for i in 0..=255u8 {
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:?},", srgb_to_linear_percent(i)).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
