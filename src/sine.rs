use std::f64::consts::FRAC_PI_2;

pub const TABLE_LEN: usize = 128;
pub const AMPLITUDE_MAX: u16 = 511;

pub fn quarter_sine() -> Vec<u16> {
    let last = (TABLE_LEN - 1) as f64;
    (0..TABLE_LEN)
        .map(|i| {
            let theta = FRAC_PI_2 * i as f64 / last;
            (AMPLITUDE_MAX as f64 * theta.sin()).round() as u16
        })
        .collect()
}
