#![no_main]

use libfuzzer_sys::fuzz_target;

use fourier_core::convolution::{multiply, schoolbook_multiply};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte splits the rest into two coefficient arrays
    let split = usize::from(data[0]).min(data.len() - 1);
    let rest = &data[1..];
    let (a, b) = rest.split_at(split.min(rest.len()));
    let p: Vec<f64> = a.iter().map(|&x| f64::from(x as i8)).collect();
    let q: Vec<f64> = b.iter().map(|&x| f64::from(x as i8)).collect();

    match (multiply(&p, &q), schoolbook_multiply(&p, &q)) {
        (Ok(fast), Ok(slow)) => {
            assert_eq!(fast.len(), slow.len());
            for (x, y) in fast.iter().zip(&slow) {
                assert!((x - y).abs() < 1e-6, "{x} != {y}");
            }
        }
        (Err(_), Err(_)) => assert!(p.is_empty() || q.is_empty()),
        _ => panic!("strategies disagree on validity"),
    }
});
