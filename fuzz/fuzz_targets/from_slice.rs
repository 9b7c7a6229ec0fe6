#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let parsed = floatscan::from_slice(data);

    // The consumed span lies within the input and the value is always a
    // defined, finite double.
    assert!(parsed.len() <= data.len());
    assert!(parsed.value().is_finite());

    // Converting exactly the consumed prefix reproduces the outcome.
    let prefix = floatscan::from_slice(&data[..parsed.len()]);
    assert_eq!(prefix.len(), parsed.len());
    assert_eq!(prefix.value().to_bits(), parsed.value().to_bits());
    assert_eq!(prefix.advisory(), parsed.advisory());
});
