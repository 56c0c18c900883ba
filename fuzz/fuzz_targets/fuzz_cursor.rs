#![no_main]
use libfuzzer_sys::fuzz_target;
use bitspan::BitCursor;

fuzz_target!(|data: &[u8]| {
    let mut bits = BitCursor::new(data);

    loop {
        if bits.read_bits(17).is_err() {
            assert!(!bits.has_bits_remaining(17));
            break;
        }
    }

    assert!(bits.read_string(0).is_ok());
    assert!(bits.is_empty());
});
