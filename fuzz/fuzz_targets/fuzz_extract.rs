#![no_main]
use libfuzzer_sys::fuzz_target;
use bitspan::BitAccess;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let (head, body) = data.split_at(2);
    let start = usize::from(head[0]) + 1;
    let bits = usize::from(head[1]);

    match body.sub_bits(start, bits) {
        Ok(result) => {
            let count = if bits == 0 { body.bit_len() + 1 - start } else { bits };
            assert_eq!(result.len(), (count + 7) / 8);
            if count > 0 {
                assert_eq!(result[0] >> 7 == 1, body.read_bool(start).unwrap());
            }
        }
        Err(_) => assert!(bits == 0 || !body.has_bits_from(start, bits)),
    }
});
