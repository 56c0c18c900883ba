#![no_main]
use libfuzzer_sys::fuzz_target;
use bitspan::{shift_left, shift_right};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let (head, body) = data.split_at(1);
    let count = usize::from(head[0]);

    let (left, _) = shift_left(body, count);
    let (right, _) = shift_right(body, count);
    assert_eq!(left.len(), body.len());
    assert_eq!(right.len(), body.len());

    let (stepped, _) = shift_left(&shift_left(body, count / 2).0, count - count / 2);
    assert_eq!(left, stepped);
});
