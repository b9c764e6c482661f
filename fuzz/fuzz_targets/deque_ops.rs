//! Fuzz harness for deque operation sequences
//!
//! Replays byte-decoded operations against `std::collections::VecDeque` and
//! checks that both structures agree after every step.
//! Target: the chain/tail/length bookkeeping in worklist-deque

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::VecDeque;
use worklist_deque::Deque;

fuzz_target!(|data: &[u8]| {
    let mut deque: Deque<u8> = Deque::new();
    let mut model: VecDeque<u8> = VecDeque::new();

    for chunk in data.chunks(2) {
        let value = *chunk.get(1).unwrap_or(&0);
        match chunk[0] % 4 {
            0 => {
                deque.push_front(value);
                model.push_front(value);
            }
            1 => {
                deque.push_back(value);
                model.push_back(value);
            }
            2 => assert_eq!(deque.pop_front(), model.pop_front()),
            _ => {
                assert_eq!(deque.front(), model.front());
                assert_eq!(deque.back(), model.back());
            }
        }
        assert_eq!(deque.len(), model.len());
    }

    assert!(deque.into_iter().eq(model));
});
