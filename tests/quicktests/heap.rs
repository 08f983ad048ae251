use datastructs::heap::{MaxHeap, MinHeap};
use quickcheck_macros::quickcheck;

use crate::Op;

#[quickcheck]
fn max_heap_drains_descending(xs: Vec<i32>) -> bool {
    let mut expected = xs.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    MaxHeap::from(xs).into_sorted_vec() == expected
}

#[quickcheck]
fn min_heap_drains_ascending(xs: Vec<i32>) -> bool {
    let mut expected = xs.clone();
    expected.sort_unstable();
    MinHeap::from_slice(&xs).into_sorted_vec() == expected
}

#[quickcheck]
fn incremental_and_bulk_agree(xs: Vec<u8>) -> bool {
    let mut incremental = MinHeap::new();
    incremental.extend(xs.iter().copied());
    let bulk: MinHeap<_> = xs.into_iter().collect();
    incremental.into_sorted_vec() == bulk.into_sorted_vec()
}

#[quickcheck]
fn top_is_max_after_every_op(ops: Vec<Op<i16>>) -> bool {
    let mut heap = MaxHeap::new();
    let mut model: Vec<i16> = Vec::new();

    ops.into_iter().all(|op| {
        match op {
            Op::Insert(x) => {
                heap.insert(x);
                model.push(x);
            }
            Op::Remove(_) => {
                if let Some(top) = heap.extract_top() {
                    let pos = model.iter().position(|x| *x == top).unwrap();
                    model.swap_remove(pos);
                }
            }
        }
        heap.len() == model.len() && heap.peek_top() == model.iter().max()
    })
}
