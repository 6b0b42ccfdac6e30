// SPDX-License-Identifier: MIT

use par_partition::algo::{is_partitioned, merge, partition, stable_merge, PartitionRange};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn merge_of_two_leaf_partitions_is_partitioned_and_preserves_multiset() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let len_l = rng.gen_range(1..50);
        let len_r = rng.gen_range(1..50);
        let threshold = rng.gen_range(-5..5);
        let pred = |x: &i32| *x < threshold;

        let mut v: Vec<i32> = (0..(len_l + len_r))
            .map(|_| rng.gen_range(-10..10))
            .collect();
        let original = v.clone();

        let split_l = partition(&mut v[..len_l], 0, len_l, pred);
        let split_r_local = partition(&mut v[len_l..], 0, len_r, pred);

        let left = PartitionRange::new(0, split_l, len_l);
        let right = PartitionRange::new(len_l, len_l + split_r_local, len_l + len_r);

        let combined = merge(&mut v, left, right, 8);

        assert_eq!(combined.begin, 0);
        assert_eq!(combined.end, len_l + len_r);
        assert!(is_partitioned(v.as_slice(), 0, v.len(), pred));
        assert!(v[..combined.pivot].iter().all(|x| pred(x)));
        assert!(v[combined.pivot..].iter().all(|x| !pred(x)));

        let mut a = original.clone();
        let mut b = v.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}

#[test]
fn stable_merge_preserves_relative_order_of_each_side() {
    let mut v = vec![1, 3, 2, 4, 5, 7, 6, 8];
    let left = PartitionRange::new(0, 2, 4);
    let right = PartitionRange::new(4, 6, 8);
    let combined = stable_merge(&mut v, left, right);
    assert_eq!(v, vec![1, 3, 5, 7, 2, 4, 6, 8]);
    assert_eq!(combined, PartitionRange::new(0, 4, 8));
}

#[test]
fn partition_range_identity_is_empty_and_vacuously_partitioned() {
    let id = PartitionRange::identity(5usize);
    assert_eq!(id.begin, 5);
    assert_eq!(id.pivot, 5);
    assert_eq!(id.end, 5);
}
