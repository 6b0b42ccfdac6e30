// SPDX-License-Identifier: MIT

fn main() {
    afl::fuzz!(|data: &[u8]| {
        if data.len() < 2 {
            return;
        }
        let threshold = data[0] as i32 - 128;
        let grain_size = (data[1] as usize).max(1);

        let original: Vec<i32> = data[2..]
            .chunks_exact(4)
            .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        let pred = |x: &i32| *x < threshold;

        let mut unstable = original.clone();
        let i = par_partition::rng::partition_with_grain_size(
            &mut unstable,
            grain_size,
            pred,
        );
        assert!(unstable[..i].iter().all(|x| pred(x)));
        assert!(unstable[i..].iter().all(|x| !pred(x)));
        assert_multiset_eq(&original, &unstable);

        let mut stable = original.clone();
        let j = par_partition::rng::stable_partition_with_grain_size(
            &mut stable,
            grain_size,
            pred,
        );
        assert_eq!(i, j, "unstable and stable partitions must agree on pivot");
        let expected_left: Vec<i32> =
            original.iter().cloned().filter(|x| pred(x)).collect();
        let expected_right: Vec<i32> =
            original.iter().cloned().filter(|x| !pred(x)).collect();
        assert_eq!(&stable[..j], expected_left.as_slice());
        assert_eq!(&stable[j..], expected_right.as_slice());
    });
}

fn assert_multiset_eq(a: &[i32], b: &[i32]) {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    assert_eq!(a, b);
}
