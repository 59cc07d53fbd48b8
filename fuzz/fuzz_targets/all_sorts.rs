#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sorts::Algorithm;

fuzz_target!(|data: &[u8]| {
    // Bubble sort is quadratic, keep the inputs small enough to not time out.
    let data = &data[..data.len().min(4_096)];

    let mut expected = data.to_vec();
    expected.sort();

    for algorithm in Algorithm::ALL {
        let mut v = data.to_vec();
        algorithm.sort(&mut v);
        assert_eq!(v, expected, "{algorithm}");

        // Keyed by the byte only, the position tags elements that compare equal.
        let mut pairs: Vec<(u8, usize)> = data.iter().copied().zip(0..).collect();
        algorithm.sort_by(&mut pairs, |a, b| a.0.cmp(&b.0));
        assert!(pairs.windows(2).all(|w| w[0].0 <= w[1].0));
        if algorithm.is_stable() {
            assert!(pairs.windows(2).all(|w| w[0] <= w[1]), "{algorithm}");
        }
    }
});
