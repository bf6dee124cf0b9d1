#![no_main]
use arbitrary::Arbitrary;
use fenwick_sum::Fenwick;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Add(u16, i32),
    Sum(u16),
    Get(u16),
    Resize(u8),
}

fuzz_target!(|data: (u8, Vec<Op>)| {
    let (size, ops) = data;
    let mut fw = Fenwick::<i64>::new(size as usize).unwrap();
    let mut naive = vec![0i64; size as usize];

    for op in ops {
        match op {
            Op::Add(idx, d) => {
                let idx = idx as usize;
                let res = fw.add(idx, d as i64);
                if idx < naive.len() {
                    assert!(res.is_ok());
                    naive[idx] += d as i64;
                } else {
                    assert!(res.is_err());
                }
            }
            Op::Sum(n) => {
                let n = n as usize;
                let expected: i64 = naive.iter().take(n).sum();
                assert_eq!(fw.sum(n), expected);
            }
            Op::Get(idx) => {
                let idx = idx as usize;
                assert_eq!(fw.get(idx).ok(), naive.get(idx).copied());
            }
            Op::Resize(s) => {
                fw.resize(s as usize).unwrap();
                naive = vec![0i64; s as usize];
            }
        }
    }

    assert_eq!(fw.total(), naive.iter().sum::<i64>());
});
