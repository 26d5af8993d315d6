//! Benchmark workloads for the loam runtime-support library.
//!
//! Provides pre-built workload generators shared by the criterion
//! benches:
//!
//! - [`int_workload`]: a `Buf<u64>` filled with sequential values
//! - [`text_workload`]: a `StrBuf` built from repeated short words
//! - [`arena_workload_sizes`]: a deterministic mix of small and large
//!   allocation sizes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use loam_buf::{Buf, StrBuf};

/// Fill a fresh `Buf<u64>` with `len` sequential values.
pub fn int_workload(len: usize) -> Buf<u64> {
    let mut buf = Buf::new();
    for i in 0..len {
        buf.push(i as u64).expect("workload allocation");
    }
    buf
}

/// Build a `StrBuf` from `words` short comma-separated words.
pub fn text_workload(words: usize) -> StrBuf {
    let mut sb = StrBuf::new();
    for i in 0..words {
        if i > 0 {
            sb.push_char(',').expect("workload allocation");
        }
        sb.push_str("word").expect("workload allocation");
    }
    sb
}

/// Deterministic allocation-size mix: mostly small nodes with an
/// oversized payload every 16th request.
pub fn arena_workload_sizes(count: usize) -> Vec<usize> {
    (0..count)
        .map(|i| if i % 16 == 0 { 8192 } else { 24 + (i % 7) * 8 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workloads_have_requested_sizes() {
        assert_eq!(int_workload(100).len(), 100);
        assert_eq!(text_workload(3).to_str(), Some("word,word,word"));
        assert_eq!(arena_workload_sizes(32).len(), 32);
    }
}
