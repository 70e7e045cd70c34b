//! Suffix array and LCP array construction
//!
//! Thin wrappers around the external suffix sorter plus the two derived
//! arrays the parser needs. The three entry points mirror the usual
//! library pipeline: suffix array, then the permuted LCP array (PLCP),
//! then the LCP array in rank order.
//!
//! All arrays use `i32` entries; inputs longer than `i32::MAX` bytes are
//! rejected upstream by the parser.

/// Compute the suffix array of `text`.
pub fn suffix_array(text: &[u8]) -> Vec<i32> {
    let mut sa = vec![0i32; text.len()];
    if !text.is_empty() {
        cdivsufsort::sort_in_place(text, &mut sa);
    }
    sa
}

/// Compute the permuted LCP array: `plcp[p]` is the length of the longest
/// common prefix of the suffix at text position `p` and the suffix
/// lexicographically preceding it.
///
/// Uses the Φ-array scan: positions are visited in text order, so the
/// matched length carries over (it can shrink by at most one per step) and
/// the whole computation is linear.
pub fn plcp(text: &[u8], sa: &[i32]) -> Vec<i32> {
    let n = text.len();
    debug_assert_eq!(sa.len(), n);

    // phi[p] = text position of the suffix ranked just before suffix p;
    // -1 for the lexicographically smallest suffix
    let mut phi = vec![-1i32; n];
    for i in 1..n {
        phi[sa[i] as usize] = sa[i - 1];
    }

    let mut plcp = vec![0i32; n];
    let mut l = 0usize;
    for p in 0..n {
        if phi[p] < 0 {
            l = 0;
            continue;
        }
        let q = phi[p] as usize;
        while p + l < n && q + l < n && text[p + l] == text[q + l] {
            l += 1;
        }
        plcp[p] = l as i32;
        l = l.saturating_sub(1);
    }
    plcp
}

/// Permute the PLCP array into rank order: `lcp[i]` is the longest common
/// prefix of the suffixes at ranks `i - 1` and `i`, with `lcp[0] = 0`.
pub fn lcp_from_plcp(plcp: &[i32], sa: &[i32]) -> Vec<i32> {
    debug_assert_eq!(plcp.len(), sa.len());
    sa.iter().map(|&p| plcp[p as usize]).collect()
}
