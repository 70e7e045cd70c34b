//! The LZ-End factorization
//!
//! Implements the linear-time parsing of Kempa and Kosolobov: the text is
//! swept left to right while a predecessor structure over "marked"
//! suffix-array ranks answers, for every position, the longest common
//! suffix with any current phrase boundary. Each step then either extends
//! the last phrase, merges the last two, or opens a new literal phrase.
//!
//! All ranks refer to the suffix array of the *reversed* text, so common
//! suffixes in forward terms become common prefixes of reverse suffixes,
//! and one RMQ over the LCP array per neighbour query yields the match
//! length.

use std::time::Instant;

use thiserror::Error;
use tracing::info;

use crate::btree_map::BTreeMap;
use crate::constants::MAX_TEXT_LEN;
use crate::phrase::Phrase;
use crate::rmq::Rmq;
use crate::suffix;

/// Error type for parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input does not fit the 31-bit position space.
    #[error("input of {0} bytes exceeds the 31-bit position space")]
    InputTooLarge(usize),
}

/// A potential copy source: a marked rank adjacent to the queried rank,
/// the phrase owning that mark, and the matched length.
#[derive(Clone, Copy)]
struct Candidate {
    lex_pos: i32,
    lnk: i32,
    len: i32,
}

impl Candidate {
    const NONE: Candidate = Candidate { lex_pos: 0, lnk: 0, len: 0 };
}

/// Which lexicographic neighbour of a rank to inspect.
#[derive(Clone, Copy)]
enum SearchDirection {
    LexSmaller,
    LexGreater,
}

/// Index structures that live for the duration of the sweep.
struct Indexes {
    /// Rank over the reversed text of the reverse prefix ending at each
    /// forward position.
    isa: Vec<i32>,
    /// RMQ over the LCP array of the reversed text (owns the array).
    rmq: Rmq<i32>,
    /// Marked ranks: rank one past a current phrase boundary -> phrase id.
    marked: BTreeMap<i32, i32>,
}

impl Indexes {
    /// The nearest marked rank on the given side of rank `x`, with the
    /// length of the common prefix of the two reverse suffixes.
    fn candidate(&self, dir: SearchDirection, x: i32) -> Candidate {
        match dir {
            SearchDirection::LexSmaller => match self.marked.predecessor(x - 1) {
                Some((key, lnk)) => Candidate {
                    lex_pos: key,
                    lnk,
                    len: self.rmq.min_value(key as usize + 1, x as usize),
                },
                None => Candidate::NONE,
            },
            SearchDirection::LexGreater => match self.marked.successor(x + 1) {
                Some((key, lnk)) => Candidate {
                    lex_pos: key,
                    lnk,
                    len: self.rmq.min_value(x as usize + 1, key as usize),
                },
                None => Candidate::NONE,
            },
        }
    }

    /// Search one direction for copy sources. A candidate matching at
    /// least `len1` can extend the last phrase (`p1`); one matching at
    /// least `len2` can merge the last two (`p2`).
    #[allow(clippy::too_many_arguments)]
    fn find_copy_source(
        &self,
        dir: SearchDirection,
        r: i32,
        i: i32,
        len1: i32,
        len2: i32,
        z: i32,
        p1: &mut i32,
        p2: &mut i32,
    ) {
        let mut c = self.candidate(dir, r);
        if c.len >= len1 {
            *p1 = c.lnk;
            // merging also needs len2 characters left of i
            if i > len1 {
                if c.lnk == z - 1 {
                    // the nearest mark belongs to the phrase we would merge
                    // with; re-query from its own rank to look past it
                    c = self.candidate(dir, c.lex_pos);
                }
                if c.len >= len2 {
                    *p2 = c.lnk;
                }
            }
        }
    }
}

/// Compute the LZ-End parsing of `text`.
///
/// Returns the phrase list; phrase lengths sum to `text.len()` and the
/// first phrase is always the literal covering `text[0]`. With `verbose`
/// set, per-stage progress is reported at `info` level.
///
/// # Errors
/// Fails with [`ParseError::InputTooLarge`] if the input length does not
/// fit the 31-bit position space.
pub fn parse(text: &[u8], verbose: bool) -> Result<Vec<Phrase>, ParseError> {
    let n = text.len();
    if n > MAX_TEXT_LEN {
        return Err(ParseError::InputTooLarge(n));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    if verbose {
        info!("LZ-End input: n={}", n);
    }
    let t_total = Instant::now();

    // reverse the text; all derived arrays are over the reversal
    let mut reversed = text.to_vec();
    reversed.reverse();

    let t0 = Instant::now();
    let sa = suffix::suffix_array(&reversed);
    if verbose {
        info!("compute SA: {} ms", t0.elapsed().as_millis());
    }

    let t0 = Instant::now();
    let plcp = suffix::plcp(&reversed, &sa);
    let lcp = suffix::lcp_from_plcp(&plcp, &sa);
    drop(plcp);
    if verbose {
        info!("compute LCP: {} ms", t0.elapsed().as_millis());
    }

    let t0 = Instant::now();
    let rmq: Rmq<i32> = Rmq::new(lcp);
    if verbose {
        info!("compute RMQ: {} ms", t0.elapsed().as_millis());
    }

    // permuted inverse suffix array: isa[p] is the rank of the reverse
    // prefix ending at forward position p
    let t0 = Instant::now();
    let mut isa = vec![0i32; n];
    for (rank, &pos) in sa.iter().enumerate() {
        isa[n - pos as usize - 1] = rank as i32;
    }
    if verbose {
        info!("compute permuted ISA: {} ms", t0.elapsed().as_millis());
    }

    // the suffix array and the reversed text are not needed past this point
    drop(sa);
    drop(reversed);

    let mut indexes = Indexes {
        isa,
        rmq,
        marked: BTreeMap::new(),
    };

    let t0 = Instant::now();
    let mut parsing = vec![Phrase::new(0, 1, text[0])];
    let mut z: i32 = 0; // index of the latest phrase

    for i in 1..n {
        let len1 = parsing[z as usize].len;
        let len2 = len1 + if z > 0 { parsing[z as usize - 1].len } else { 0 };

        // rank of the reverse prefix ending just before i
        let r = indexes.isa[i - 1];

        let mut p1: i32 = -1;
        let mut p2: i32 = -1;
        indexes.find_copy_source(
            SearchDirection::LexSmaller,
            r,
            i as i32,
            len1,
            len2,
            z,
            &mut p1,
            &mut p2,
        );
        if p1 == -1 || p2 == -1 {
            indexes.find_copy_source(
                SearchDirection::LexGreater,
                r,
                i as i32,
                len1,
                len2,
                z,
                &mut p1,
                &mut p2,
            );
        }

        if p2 != -1 {
            // merge the last two phrases into one
            let mark = indexes.isa[i - 1 - len1 as usize];
            let _removed = indexes.marked.erase(mark);
            debug_assert!(_removed);

            parsing.pop();
            z -= 1;
            parsing[z as usize] = Phrase::new(p2, len2 + 1, text[i]);
        } else if p1 != -1 {
            // extend the last phrase
            parsing[z as usize] = Phrase::new(p1, len1 + 1, text[i]);
        } else {
            // lazily mark the phrase just closed, then begin a new one
            indexes.marked.insert(r, z);
            parsing.push(Phrase::new(0, 1, text[i]));
            z += 1;
        }
    }

    if verbose {
        info!("parse: {} ms", t0.elapsed().as_millis());
        info!("total: {} ms", t_total.elapsed().as_millis());
    }
    Ok(parsing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(b"", false).unwrap(), Vec::new());
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(parse(b"a", false).unwrap(), vec![Phrase::new(0, 1, b'a')]);
    }

    #[test]
    fn test_two_distinct_bytes() {
        assert_eq!(
            parse(b"ab", false).unwrap(),
            vec![Phrase::new(0, 1, b'a'), Phrase::new(0, 1, b'b')]
        );
    }

    #[test]
    fn test_run_of_equal_bytes_extends() {
        // position 1 sees no mark yet and opens a phrase; position 2 then
        // extends it from the mark left behind
        assert_eq!(
            parse(b"aaa", false).unwrap(),
            vec![Phrase::new(0, 1, b'a'), Phrase::new(0, 2, b'a')]
        );
    }

    #[test]
    fn test_lengths_cover_input() {
        let text = b"abracadabra_abracadabra";
        let parsing = parse(text, false).unwrap();
        assert_eq!(
            parsing.iter().map(|p| p.len as usize).sum::<usize>(),
            text.len()
        );
        assert!(parsing.iter().all(|p| p.len >= 1));
        assert_eq!(parsing[0].len, 1);
        assert_eq!(parsing[0].ext, b'a');
    }
}
