//! Fuzzy search over the device catalog.
//!
//! Matching runs in three tiers, best first:
//! 1. exact: the normalized query equals a key value or all keys joined,
//! 2. fuzzy: every query word is an in-order subsequence of a key value
//!    (scored by `nucleo-matcher`),
//! 3. typo: every query word is within a small edit distance of the start
//!    of some word of the item.
//!
//! Within a tier higher scores rank first; equal scores keep catalog order.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::catalog::{Catalog, CatalogItem};

/// Number of suggestions returned when the caller does not pass a limit.
pub const DEFAULT_LIMIT: usize = 10;

/// Fields searched when the index is built from a [`Catalog`].
pub const DEFAULT_KEYS: [&str; 2] = ["oem", "model"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    Typo,
    Fuzzy,
    Exact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchHit {
    /// Position of the item in catalog order.
    pub position: usize,
    pub kind: MatchKind,
    pub score: u32,
}

struct Entry {
    haystacks: Vec<String>,
    normalized: Vec<String>,
    words: Vec<Vec<char>>,
}

impl Entry {
    fn build(item: &CatalogItem, keys: &[String]) -> Self {
        let values: Vec<&str> = keys
            .iter()
            .filter_map(|k| item.field(k))
            .filter(|v| !v.trim().is_empty())
            .collect();
        let mut haystacks: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        if values.len() > 1 {
            haystacks.push(values.join(" "));
        }
        let normalized: Vec<String> = haystacks.iter().map(|h| normalize(h)).collect();
        let words = values
            .iter()
            .flat_map(|v| {
                normalize(v)
                    .split(' ')
                    .map(|w| w.chars().collect::<Vec<char>>())
                    .collect::<Vec<_>>()
            })
            .filter(|w| !w.is_empty())
            .collect();
        Entry {
            haystacks,
            normalized,
            words,
        }
    }
}

/// Read-only search index built once from the catalog.
pub struct SearchIndex {
    items: Vec<CatalogItem>,
    keys: Vec<String>,
    entries: Vec<Entry>,
}

impl SearchIndex {
    pub fn new(items: Vec<CatalogItem>, keys: &[&str]) -> Self {
        let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        let entries = items.iter().map(|item| Entry::build(item, &keys)).collect();
        SearchIndex {
            items,
            keys,
            entries,
        }
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        SearchIndex::new(catalog.devices, &DEFAULT_KEYS)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn get(&self, position: usize) -> Option<&CatalogItem> {
        self.items.get(position)
    }

    /// Items matching `query`, most relevant first.
    ///
    /// An empty or whitespace-only query returns nothing. `None` as the
    /// limit caps the result at [`DEFAULT_LIMIT`].
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<CatalogItem> {
        self.search_ranked(query, limit)
            .into_iter()
            .map(|hit| self.items[hit.position].clone())
            .collect()
    }

    pub fn search_ranked(&self, query: &str, limit: Option<usize>) -> Vec<SearchHit> {
        let needle = normalize(query);
        if needle.is_empty() || self.entries.is_empty() {
            return Vec::new();
        }
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let tokens: Vec<Vec<char>> = needle
            .split(' ')
            .map(|t| t.chars().collect())
            .collect();
        let pattern = Pattern::new(
            &needle,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                if entry.normalized.iter().any(|h| *h == needle) {
                    return Some(SearchHit {
                        position,
                        kind: MatchKind::Exact,
                        score: 0,
                    });
                }
                let fuzzy = entry
                    .haystacks
                    .iter()
                    .filter_map(|h| pattern.score(Utf32Str::new(h, &mut buf), &mut matcher))
                    .max();
                if let Some(score) = fuzzy {
                    return Some(SearchHit {
                        position,
                        kind: MatchKind::Fuzzy,
                        score,
                    });
                }
                typo_score(&tokens, &entry.words).map(|score| SearchHit {
                    position,
                    kind: MatchKind::Typo,
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.kind
                .cmp(&a.kind)
                .then(b.score.cmp(&a.score))
                .then(a.position.cmp(&b.position))
        });
        hits.truncate(limit);
        hits
    }
}

/// Lowercase and collapse runs of whitespace to a single space.
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn typo_budget(len: usize) -> usize {
    match len {
        0..=2 => 0,
        3..=5 => 1,
        _ => 2,
    }
}

// Every token must be close to the start of some word. Longer tokens and
// fewer edits score higher, with a point for matching a whole word.
fn typo_score(tokens: &[Vec<char>], words: &[Vec<char>]) -> Option<u32> {
    let mut score = 0u32;
    for token in tokens {
        let (best, whole) = words.iter().map(|w| prefix_distance(token, w)).min()?;
        if best > typo_budget(token.len()) {
            return None;
        }
        score += 2 * (token.len() - best) as u32 + u32::from(whole == best);
    }
    Some(score)
}

/// Levenshtein distance between `token` and its closest prefix of `word`,
/// paired with the distance to the whole word.
fn prefix_distance(token: &[char], word: &[char]) -> (usize, usize) {
    // prev[j] = distance(token[..i], word[..j])
    let mut prev: Vec<usize> = (0..=word.len()).collect();
    let mut cur = vec![0; word.len() + 1];
    for (i, tc) in token.iter().enumerate() {
        cur[0] = i + 1;
        for (j, wc) in word.iter().enumerate() {
            let cost = usize::from(tc != wc);
            cur[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    let whole = prev[word.len()];
    let best = prev.into_iter().min().unwrap_or(whole);
    (best, whole)
}
