use detective::ClueIndex;

use std::collections::BTreeSet;

/// Texts short enough to never be cut by the index.
fn short(xs: Vec<String>) -> Vec<String> {
    xs.into_iter()
        .map(|x| x.chars().take(16).collect())
        .collect()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<String>) -> bool {
    let mut clues = ClueIndex::new();
    for x in &xs {
        clues.insert(x);
    }

    let in_order = clues.traverse_in_order();
    in_order.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn matches_btree_set(xs: Vec<String>) -> bool {
    let xs = short(xs);
    let mut clues = ClueIndex::new();
    for x in &xs {
        clues.insert(x);
    }
    let set: BTreeSet<_> = xs.iter().map(String::as_str).collect();

    clues.len() == set.len() && clues.iter().eq(set.into_iter())
}

#[quickcheck]
fn second_insert_changes_nothing(xs: Vec<String>, again: Vec<usize>) -> bool {
    let xs = short(xs);
    if xs.is_empty() {
        return true;
    }
    let mut clues = ClueIndex::new();
    for x in &xs {
        clues.insert(x);
    }
    let before: Vec<String> = clues.iter().map(String::from).collect();

    let no_new = again.iter().all(|i| !clues.insert(&xs[i % xs.len()]));
    no_new && clues.iter().eq(before.iter().map(String::as_str))
}

#[quickcheck]
fn contains_not(xs: Vec<String>, nots: Vec<String>) -> bool {
    let xs = short(xs);
    let mut clues = ClueIndex::new();
    for x in &xs {
        clues.insert(x);
    }

    nots.iter()
        .filter(|n| !xs.contains(n))
        .all(|n| !clues.contains(n))
}
