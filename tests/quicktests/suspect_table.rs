use detective::suspect::{hash, Suspect};
use detective::SuspectTable;

#[quickcheck]
fn hash_in_range(name: String, size: usize) -> bool {
    let size = size % 1024 + 1;
    hash(&name, size) < size
}

#[quickcheck]
fn hash_deterministic(name: String, size: u16) -> bool {
    let size = usize::from(size);
    hash(&name, size) == hash(&name, size)
}

#[quickcheck]
fn hash_ignores_byte_order(name: String) -> bool {
    let mut reversed = name.clone().into_bytes();
    reversed.reverse();
    // Any permutation of the bytes sums the same; only valid UTF-8 can be looked up.
    match String::from_utf8(reversed) {
        Ok(reversed) => hash(&name, 101) == hash(&reversed, 101),
        Err(_) => true,
    }
}

#[quickcheck]
fn associate_twice_keeps_one(clue: String, name: String, size: u8) -> bool {
    let clue: String = clue.chars().take(16).collect();
    let name: String = name.chars().take(16).collect();
    let mut table = SuspectTable::new(usize::from(size) + 1).unwrap();

    table.associate(&clue, &name);
    let once = table.find(&name).map(Suspect::clue_count);
    table.associate(&clue, &name);
    let twice = table.find(&name).map(Suspect::clue_count);

    let expected = if clue.is_empty() { 0 } else { 1 };
    once == Some(expected) && twice == once && table.len() == 1
}

#[quickcheck]
fn most_associated_has_max_count(pairs: Vec<(u8, u8)>) -> bool {
    let mut table = SuspectTable::with_default_size().unwrap();
    for (clue, name) in &pairs {
        table.associate(&format!("clue {}", clue % 8), &format!("suspect {}", name % 8));
    }

    let max = table.iter().map(Suspect::clue_count).max().unwrap_or(0);
    match table.report_most_associated() {
        Some(suspect) => suspect.clue_count() == max,
        None => max == 0,
    }
}
