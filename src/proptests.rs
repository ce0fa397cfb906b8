use crate::{
    Case, CaseConfig, CaseError, Clue, ClueIndex, Direction, Evidence, EvidenceTable, Room,
};

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

fn validate_index(index: &ClueIndex) {
    // (node, exclusive lower bound, exclusive upper bound)
    let mut stack: Vec<(&Clue, Option<i32>, Option<i32>)> = Vec::new();
    if let Some(root) = index.root() {
        stack.push((root, None, None));
    }

    let mut count = 0usize;
    while let Some((clue, lo, hi)) = stack.pop() {
        count += 1;
        if let Some(lo) = lo {
            assert!(clue.id() > lo, "id {} not above bound {lo}", clue.id());
        }
        if let Some(hi) = hi {
            assert!(clue.id() < hi, "id {} not below bound {hi}", clue.id());
        }
        if let Some(left) = clue.left() {
            stack.push((left, lo, Some(clue.id())));
        }
        if let Some(right) = clue.right() {
            stack.push((right, Some(clue.id()), hi));
        }
    }

    assert_eq!(count, index.len(), "reachable clues must match ClueIndex::len");
}

#[derive(Clone, Debug)]
enum Op {
    Link(i32, u8),
    Lookup(i32),
}

fn id_strategy() -> impl Strategy<Value = i32> + Clone {
    // Mostly a small range so ids collide, with the occasional extreme.
    prop_oneof![
        9 => -50i32..50,
        1 => any::<i32>(),
    ]
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let id = id_strategy();
    let op = prop_oneof![
        50 => (id.clone(), any::<u8>()).prop_map(|(k, s)| Op::Link(k, s)),
        50 => id.prop_map(Op::Lookup),
    ];
    prop::collection::vec(op, 0..=500)
}

fn dig(entrance: &mut Room, path: &[Direction]) {
    let mut name = String::from("e");
    let mut cur = entrance;
    for &d in path {
        name.push(door(d));
        if cur.child(d).is_none() {
            cur.set_child(d, Room::new(&name).unwrap());
        }
        cur = cur.child_mut(d).unwrap();
    }
}

fn door(d: Direction) -> char {
    match d {
        Direction::Left => 'L',
        Direction::Right => 'R',
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_clue_index_matches_model(ids in prop::collection::vec(id_strategy(), 0..=300)) {
        let mut index = ClueIndex::new();
        let mut m: BTreeMap<i32, usize> = BTreeMap::new();

        for (seq, id) in ids.into_iter().enumerate() {
            let got = index.insert(Clue::new(id, &seq.to_string(), "c").unwrap());
            if m.contains_key(&id) {
                prop_assert_eq!(got, Err(CaseError::DuplicateClue { id }));
            } else {
                prop_assert_eq!(got, Ok(()));
                m.insert(id, seq);
            }
            prop_assert_eq!(index.len(), m.len());
        }

        validate_index(&index);
        let got: Vec<(i32, String)> = index
            .iter()
            .map(|c| (c.id(), c.description().to_owned()))
            .collect();
        let expected: Vec<(i32, String)> = m.iter().map(|(k, v)| (*k, v.to_string())).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_evidence_matches_model(buckets in 1usize..=16, ops in ops_strategy()) {
        let mut t = EvidenceTable::new(buckets).unwrap();
        let mut m: HashMap<i32, Vec<String>> = HashMap::new();

        for op in ops {
            match op {
                Op::Link(id, s) => {
                    let suspect = format!("suspect{s}");
                    let bucket = t.insert(id, &suspect).unwrap();
                    prop_assert!(bucket < buckets);
                    prop_assert_eq!(bucket, t.bucket_of(id));
                    prop_assert_eq!(t.chain(bucket).next().map(Evidence::clue_id), Some(id));
                    prop_assert_eq!(t.lookup(id), Some(suspect.as_str()));
                    m.entry(id).or_default().insert(0, suspect);
                }
                Op::Lookup(id) => {
                    let expected = m.get(&id).and_then(|v| v.first()).map(String::as_str);
                    prop_assert_eq!(t.lookup(id), expected);
                }
            }
        }

        prop_assert_eq!(t.len(), m.values().map(Vec::len).sum::<usize>());
        for (id, suspects) in &m {
            let got: Vec<&str> = t.lookup_all(*id).collect();
            let expected: Vec<&str> = suspects.iter().map(String::as_str).collect();
            prop_assert_eq!(got, expected);
        }
        for b in 0..buckets {
            for e in t.chain(b) {
                prop_assert_eq!(t.bucket_of(e.clue_id()), b);
            }
        }
    }

    #[test]
    fn prop_bucket_in_range(buckets in 1usize..=1024, id in any::<i32>()) {
        let t = EvidenceTable::new(buckets).unwrap();
        let b = t.bucket_of(id);
        prop_assert!(b < buckets);
        prop_assert_eq!((b as i64 - i64::from(id)) % buckets as i64, 0);
        prop_assert_eq!(t.lookup(id), None);
    }

    #[test]
    fn prop_room_preorder_and_walk(
        paths in prop::collection::vec(prop::collection::vec(any::<Direction>(), 0..8), 0..40),
        steps in prop::collection::vec(any::<Direction>(), 0..12),
    ) {
        let mut entrance = Room::new("e").unwrap();
        let mut names: BTreeSet<String> = BTreeSet::new();
        names.insert("e".to_owned());
        for path in &paths {
            dig(&mut entrance, path);
            let mut name = String::from("e");
            for &d in path {
                name.push(door(d));
                names.insert(name.clone());
            }
        }

        // 'L' < 'R' and a prefix sorts before its extensions, so pre-order is
        // exactly the sorted order of the path names.
        let got: Vec<&str> = entrance.preorder().map(Room::name).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(entrance.room_count(), names.len());

        let mut case = Case::new(CaseConfig::default()).unwrap();
        case.set_map(entrance);
        let mut at = String::from("e");
        for d in steps {
            let mut next = at.clone();
            next.push(door(d));
            let moved = case.enter(d).map(|r| r.name().to_owned());
            if names.contains(&next) {
                prop_assert_eq!(moved, Ok(next.clone()));
                at = next;
            } else {
                prop_assert_eq!(moved, Err(CaseError::NoSuchRoom { direction: d }));
            }
            prop_assert_eq!(case.current_room().map(Room::name), Some(at.as_str()));
        }
    }
}

/// Calls `f` once for every ordering of `items` (Heap's algorithm).
fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn heap<T: Clone>(k: usize, buf: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if k <= 1 {
            f(buf.clone());
            return;
        }
        for i in 0..k {
            heap(k - 1, buf, f);
            let j = if k % 2 == 0 { i } else { 0 };
            if i + 1 < k {
                buf.swap(j, k - 1);
            }
        }
    }

    let mut buf = items.to_vec();
    heap(buf.len(), &mut buf, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let ids = [202, 101, 305, 201, -7, 0];

    for_each_permutation(&ids, |perm| {
        let mut index = ClueIndex::new();
        for &id in &perm {
            index.insert(Clue::new(id, "d", "c").unwrap()).unwrap();
        }
        // Re-inserting any catalogued id is refused.
        for &id in &perm {
            assert_eq!(
                index.insert(Clue::new(id, "again", "c").unwrap()),
                Err(CaseError::DuplicateClue { id })
            );
        }

        validate_index(&index);
        assert!(index.height() <= ids.len());
        let got: Vec<i32> = index.iter().map(Clue::id).collect();
        assert_eq!(got, [-7, 0, 101, 201, 202, 305]);
        assert!(index.iter().all(|c| c.description() == "d"));
    });
}

#[test]
fn shadowing_in_every_link_order() {
    let links = [(11, "A"), (11, "B"), (21, "C"), (1, "D")];

    for_each_permutation(&links, |perm| {
        let mut t = EvidenceTable::new(10).unwrap();
        for &(id, s) in &perm {
            t.insert(id, s).unwrap();
        }
        // All three ids share bucket 1; the chain is the reverse link order.
        let chain: Vec<&str> = t.chain(1).map(Evidence::suspect).collect();
        let expected: Vec<&str> = perm.iter().rev().map(|&(_, s)| s).collect();
        assert_eq!(chain, expected);

        let last_11 = perm.iter().rev().find(|&&(id, _)| id == 11).map(|&(_, s)| s);
        assert_eq!(t.lookup(11), last_11);
        assert_eq!(t.lookup(21), Some("C"));
        assert_eq!(t.lookup(31), None);
    });
}
