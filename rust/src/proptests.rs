use super::*;

use proptest::prelude::*;

fn trace_init() -> tracing::dispatcher::DefaultGuard {
    use tracing_subscriber::prelude::*;
    tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .with_timer(())
        .set_default()
}

fn contents(list: &UnrolledList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

/// Structural check plus a cross-check of every read path against the model.
fn assert_matches_model(list: &UnrolledList<i32>, model: &[i32]) {
    if let Err(e) = list.validate() {
        panic!("invalid chain: {}\n{}", e, list);
    }
    assert_eq!(list.len(), model.len());
    assert_eq!(contents(list), model);
    assert_eq!(list.chunk_sizes().iter().sum::<usize>(), model.len());
    assert!(list
        .chunk_sizes()
        .iter()
        .all(|&size| (1..=list.capacity()).contains(&size)));
    assert_eq!(list.first().ok(), model.first());
    assert_eq!(list.last().ok(), model.last());
}

#[derive(Clone, Debug)]
enum Op {
    PushBack(i32),
    PushFront(i32),
    Insert(usize, i32),
    Remove(usize),
    PopBack,
    PopFront,
    Get(usize),
    Set(usize, i32),
    Find(i32),
    Compact,
    Clear,
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // Small value range so that find has repeats to hit.
    let value = -20i32..20;
    let op = prop_oneof![
        20 => value.clone().prop_map(Op::PushBack),
        10 => value.clone().prop_map(Op::PushFront),
        25 => (any::<usize>(), value.clone()).prop_map(|(i, v)| Op::Insert(i, v)),
        20 => any::<usize>().prop_map(Op::Remove),
        5 => Just(Op::PopBack),
        5 => Just(Op::PopFront),
        5 => any::<usize>().prop_map(Op::Get),
        3 => (any::<usize>(), value.clone()).prop_map(|(i, v)| Op::Set(i, v)),
        4 => value.prop_map(Op::Find),
        2 => Just(Op::Compact),
        1 => Just(Op::Clear),
    ];
    prop::collection::vec(op, 0..=400)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_with_vec(capacity in 1usize..=8, ops in ops_strategy()) {
        let mut list = UnrolledList::new(capacity).unwrap();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::PushBack(v) => {
                    list.push_back(v).unwrap();
                    model.push(v);
                }
                Op::PushFront(v) => {
                    list.push_front(v).unwrap();
                    model.insert(0, v);
                }
                Op::Insert(i, v) => {
                    // occasionally one past the end, to exercise the error path
                    let index = i % (model.len() + 2);
                    let result = list.insert(index, v);
                    if index <= model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(index, v);
                    } else {
                        prop_assert!(result.unwrap_err().is_out_of_range());
                    }
                }
                Op::Remove(i) => {
                    let index = i % (model.len() + 1);
                    let result = list.remove(index);
                    if index < model.len() {
                        prop_assert_eq!(result, Ok(model.remove(index)));
                    } else {
                        prop_assert!(result.unwrap_err().is_out_of_range());
                    }
                }
                Op::PopBack => prop_assert_eq!(list.pop_back(), model.pop()),
                Op::PopFront => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(list.pop_front(), expected);
                }
                Op::Get(i) => {
                    let index = i % (model.len() + 1);
                    prop_assert_eq!(list.get(index), model.get(index));
                }
                Op::Set(i, v) => {
                    if !model.is_empty() {
                        let index = i % model.len();
                        list[index] = v;
                        model[index] = v;
                    }
                }
                Op::Find(v) => {
                    let expected = model.iter().position(|&m| m == v).unwrap_or(model.len());
                    prop_assert_eq!(list.find(&v), expected);
                }
                Op::Compact => {
                    let nodes = list.node_count();
                    list.compact();
                    prop_assert!(list.node_count() <= nodes);
                    prop_assert_eq!(list.node_count(), model.len().div_ceil(capacity));
                }
                Op::Clear => {
                    list.clear();
                    model.clear();
                }
            }

            assert_matches_model(&list, &model);
        }

        prop_assert_eq!(list.arena_stats().allocated_count, list.node_count());
    }

    #[test]
    fn prop_insert_then_remove_is_identity(
        capacity in 1usize..=8,
        values in prop::collection::vec(any::<i32>(), 0..=64),
        at in any::<usize>(),
        value in any::<i32>(),
    ) {
        let mut list = UnrolledList::new(capacity).unwrap();
        list.try_extend(values.iter().copied()).unwrap();
        let index = at % (values.len() + 1);

        list.insert(index, value).unwrap();
        prop_assert_eq!(list.at(index), Ok(&value));
        prop_assert_eq!(list.remove(index), Ok(value));

        prop_assert_eq!(contents(&list), values);
        prop_assert!(list.check_invariants());
    }

    #[test]
    fn prop_compact_is_idempotent(capacity in 1usize..=8, ops in ops_strategy()) {
        let mut list = UnrolledList::new(capacity).unwrap();
        for op in ops {
            match op {
                Op::PushBack(v) | Op::PushFront(v) => list.push_back(v).unwrap(),
                Op::Insert(i, v) => list.insert(i % (list.len() + 1), v).unwrap(),
                Op::Remove(i) if !list.is_empty() => {
                    list.remove(i % list.len()).unwrap();
                }
                _ => {}
            }
        }
        let before = contents(&list);

        list.compact();
        let sizes = list.chunk_sizes();
        prop_assert_eq!(contents(&list), before.clone());
        if let Some((_, full)) = sizes.split_last() {
            prop_assert!(full.iter().all(|&size| size == capacity));
        }

        list.compact();
        prop_assert_eq!(list.chunk_sizes(), sizes);
        prop_assert_eq!(contents(&list), before);
        prop_assert!(list.check_invariants());
    }

    #[test]
    fn prop_push_back_round_trip(
        capacity in 1usize..=8,
        values in prop::collection::vec(any::<i32>(), 0..=200),
    ) {
        let mut list = UnrolledList::new(capacity).unwrap();
        for &v in &values {
            list.push_back(v).unwrap();
        }
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(list.at(i), Ok(v));
        }
        prop_assert_eq!(list.at(values.len()).unwrap_err().kind(), ErrorKind::OutOfRange);

        let drained: Vec<i32> = list.into_iter().collect();
        prop_assert_eq!(drained, values);
    }

    #[test]
    fn prop_clone_and_convert_preserve_sequence(
        capacity in 1usize..=8,
        target in 1usize..=8,
        values in prop::collection::vec(any::<i16>(), 0..=64),
    ) {
        let list: UnrolledList<i16> = {
            let mut list = UnrolledList::new(capacity).unwrap();
            list.try_extend(values.iter().copied()).unwrap();
            list
        };

        let copy = list.clone();
        prop_assert_eq!(&copy, &list);
        prop_assert!(copy.check_invariants());

        let widened = UnrolledList::convert_from(&list, target, |v| i64::from(*v)).unwrap();
        prop_assert_eq!(widened.capacity(), target);
        let expected: Vec<i64> = values.iter().map(|&v| i64::from(v)).collect();
        prop_assert_eq!(widened.iter().copied().collect::<Vec<_>>(), expected);
        prop_assert!(widened.check_invariants());
    }
}

#[test]
fn traced_split_and_compaction() {
    let _trace = trace_init();

    let mut list = UnrolledList::new(3).unwrap();
    for i in 0..12i32 {
        list.insert(i as usize / 2, i).unwrap();
    }
    for _ in 0..5 {
        list.remove(1).unwrap();
    }
    let before = contents(&list);
    list.compact();

    assert_eq!(contents(&list), before);
    assert_eq!(list.chunk_sizes(), vec![3, 3, 1]);
    assert_matches_model(&list, &before);
}

#[test]
fn exhaustive_small_inserts() {
    // Every insertion position at every capacity for lists up to 2C long.
    for capacity in 1..=5 {
        for len in 0..=2 * capacity {
            for index in 0..=len {
                let mut model: Vec<i32> = (0..len as i32).collect();
                let mut list = UnrolledList::new(capacity).unwrap();
                list.try_extend(model.iter().copied()).unwrap();

                list.insert(index, -1).unwrap();
                model.insert(index, -1);
                assert_matches_model(&list, &model);
            }
        }
    }
}
