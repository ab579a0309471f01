use named_collections::{create, replace_field, Arguments, Deque, RecordType};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::{HashMap, VecDeque};

fn record_type(arity: usize) -> RecordType {
    let fields: Vec<String> = (0..arity).map(|i| format!("f{}", i)).collect();
    create("T", fields, false).unwrap()
}

proptest! {
    #[test]
    fn keyword_order_does_not_matter(
        seed in any::<u64>(),
        values in proptest::collection::vec(any::<i64>(), 0..16),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let t = record_type(values.len());

        let mut pairs: Vec<(String, i64)> = t.fields().iter().cloned().zip(values.iter().copied()).collect();
        pairs.shuffle(&mut rng);

        let arguments = pairs
            .into_iter()
            .fold(Arguments::new(), |a, (name, value)| a.keyword(name, value));

        let by_keyword = t.call(arguments).unwrap();
        let by_position = t.make(values.clone()).unwrap();

        prop_assert_eq!(&by_keyword, &by_position);
        prop_assert_eq!(by_keyword, values);
    }
}

proptest! {
    #[test]
    fn split_between_positional_and_keyword(
        values in proptest::collection::vec(any::<u8>(), 0..16),
        split in any::<usize>(),
    ) {
        let t = record_type(values.len());
        let split = if values.is_empty() { 0 } else { split % (values.len() + 1) };

        let mut arguments = Arguments::new();
        for v in &values[..split] {
            arguments = arguments.positional(*v);
        }
        for (name, v) in t.fields()[split..].iter().zip(&values[split..]) {
            arguments = arguments.keyword(name.as_str(), *v);
        }

        prop_assert_eq!(t.call(arguments).unwrap(), values);
    }
}

proptest! {
    #[test]
    fn items_recover_every_value(
        values in proptest::collection::vec(any::<i32>(), 0..16),
    ) {
        let t = record_type(values.len());
        let r = t.make(values.clone()).unwrap();

        let d: HashMap<&str, &i32> = r.items().collect();

        prop_assert_eq!(values.len(), d.len());
        for (ix, name) in t.fields().iter().enumerate() {
            prop_assert_eq!(&values[ix], d[name.as_str()]);
            prop_assert_eq!(Ok(&values[ix]), r.attr(name));
        }
    }
}

proptest! {
    #[test]
    fn replace_touches_one_field(
        values in proptest::collection::vec(any::<i32>(), 1..16),
        pick in any::<usize>(),
        new_value in any::<i32>(),
    ) {
        let t = record_type(values.len());
        let r = t.make(values.clone()).unwrap();
        let ix = pick % values.len();

        let replaced = replace_field(&r, &t.fields()[ix], new_value).unwrap();

        let mut expected = values.clone();
        expected[ix] = new_value;
        prop_assert_eq!(replaced, expected);
        prop_assert_eq!(r, values);
    }
}

proptest! {
    #[test]
    fn serialized_records_round_trip(
        values in proptest::collection::vec(any::<i64>(), 0..16),
    ) {
        let r = record_type(values.len()).make(values).unwrap();

        let json = serde_json::to_string(&r).unwrap();
        let back: named_collections::Record<i64> = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(&r, &back);
        prop_assert!(r.type_().is_equivalent(back.type_()));
    }
}

proptest! {
    #[test]
    fn bounded_deque_keeps_latest(
        maxlen in 0..8usize,
        pushes in proptest::collection::vec(any::<bool>(), 0..64),
    ) {
        let mut l: Deque<usize> = Deque::with_maxlen(maxlen);
        let mut model: VecDeque<usize> = VecDeque::new();

        for (v, p) in pushes.into_iter().enumerate() {
            if p {
                l.push_front(v);
                model.push_front(v);
                if model.len() > maxlen {
                    model.pop_back();
                }
            } else {
                l.push_back(v);
                model.push_back(v);
                if model.len() > maxlen {
                    model.pop_front();
                }
            }

            prop_assert!(l.len() <= maxlen);
        }

        prop_assert_eq!(model.iter().collect::<Vec<_>>(), l.iter().collect::<Vec<_>>());
    }
}

proptest! {
    #[test]
    fn random_interleaved_push_pop_rotate(
        action in proptest::collection::vec(any::<usize>(), 0..64)
    ){
        let mut l: Deque<usize> = Deque::new();
        let mut model: VecDeque<usize> = VecDeque::new();

        for a in action {
            match a & 0x07 {
                0x00 | 0x04 => {
                    l.push_front(a);
                    model.push_front(a);
                },
                0x01 | 0x05 => {
                    l.push_back(a);
                    model.push_back(a);
                },
                0x02 => {
                    prop_assert_eq!(model.pop_front(), l.pop_front());
                },
                0x03 => {
                    prop_assert_eq!(model.pop_back(), l.pop_back());
                },
                0x06 => {
                    l.rotate(1);
                    if let Some(v) = model.pop_back() {
                        model.push_front(v);
                    }
                },
                0x07 => {
                    l.rotate(-1);
                    if let Some(v) = model.pop_front() {
                        model.push_back(v);
                    }
                },
                _ => unreachable!(),
            }
        }

        prop_assert_eq!(model.len(), l.len());
        prop_assert_eq!(model.into_iter().collect::<Vec<_>>(), l.into_iter().collect::<Vec<_>>());
    }
}
