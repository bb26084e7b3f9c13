use dynvec::DynVec;

#[test]
fn test_iterator_empty_vector() {
    let dynvec: DynVec<i32> = DynVec::new();

    assert_eq!(dynvec.iter().count(), 0);
    assert_eq!(dynvec.iter_rev().count(), 0);
}

#[test]
fn test_iterator_populated_vector() {
    let dynvec = DynVec::from([1, 2, 3]);

    let items: Vec<_> = dynvec.iter().collect();
    assert_eq!(items, [&1, &2, &3]);
}

#[test]
fn test_iterator_stops_at_len() {
    let mut dynvec = DynVec::from([1, 2, 3, 4]);
    dynvec.pop_back();
    dynvec.pop_back();

    let items: Vec<_> = dynvec.iter().copied().collect();
    assert_eq!(items, [1, 2]);
}

#[test]
fn test_for_loop() {
    let dynvec = DynVec::from([1, 2, 3]);
    let mut total = 0;

    for value in &dynvec {
        total += value;
    }

    assert_eq!(total, 6);
}

#[test]
fn test_iter_mut() {
    let mut dynvec = DynVec::from([1, 2, 3]);

    for value in dynvec.iter_mut() {
        *value *= 2;
    }
    for value in &mut dynvec {
        *value += 1;
    }

    assert_eq!(dynvec, [3, 5, 7]);
}

#[test]
fn test_reverse_iterator() {
    let dynvec = DynVec::from(["first", "second", "third"]);

    let items: Vec<_> = dynvec.iter_rev().copied().collect();
    assert_eq!(items, ["third", "second", "first"]);
}

#[test]
fn test_reverse_iterator_compare_with_forward() {
    let dynvec = DynVec::from(["alpha", "beta", "gamma", "delta"]);

    let forward: Vec<_> = dynvec.iter().collect();
    let mut reverse: Vec<_> = dynvec.iter_rev().collect();
    reverse.reverse();

    assert_eq!(forward, reverse);
}

#[test]
fn test_reverse_iterator_mut() {
    let mut dynvec = DynVec::from([1, 2, 3]);
    let mut counter = 0;

    for value in dynvec.iter_rev_mut() {
        counter += 1;
        *value = counter;
    }

    assert_eq!(dynvec, [3, 2, 1]);
}

#[test]
fn test_double_ended() {
    let dynvec = DynVec::from([1, 2, 3, 4]);

    let mut iter = dynvec.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.as_slice(), &[2, 3]);

    let mut rev = dynvec.iter_rev();
    assert_eq!(rev.next(), Some(&4));
    assert_eq!(rev.next_back(), Some(&1));
    assert_eq!(rev.next(), Some(&3));
    assert_eq!(rev.next(), Some(&2));
    assert_eq!(rev.next(), None);
}

#[test]
fn test_size_hint() {
    let dynvec = DynVec::from([1, 2, 3]);

    let mut iter = dynvec.iter_rev();
    assert_eq!(iter.size_hint(), (3, Some(3)));

    iter.next();
    assert_eq!(iter.len(), 2);

    iter.next();
    iter.next();
    assert_eq!(iter.size_hint(), (0, Some(0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_is_restartable() {
    let dynvec = DynVec::from([1, 2, 3]);

    let iter = dynvec.iter();
    let first: Vec<_> = iter.clone().collect();
    let second: Vec<_> = iter.collect();

    assert_eq!(first, second);
    assert_eq!(dynvec.iter().sum::<i32>(), 6);
}

#[test]
fn test_into_iter_yields_owned_live_elements() {
    let mut dynvec = DynVec::from([String::from("a"), String::from("b"), String::from("c")]);
    dynvec.pop_back();

    let owned: Vec<String> = dynvec.into_iter().collect();

    assert_eq!(owned, ["a", "b"]);
}

#[test]
fn test_into_iter_reversed() {
    let dynvec = DynVec::from([1, 2, 3]);

    let reversed: Vec<_> = dynvec.into_iter().rev().collect();

    assert_eq!(reversed, [3, 2, 1]);
}
