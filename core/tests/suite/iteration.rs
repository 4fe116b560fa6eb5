//! Iteration and array destructuring.

use std::collections::HashSet;

use standin_core::{TypeTag, Value, WellKnownSymbol, anything};

use crate::common::{assert_stand_in, setup};

#[test]
fn iterator_method_is_a_function() -> anyhow::Result<()> {
    let [iterable] = anything().pluck(["iterable"]);
    let iterator = iterable.get(WellKnownSymbol::Iterator)?;
    assert_eq!(iterator.type_of(), TypeTag::Function);
    Ok(())
}

#[test]
fn for_of_loops_need_their_own_bound() -> anyhow::Result<()> {
    setup();
    let [collection] = anything().pluck(["collection"]);
    let mut count = 0;
    for item in collection.call(&[])?.try_iter()? {
        assert_stand_in(&item);
        count += 1;
        if count >= 3 {
            break;
        }
    }
    assert_eq!(count, 3);
    Ok(())
}

#[test]
fn each_iteration_request_is_fresh() {
    let stand_in = anything();
    let first: Vec<_> = stand_in.iter().take(3).collect();
    let second: Vec<_> = stand_in.iter().take(3).collect();
    let ids: HashSet<_> = first.iter().chain(&second).map(|item| item.id()).collect();
    assert_eq!(ids.len(), 6);
}

#[test]
fn sequences_never_end() {
    assert_eq!(anything().iter().take(10_000).count(), 10_000);
}

#[test]
fn iterator_protocol_by_hand() -> anyhow::Result<()> {
    let stand_in = Value::from(anything());
    let sequence = stand_in.invoke(WellKnownSymbol::Iterator, &[])?;
    let items: Vec<_> = sequence.try_iter()?.take(2).collect();
    assert_eq!(items.len(), 2);
    assert_ne!(items[0], items[1]);
    Ok(())
}

#[test]
fn next_keeps_stepping() -> anyhow::Result<()> {
    let stand_in = Value::from(anything());
    let sequence = stand_in.invoke(WellKnownSymbol::Iterator, &[])?;
    for _ in 0..3 {
        let step = sequence.invoke("next", &[])?;
        assert_eq!(step.get("done")?, Value::from(false));
        assert_stand_in(&step.get("value")?);
    }
    Ok(())
}
