use std::thread;

use standin_core::{MetaObject, MetaOperation, PropertyKey, Value, anything, json};

use crate::common::assert_stand_in;

#[test]
fn array_like_access() -> anyhow::Result<()> {
    let [array_like] = anything().pluck(["arrayLike"]);
    assert_stand_in(&array_like.get(0)?);
    assert_stand_in(&array_like.get(999)?);
    assert_stand_in(&array_like.get("42")?);
    assert_eq!(array_like.get("length")?, Value::from(0));
    Ok(())
}

#[test]
fn json_serialization_is_not_representable() {
    let [data] = anything().pluck(["data"]);
    assert_eq!(json::stringify(&data), None);
}

#[test]
fn existence_checks_always_pass() -> anyhow::Result<()> {
    let [obj] = anything().pluck(["obj"]);
    assert!(obj.has("someProperty")?);
    assert!(obj.has("anyProperty")?);
    Ok(())
}

#[test]
fn deletes_always_succeed() -> anyhow::Result<()> {
    let [obj] = anything().pluck(["obj"]);
    assert!(obj.delete("someProperty")?);
    assert!(obj.delete("anotherProperty")?);
    Ok(())
}

#[test]
fn deep_nesting() -> anyhow::Result<()> {
    let [deep] = anything().pluck(["deep"]);
    let mut very_deep = deep;
    for name in "abcdefghijklmnop".chars() {
        very_deep = very_deep.get(name.to_string())?;
    }
    assert_stand_in(&very_deep);
    assert_stand_in(&very_deep.call(&[])?);
    Ok(())
}

#[test]
fn writes_fall_through_to_stand_ins() {
    let stand_in = anything();
    let key = PropertyKey::from("config");
    let value = Value::from("ignored");
    let result = stand_in.dispatch(MetaOperation::Set(&key, &value));
    assert_stand_in(&result);
    assert_stand_in(&stand_in.get("config"));
}

#[test]
fn stand_ins_cross_threads() {
    let stand_in = anything();
    let handle = thread::spawn(move || stand_in.get("remote").is_stand_in());
    assert!(handle.join().expect("thread panicked"));
}
