//! Implicit and explicit primitive conversion.

use standin_core::ops::{add, greater_or_equal, greater_than, less_than, to_number, to_string};
use standin_core::{Hint, Primitive, Value, WellKnownSymbol, anything};
use standin_utils::assert_equals;

#[test]
fn length_checks_see_zero() -> anyhow::Result<()> {
    let [result] = anything().pluck(["result"]);
    let length = result.get("length")?;
    assert_equals(&length, 0)?;
    assert!(!greater_than(&length, &Value::from(0)));
    Ok(())
}

#[test]
fn string_concatenation_sees_true() -> anyhow::Result<()> {
    let [name] = anything().pluck(["name"]);
    let greeting = add(&Value::from("Hello "), &name);
    assert_equals(&greeting, "Hello true")?;
    Ok(())
}

#[test]
fn addition_sees_true_as_one() -> anyhow::Result<()> {
    let [count] = anything().pluck(["count"]);
    let total = add(&count, &Value::from(10));
    assert_equals(&total, 11)?;
    Ok(())
}

#[test]
fn comparisons_see_zero() {
    let [value] = anything().pluck(["value"]);
    assert!(!greater_than(&value, &Value::from(0)));
    assert!(less_than(&value, &Value::from(10)));
    assert!(greater_or_equal(&value, &Value::from(0)));
}

#[test]
fn to_string_method_returns_empty() -> anyhow::Result<()> {
    let [data] = anything().pluck(["data"]);
    assert_equals(&data.invoke("toString", &[])?, "")?;
    Ok(())
}

#[test]
fn value_of_method_returns_zero() -> anyhow::Result<()> {
    let [data] = anything().pluck(["data"]);
    assert_equals(&data.invoke("valueOf", &[])?, 0)?;
    Ok(())
}

#[test]
fn explicit_conversions() {
    let stand_in = anything();
    assert_eq!(stand_in.value_of(), 0.0);
    assert_eq!(stand_in.to_js_string(), "");

    let value = Value::from(&stand_in);
    assert_eq!(to_number(&value), 0.0);
    assert_eq!(to_string(&value), "");
}

#[test]
fn to_primitive_method_follows_hint() -> anyhow::Result<()> {
    let [data] = anything().pluck(["data"]);
    let to_primitive = data.get(WellKnownSymbol::ToPrimitive)?;
    for hint in Hint::all() {
        let expected = data
            .as_stand_in()
            .map(|stand_in| stand_in.to_primitive(*hint))
            .unwrap_or_default();
        let actual = to_primitive.call(&[Value::from(hint.as_str())])?;
        assert_eq!(actual, Value::from(expected));
    }
    assert_eq!(
        to_primitive.call(&[Value::from("default")])?,
        Value::from(Primitive::Bool(true))
    );
    Ok(())
}
