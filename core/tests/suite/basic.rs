//! Destructuring, chaining, calls and construction.

use standin_core::{Value, anything};

use crate::common::{assert_function, assert_stand_in};

#[test]
fn destructured_properties_are_functions() {
    let [api, config, db] = anything().pluck(["api", "config", "db"]);
    assert_function(&api);
    assert_function(&config);
    assert_function(&db);
}

#[test]
fn property_chains_resolve() -> anyhow::Result<()> {
    let [api] = anything().pluck(["api"]);
    let result = api.get("users")?.get("fetch")?.get("data")?.get("process")?;
    assert_stand_in(&result);
    Ok(())
}

#[test]
fn method_calls_resolve() -> anyhow::Result<()> {
    let [api] = anything().pluck(["api"]);
    let result = api.invoke("getUsers", &[])?;
    assert_stand_in(&result);
    Ok(())
}

#[test]
fn constructors_resolve() -> anyhow::Result<()> {
    let [validator] = anything().pluck(["Validator"]);
    let instance = validator.construct(&[Value::from("strict")])?;
    assert_stand_in(&instance);
    Ok(())
}

#[test]
fn call_results_destructure_as_arrays() -> anyhow::Result<()> {
    let [hook] = anything().pluck(["hook"]);
    let state = hook.call(&[])?;
    let stand_in = state.as_stand_in().expect("hook() is a stand-in");
    let [first, second, third] = stand_in.destructure();
    for item in [first, second, third] {
        assert_stand_in(&Value::from(item));
    }
    Ok(())
}

#[test]
fn call_chains_resolve() {
    let chained = anything().call(&[]).call(&[]).call(&[]);
    assert_stand_in(&Value::from(chained));
}

#[test]
fn separate_factory_calls_are_independent() -> anyhow::Result<()> {
    let [first_api] = anything().pluck(["api"]);
    let [second_api] = anything().pluck(["api"]);
    assert_ne!(first_api, second_api);

    let first = Value::from(anything());
    let second = Value::from(anything());
    let result_one = first.get("test")?.invoke("method", &[])?;
    let result_two = second.get("different")?.invoke("call", &[])?;
    assert_stand_in(&result_one);
    assert_stand_in(&result_two);
    assert_ne!(result_one, result_two);
    Ok(())
}
