//! Stand-ins wired into code that expects real collaborators.

use standin_core::{RuntimeError, Value, anything};
use standin_utils::{assert_equals, is_assertion_error};

use crate::common::{assert_stand_in, setup};

/// Code under test: reaches through two unimplemented collaborators.
fn process_data(config: &Value, formatter: &Value, input: &str) -> Result<Value, RuntimeError> {
    let settings = config.invoke("getSettings", &[])?;
    let validator = settings.get("Validator")?.construct(&[])?;

    if input.chars().count() == 10 {
        return formatter.invoke("format", &[Value::from(input), validator.get("options")?]);
    }

    Ok(Value::from(input))
}

#[test]
fn prevents_runtime_crashes() -> anyhow::Result<()> {
    setup();
    let [config, formatter] = anything().pluck(["config", "formatter"]);
    let result = process_data(&config, &formatter, "1234567890")?;
    assert_stand_in(&result);
    Ok(())
}

#[test]
fn short_input_skips_the_formatter() -> anyhow::Result<()> {
    let [config, formatter] = anything().pluck(["config", "formatter"]);
    let result = process_data(&config, &formatter, "short")?;
    assert_equals(&result, "short")?;
    Ok(())
}

#[test]
fn missing_collaborator_fails_with_type_error() {
    let [formatter] = anything().pluck(["formatter"]);
    let err = process_data(&Value::UNDEFINED, &formatter, "1234567890").unwrap_err();
    assert_eq!(err.name(), "TypeError");
    assert!(!is_assertion_error(&err));
}

#[test]
fn assertion_failures_are_clean() {
    let [service] = anything().pluck(["service"]);
    let result = service
        .invoke("process", &[Value::from("test-data")])
        .expect("stand-ins never fail");

    match assert_equals(&result, "expected-output") {
        Ok(()) => panic!("a stand-in never equals a literal"),
        Err(error) => {
            assert!(is_assertion_error(&error));
            assert_eq!(error.name(), "AssertionError");
        }
    }
}

#[test]
fn assertion_failures_survive_anyhow() {
    let run = || -> anyhow::Result<()> {
        let [service] = anything().pluck(["service"]);
        let result = service.invoke("process", &[])?;
        assert_equals(&result, "expected-output")?;
        Ok(())
    };
    let err = run().unwrap_err();
    assert!(is_assertion_error(&err));
}
