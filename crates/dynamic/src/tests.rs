use super::*;
use serde_json::json;

fn identity() -> Function {
    Function::native("identity", |args| {
        Ok(args.first().cloned().unwrap_or(Value::Data(json!(null))))
    })
}

#[test]
fn value_kind_and_rendering() {
    assert_eq!(Value::from(json!(null)).describe(), "null (null)");
    assert_eq!(Value::from(json!(true)).kind(), "boolean");
    assert_eq!(Value::from(-3).describe(), "-3 (number)");
    assert_eq!(Value::from("abc").describe(), "\"abc\" (string)");
    assert_eq!(Value::from(json!([])).describe(), "[] (array)");
    assert_eq!(Value::from(json!({"a": 1})).kind(), "object");
    assert_eq!(
        Value::from(identity()).describe(),
        "[Function: identity] (function)"
    );
}

#[test]
fn function_equality_is_identity() {
    let f = identity();
    let g = identity();
    assert_eq!(Value::from(f.clone()), Value::from(f.clone()));
    assert_ne!(Value::from(f), Value::from(g));
}

#[test]
fn function_state_tracks_lifecycle() {
    let f = identity();
    assert_eq!(f.state(), FunctionState::Plain);

    let paused = pause_fn(&[f.into()]).unwrap();
    assert_eq!(paused.name(), "paused");
    assert_eq!(paused.state(), FunctionState::Active { pending: 0 });

    assert!(paused.call(&[Value::from(1)]).unwrap().is_buffered());
    assert_eq!(paused.state(), FunctionState::Active { pending: 1 });

    resume(&[paused.clone().into()]).unwrap();
    assert_eq!(paused.state(), FunctionState::Resumed);
}

#[test]
fn thrown_display_includes_value() {
    let thrown = Thrown(Value::from("boom"));
    assert_eq!(thrown.to_string(), "uncaught \"boom\" (string)");
    let err = DynError::from(thrown.clone());
    assert_eq!(err.as_thrown(), Some(&thrown));
    assert!(err.as_pause().is_none());
}
