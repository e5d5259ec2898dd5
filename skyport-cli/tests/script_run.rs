use serde_json::Value;
use skyport_cli::{run_script, ScriptError};
use skyport_store::BookingStore;

const DEMO: &str = include_str!("../../demos/capacity.jsonl");

fn results(output: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).unwrap()["result"].clone())
        .collect()
}

#[test]
fn test_demo_script() {
    let mut store = BookingStore::new();
    let mut output = Vec::new();

    let executed = run_script(&mut store, DEMO.as_bytes(), &mut output).unwrap();
    assert_eq!(executed, 17);

    let results = results(&output);
    assert_eq!(results[5], Value::from(3000));
    assert_eq!(results[6], Value::from("SUCCESS"));
    assert_eq!(results[7], Value::from("SUCCESS"));
    assert_eq!(results[8], Value::from("FAILURE"));
    assert_eq!(results[9], Value::from(3100));
    assert_eq!(results[10], Value::from(6050));
    assert_eq!(results[11], Value::from(2));
    assert_eq!(results[12], Value::from("IGI"));
    assert_eq!(results[13], Value::from("IGI"));
    assert_eq!(results[14], Value::from(-1.0));
    assert_eq!(results[15], Value::from("SUCCESS"));
    assert_eq!(results[16], Value::from(0));
}

#[test]
fn test_malformed_line_is_reported() {
    let mut store = BookingStore::new();
    let script = "{\"op\": \"largest_airport\"}\n\n{\"op\": \"book\", \"flight_id\": \"x\"}\n";

    let err = run_script(&mut store, script.as_bytes(), Vec::new()).unwrap_err();
    assert!(matches!(err, ScriptError::Malformed { line: 3, .. }));
}
