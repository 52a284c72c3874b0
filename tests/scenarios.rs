//! End-to-end scenarios: one callback, immediate and deferred inputs.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;

use possibly_async::prelude::*;
use possibly_async::{assert_deferred, assert_immediate, assert_sync_failure};

type Outcome<'a, T> = Result<Possibly<'a, T, String>, String>;

/// Settles after a short sleep, the way a network call would.
fn later<'a, T: Send + 'a>(value: Result<T, String>) -> Possibly<'a, T, String> {
    Possibly::deferred(async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        value
    })
}

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Text(String),
    Number(i32),
}

#[test]
fn test_dispatch_immediate_increments() {
    let result: Outcome<'_, i32> =
        dispatch(Possibly::immediate(1), |v| Ok(Possibly::immediate(v + 1)));
    assert_eq!(assert_immediate!(result), 2);
}

#[tokio::test]
async fn test_dispatch_deferred_increments() {
    let result: Outcome<'_, i32> = dispatch(later(Ok(1)), |v| Ok(Possibly::immediate(v + 1)));
    assert_eq!(assert_deferred!(result).await, Ok(2));
}

#[tokio::test]
async fn test_dispatch_deferred_rejection_is_caught() {
    let result: Outcome<'_, String> = dispatch_or_else(
        later(Err("E".to_string())),
        |v: i32| Ok(Possibly::immediate((v + 1).to_string())),
        |reason| Ok(Possibly::immediate(format!("{} (caught)", reason))),
    );
    assert_eq!(assert_deferred!(result).await, Ok("E (caught)".to_string()));
}

#[test]
fn test_for_each_immediate_runs_synchronously() {
    let log = Mutex::new(Vec::new());
    let result = for_each(vec![1, 2], |v, _| {
        log.lock().unwrap().push(v + 1);
        Ok::<_, String>(Possibly::immediate(()))
    });
    assert_immediate!(result);
    assert_eq!(*log.lock().unwrap(), vec![2, 3]);
}

#[tokio::test]
async fn test_for_each_nested_deferred_dispatch_runs_in_order() {
    let log = Mutex::new(Vec::new());
    let log_ref = &log;
    let result = for_each(vec![1, 2], move |v: i32, _| {
        later(Ok(v + 1)).then(move |v| {
            log_ref.lock().unwrap().push(v);
            Ok(Possibly::immediate(()))
        })
    });
    assert_deferred!(result).await.unwrap();
    assert_eq!(*log.lock().unwrap(), vec![2, 3]);
}

#[tokio::test]
async fn test_for_each_mixed_first_deferred() {
    let log = Mutex::new(Vec::new());
    let result = for_each(vec![1, 2], |v, _| {
        log.lock().unwrap().push(v + 1);
        Ok::<_, String>(if v == 1 {
            later(Ok(()))
        } else {
            Possibly::immediate(())
        })
    });
    assert_deferred!(result).await.unwrap();
    assert_eq!(*log.lock().unwrap(), vec![2, 3]);
}

#[tokio::test]
async fn test_map_heterogeneous_results() {
    let result = map(vec![1, 2], |v, _| {
        Ok::<_, String>(if v == 1 {
            later(Ok(Cell::Text((v + 1).to_string())))
        } else {
            Possibly::immediate(Cell::Number(v + 1))
        })
    });
    assert_eq!(
        assert_deferred!(result).await,
        Ok(vec![Cell::Text("2".to_string()), Cell::Number(3)])
    );
}

#[test]
fn test_map_values_immediate_with_nested_dispatch() {
    let input = BTreeMap::from([("x", 1), ("y", 2)]);
    let result: Outcome<'_, BTreeMap<_, _>> = map_values(input, |v: i32, _| {
        dispatch(Possibly::immediate(v + 1), |v| Ok(Possibly::immediate(v.to_string())))
    });
    assert_eq!(
        assert_immediate!(result),
        BTreeMap::from([("x", "2".to_string()), ("y", "3".to_string())])
    );
}

#[tokio::test]
async fn test_map_values_heterogeneous_results() {
    let input = BTreeMap::from([("x", 1), ("y", 2)]);
    let result: Outcome<'_, BTreeMap<_, _>> = map_values(input, |v, _| {
        Ok(if v == 1 {
            later(Ok(Cell::Number(v + 1)))
        } else {
            Possibly::immediate(Cell::Text((v + 1).to_string()))
        })
    });
    assert_eq!(
        assert_deferred!(result).await,
        Ok(BTreeMap::from([
            ("x", Cell::Number(2)),
            ("y", Cell::Text("3".to_string())),
        ]))
    );
}

#[test]
fn test_invoke_without_handler_reraises() {
    let result: Outcome<'_, i32> = invoke(
        || Err("1".to_string()),
        |v: i32| Ok(Possibly::immediate(v + 1)),
    );
    assert_eq!(assert_sync_failure!(result), "1");
}

#[test]
fn test_invoke_with_handler_catches_synchronously() {
    let result: Outcome<'_, String> = invoke_or_else(
        || Err("1".to_string()),
        |v: i32| Ok(Possibly::immediate((v + 1).to_string())),
        |reason| Ok(Possibly::immediate(format!("{} (caught)", reason))),
    );
    assert_eq!(assert_immediate!(result), "1 (caught)");
}

#[tokio::test]
async fn test_invoke_deferred_rejection_rethrown() {
    let result: Outcome<'_, i32> = invoke_or_else(
        || Ok(later(Err("ERROR".to_string()))),
        |v: i32| Ok(Possibly::immediate(v + 1)),
        |reason| Err(format!("{} (rethrown)", reason)),
    );
    assert_eq!(
        assert_deferred!(result).await,
        Err("ERROR (rethrown)".to_string())
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_deferred_results_run_on_a_multi_threaded_runtime() {
    let result = map(0..8, |v, _| Ok::<_, String>(later(Ok(v * v)))).unwrap();
    let handle = tokio::spawn(async move { result.await });
    assert_eq!(handle.await.unwrap(), Ok(vec![0, 1, 4, 9, 16, 25, 36, 49]));
}
