//! Laziness, re-running and concurrency of Task and TaskEither.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tidewater::{Either, Task, TaskEither};
use tokio::sync::Barrier;

// Resolves only if every task sharing `barrier` is polled at the same time.
fn rendezvous(barrier: &Arc<Barrier>, value: i32) -> Task<i32> {
    let barrier = Arc::clone(barrier);
    Task::new(move || {
        let barrier = Arc::clone(&barrier);
        async move {
            barrier.wait().await;
            value
        }
    })
}

fn sleepy(ms: u64, value: i32, finished: &Arc<Mutex<Vec<i32>>>) -> Task<i32> {
    let finished = Arc::clone(finished);
    Task::new(move || {
        let finished = Arc::clone(&finished);
        async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            finished.lock().unwrap().push(value);
            value
        }
    })
}

#[tokio::test]
async fn zip_runs_both_tasks_concurrently() {
    let barrier = Arc::new(Barrier::new(2));
    let pair = rendezvous(&barrier, 1).zip(rendezvous(&barrier, 2));

    let result = tokio::time::timeout(Duration::from_secs(5), pair.run()).await;
    assert_eq!(result.ok(), Some((1, 2)));
}

#[tokio::test]
async fn ap_runs_function_and_argument_concurrently() {
    let barrier = Arc::new(Barrier::new(2));
    let f = rendezvous(&barrier, 10).map(|n| move |m: i32| n + m);
    let applied = f.ap(rendezvous(&barrier, 5));

    let result = tokio::time::timeout(Duration::from_secs(5), applied.run()).await;
    assert_eq!(result.ok(), Some(15));
}

#[tokio::test]
async fn all_runs_every_task_concurrently() {
    let barrier = Arc::new(Barrier::new(3));
    let all = Task::all((1..=3).map(|n| rendezvous(&barrier, n)));

    let result = tokio::time::timeout(Duration::from_secs(5), all.run()).await;
    assert_eq!(result.ok(), Some(vec![1, 2, 3]));
}

#[tokio::test]
async fn task_either_zip_runs_concurrently() {
    let barrier = Arc::new(Barrier::new(2));
    let left = TaskEither::<String, i32>::from_task(rendezvous(&barrier, 1));
    let right = TaskEither::<String, i32>::from_task(rendezvous(&barrier, 2));

    let result = tokio::time::timeout(Duration::from_secs(5), left.zip(right).run()).await;
    assert_eq!(result.ok(), Some(Either::right((1, 2))));
}

#[tokio::test(start_paused = true)]
async fn all_keeps_caller_order_not_completion_order() {
    let finished = Arc::new(Mutex::new(Vec::new()));
    let all = Task::all(vec![
        sleepy(30, 1, &finished),
        sleepy(10, 2, &finished),
        sleepy(20, 3, &finished),
    ]);

    assert_eq!(all.run().await, vec![1, 2, 3]);
    assert_eq!(*finished.lock().unwrap(), vec![2, 3, 1]);
}

#[tokio::test(start_paused = true)]
async fn task_either_all_waits_for_every_task_before_failing() {
    let finished = Arc::new(Mutex::new(Vec::new()));
    let all = TaskEither::all(vec![
        TaskEither::<&str, i32>::from_task(sleepy(20, 1, &finished)),
        TaskEither::left("err"),
        TaskEither::from_task(sleepy(40, 3, &finished)),
    ]);

    assert_eq!(all.run().await, Either::left("err"));
    assert_eq!(*finished.lock().unwrap(), vec![1, 3]);
}

#[tokio::test(start_paused = true)]
async fn task_either_all_reports_first_left_in_input_order() {
    let slow_failure = TaskEither::<String, i32>::new(|| async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        Either::left("first".to_string())
    });
    let fast_failure = TaskEither::<String, i32>::left("second".to_string());

    let all = TaskEither::all(vec![slow_failure, fast_failure]);
    assert_eq!(all.run().await, Either::left("first".to_string()));
}

#[tokio::test(start_paused = true)]
async fn flat_map_runs_sequentially() {
    let finished = Arc::new(Mutex::new(Vec::new()));
    let later = Arc::clone(&finished);
    let chained = sleepy(30, 1, &finished).flat_map(move |n| sleepy(10, n + 1, &later));

    assert_eq!(chained.run().await, 2);
    assert_eq!(*finished.lock().unwrap(), vec![1, 2]);
}

#[tokio::test]
async fn combinators_start_nothing_until_run() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let make = move |value: i32| {
        let calls = Arc::clone(&counter);
        TaskEither::<String, i32>::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Either::right(value) }
        })
    };

    let pipeline = TaskEither::map3(make(1), make(2), make(3), |a, b, c| a + b + c)
        .flat_map(move |sum| make(sum))
        .map(|n| n * 10);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(pipeline.run().await, Either::right(60));
    assert_eq!(calls.load(Ordering::SeqCst), 4);

    assert_eq!(pipeline.run().await, Either::right(60));
    assert_eq!(calls.load(Ordering::SeqCst), 8);
}

#[tokio::test]
async fn tasks_run_on_a_multi_threaded_runtime() {
    let task = Task::map2(Task::of(20), Task::new(|| async { 22 }), |a, b| a + b);
    let handle = tokio::spawn(async move { task.run().await });
    assert_eq!(handle.await.unwrap(), 42);
}
