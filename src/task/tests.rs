//! Tests for Task and TaskEither.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::{Either, Maybe, Task, TaskEither, Thrown};

fn counting_task(calls: &Arc<AtomicUsize>, value: i32) -> Task<i32> {
    let calls = Arc::clone(calls);
    Task::new(move || {
        calls.fetch_add(1, Ordering::SeqCst);
        async move { value }
    })
}

// Constructor tests
#[tokio::test]
async fn test_of_resolves_to_value() {
    assert_eq!(Task::of(42).run().await, 42);
}

#[tokio::test]
async fn test_new_is_lazy_and_reruns() {
    let calls = Arc::new(AtomicUsize::new(0));
    let task = counting_task(&calls, 1).map(|x| x + 1);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(task.run().await, 2);
    assert_eq!(task.run().await, 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_clone_shares_producer() {
    let calls = Arc::new(AtomicUsize::new(0));
    let task = counting_task(&calls, 7);
    let copy = task.clone();
    assert_eq!(copy.run().await, 7);
    assert_eq!(task.run().await, 7);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_debug_hides_producer() {
    assert_eq!(format!("{:?}", Task::of(1)), "Task { producer: \"<function>\" }");
    assert_eq!(
        format!("{:?}", TaskEither::<String, i32>::right(1)),
        "TaskEither { producer: \"<function>\" }"
    );
}

// Map / FlatMap tests
#[tokio::test]
async fn test_flat_map_builds_second_task_after_first() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let first_log = Arc::clone(&log);
    let first = Task::new(move || {
        let log = Arc::clone(&first_log);
        async move {
            log.lock().unwrap().push("first");
            3
        }
    });
    let second_log = Arc::clone(&log);
    let chained = first.flat_map(move |n| {
        second_log.lock().unwrap().push("build second");
        Task::of(n * 2)
    });

    assert!(log.lock().unwrap().is_empty());
    assert_eq!(chained.run().await, 6);
    assert_eq!(*log.lock().unwrap(), vec!["first", "build second"]);
}

#[tokio::test]
async fn test_tap_observes_without_changing() {
    let seen = Arc::new(AtomicUsize::new(0));
    let observer = Arc::clone(&seen);
    let task = Task::of(5usize).tap(move |n| {
        observer.store(*n, Ordering::SeqCst);
    });
    assert_eq!(task.run().await, 5);
    assert_eq!(seen.load(Ordering::SeqCst), 5);
}

// Combining tests
#[tokio::test]
async fn test_ap_applies_function() {
    let f = Task::of(|n: i32| n + 1);
    assert_eq!(f.ap(Task::of(41)).run().await, 42);
}

#[tokio::test]
async fn test_map3_and_all_keep_order() {
    let sum = Task::map3(Task::of(1), Task::of(2), Task::of(3), |a, b, c| a * 100 + b * 10 + c);
    assert_eq!(sum.run().await, 123);

    let all = Task::all((1..=5).map(Task::of));
    assert_eq!(all.run().await, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_all_invokes_every_producer_each_run() {
    let calls = Arc::new(AtomicUsize::new(0));
    let all = Task::all(vec![counting_task(&calls, 1), counting_task(&calls, 2)]);
    assert_eq!(all.run().await, vec![1, 2]);
    assert_eq!(all.run().await, vec![1, 2]);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

// TaskEither constructor tests
#[tokio::test]
async fn test_task_either_constructors() {
    assert_eq!(TaskEither::<String, _>::right(1).run().await, Either::right(1));
    assert_eq!(TaskEither::<_, i32>::left("e").run().await, Either::left("e"));
    assert_eq!(
        TaskEither::from_either(Either::<&str, i32>::left("x")).run().await,
        Either::left("x")
    );
    assert_eq!(
        TaskEither::<&str, i32>::from_task(Task::of(2)).run().await,
        Either::right(2)
    );
    assert_eq!(
        TaskEither::<&str, i32>::left_task(Task::of("late")).run().await,
        Either::left("late")
    );
    assert_eq!(
        TaskEither::from_maybe(Maybe::<i32>::none(), || "absent").run().await,
        Either::left("absent")
    );
    assert_eq!(
        TaskEither::from_maybe(Maybe::some(4), || "absent").run().await,
        Either::<&str, i32>::right(4)
    );
}

// TaskEither transformation tests
#[tokio::test]
async fn test_task_either_transformations() {
    let right = TaskEither::<String, i32>::right(10);
    let left = TaskEither::<String, i32>::left("bad".to_string());

    assert_eq!(right.clone().map(|x| x * 2).run().await, Either::right(20));
    assert_eq!(
        left.clone().map(|x| x * 2).run().await,
        Either::left("bad".to_string())
    );
    assert_eq!(
        left.clone().map_left(|e| e.len()).run().await,
        Either::<usize, i32>::left(3)
    );
    assert_eq!(
        right.clone().bimap(|e| e.len(), |x| x + 1).run().await,
        Either::right(11)
    );
    assert_eq!(right.clone().swap().run().await, Either::left(10));
    assert_eq!(
        right
            .clone()
            .filter_or_else(|x| *x > 100, || "too small".to_string())
            .run()
            .await,
        Either::left("too small".to_string())
    );
    assert_eq!(
        right.flat_map_either(|x| Either::right(x.to_string())).run().await,
        Either::right("10".to_string())
    );
}

#[tokio::test]
async fn test_task_either_flat_map_skips_on_left() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let task = TaskEither::<&str, i32>::left("stop").flat_map(move |x| {
        counter.fetch_add(1, Ordering::SeqCst);
        TaskEither::right(x + 1)
    });
    assert_eq!(task.run().await, Either::left("stop"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_task_either_or_else_recovers() {
    let recovered = TaskEither::<&str, i32>::left("miss")
        .or_else(|e| TaskEither::<String, i32>::right(e.len() as i32));
    assert_eq!(recovered.run().await, Either::right(4));

    let untouched = TaskEither::<&str, i32>::right(1)
        .or_else(|_| TaskEither::<String, i32>::left("unused".to_string()));
    assert_eq!(untouched.run().await, Either::right(1));
}

#[tokio::test]
async fn test_task_either_taps() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let on_right = Arc::clone(&seen);
    let on_left = Arc::clone(&seen);
    let task = TaskEither::<String, i32>::right(1)
        .tap(move |v| on_right.lock().unwrap().push(format!("right {}", v)))
        .tap_left(move |e| on_left.lock().unwrap().push(format!("left {}", e)));
    assert_eq!(task.run().await, Either::right(1));
    assert_eq!(*seen.lock().unwrap(), vec!["right 1".to_string()]);
}

// TaskEither combining tests
#[tokio::test]
async fn test_task_either_ap_receiver_left_wins() {
    let f = TaskEither::<&str, fn(i32) -> i32>::left("no function");
    let result = f.ap(TaskEither::left("no argument"));
    assert_eq!(result.run().await, Either::left("no function"));

    let f = TaskEither::<&str, _>::right(|n: i32| n * 3);
    assert_eq!(f.clone().ap(TaskEither::right(2)).run().await, Either::right(6));
    assert_eq!(
        f.ap(TaskEither::left("no argument")).run().await,
        Either::left("no argument")
    );
}

#[tokio::test]
async fn test_task_either_map2_map3() {
    let sum = TaskEither::map2(
        TaskEither::<&str, i32>::right(1),
        TaskEither::right(2),
        |a, b| a + b,
    );
    assert_eq!(sum.run().await, Either::right(3));

    let failed = TaskEither::map3(
        TaskEither::<&str, i32>::right(1),
        TaskEither::<&str, i32>::left("e2"),
        TaskEither::<&str, i32>::left("e3"),
        |a, b, c| a + b + c,
    );
    assert_eq!(failed.run().await, Either::left("e2"));
}

#[tokio::test]
async fn test_task_either_all_runs_every_task() {
    let calls = Arc::new(AtomicUsize::new(0));
    let tasks = vec![
        TaskEither::<&str, i32>::from_task(counting_task(&calls, 1)),
        TaskEither::left("err"),
        TaskEither::from_task(counting_task(&calls, 3)),
    ];
    assert_eq!(TaskEither::all(tasks).run().await, Either::left("err"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    let empty = TaskEither::<&str, i32>::all(Vec::new());
    assert_eq!(empty.run().await, Either::right(vec![]));
}

// Terminal tests
#[tokio::test]
async fn test_fold_and_get_or_else() {
    let left = TaskEither::<String, i32>::left("four".to_string());
    let folded = left.clone().fold(|e| e.len() as i32, |v| v);
    assert_eq!(folded.run().await, 4);
    assert_eq!(left.get_or_else(|_| -1).run().await, -1);

    let right = TaskEither::<String, i32>::right(9);
    assert_eq!(right.clone().get_or_else(|_| -1).run().await, 9);
    assert_eq!(
        right.into_task().run().await,
        Either::right(9)
    );
}

// try_catch tests
#[tokio::test]
async fn test_try_catch_is_lazy() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let task = TaskEither::try_catch(
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, String>(1) }
        },
        |thrown: Thrown<String>| thrown.to_string(),
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(task.run().await, Either::right(1));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_try_catch_rejection_becomes_left() {
    let task = TaskEither::try_catch(
        || async { Err::<i32, _>(503u16) },
        |thrown| match thrown {
            Thrown::Rejected(code) => format!("status {}", code),
            Thrown::Panicked(msg) => msg,
        },
    );
    assert_eq!(task.run().await, Either::left("status 503".to_string()));
}

#[tokio::test]
async fn test_try_catch_sync_panic_becomes_left() {
    #[allow(unreachable_code)]
    let task = TaskEither::try_catch(
        || -> futures::future::Ready<Result<i32, String>> { panic!("before the future") },
        |thrown: Thrown<String>| thrown,
    );
    assert_eq!(
        task.run().await,
        Either::left(Thrown::Panicked("before the future".to_string()))
    );
}

#[tokio::test]
async fn test_try_catch_async_panic_becomes_left() {
    let task = TaskEither::try_catch(
        || async {
            let items: Vec<i32> = Vec::new();
            if items.is_empty() {
                panic!("while polling");
            }
            Ok::<_, String>(items[0])
        },
        |thrown: Thrown<String>| thrown.is_panic(),
    );
    assert_eq!(task.run().await, Either::left(true));
}

#[cfg(feature = "async")]
mod delay_tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_delay_postpones_producer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let task = counting_task(&calls, 1).delay(Duration::from_secs(5));

        let started = tokio::time::Instant::now();
        assert_eq!(task.run().await, 1);
        assert!(started.elapsed() >= Duration::from_secs(5));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_either_delay_keeps_left() {
        let task = TaskEither::<&str, i32>::left("late").delay(Duration::from_millis(50));
        assert_eq!(task.run().await, Either::left("late"));
    }
}
