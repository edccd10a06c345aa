//! Integration tests: visiting order, early exit, nesting, error and panic
//! paths, dynamic values

use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};

use loop_break::prelude::*;
use pretty_assertions::assert_eq;

/// Collect whatever indices `run` records
fn visited_indices<F>(run: F) -> Vec<usize>
where
    F: FnOnce(&mut Vec<usize>),
{
    let mut seen = Vec::new();
    run(&mut seen);
    seen
}

// ============================================================================
// Visiting order
// ============================================================================

#[test]
fn test_map_matches_visitor_per_index() {
    let seq = vec![4, 8, 15, 16, 23, 42];
    let out: Exit<Vec<(usize, i32)>, ()> =
        map(&seq, &mut (), |_, x, i, all: &Vec<i32>| Flow::Continue((i, x + all[0])));
    let expected: Vec<(usize, i32)> = seq.iter().enumerate().map(|(i, x)| (i, x + 4)).collect();
    assert_eq!(out, Exit::Completed(expected));
}

#[test]
fn test_right_variants_visit_descending() {
    let seq = ["a", "b", "c", "d"];

    let seen = visited_indices(|seen| {
        let _: Exit<Vec<()>, ()> = map_right(&seq, seen, |seen, _, i, _| {
            seen.push(i);
            Flow::Continue(())
        });
    });
    assert_eq!(seen, vec![3, 2, 1, 0]);

    let seen = visited_indices(|seen| {
        let _: Exit<Vec<&str>, ()> = filter_right(&seq, seen, |seen, _, i, _| {
            seen.push(i);
            Flow::Continue(true)
        });
    });
    assert_eq!(seen, vec![3, 2, 1, 0]);

    let out: Exit<Vec<usize>, (), Option<()>> =
        for_each_right(&seq, Vec::new(), None, |seen, _, i, _| {
            seen.push(i);
            Flow::Continue(())
        });
    assert_eq!(out, Exit::Completed(vec![3, 2, 1, 0]));
}

#[test]
fn test_right_results_are_in_visiting_order() {
    let out: Exit<Vec<i32>, ()> = map(&[1, 2, 3], &mut (), |_, x, _, _| Flow::Continue(x * 10));
    assert_eq!(out, Exit::Completed(vec![10, 20, 30]));

    let out: Exit<Vec<i32>, ()> =
        map_right(&[1, 2, 3], &mut (), |_, x, _, _| Flow::Continue(x * 10));
    assert_eq!(out, Exit::Completed(vec![30, 20, 10]));

    let out: Exit<Vec<i32>, ()> =
        filter_right(&[1, 2, 3, 4, 5], &mut (), |_, x, _, _| Flow::Continue(x % 2));
    assert_eq!(out, Exit::Completed(vec![5, 3, 1]));
}

#[test]
fn test_deque_sequence() {
    let mut seq = VecDeque::from(vec![2, 3]);
    seq.push_front(1);
    let out: Exit<Vec<i32>, ()> = seq.loop_map(&mut (), |_, x, _, _| Flow::Continue(*x));
    assert_eq!(out, Exit::Completed(vec![1, 2, 3]));
}

// ============================================================================
// Early termination
// ============================================================================

#[test]
fn test_bare_break_stops_forward_scan() {
    let seq = [10, 20, 30, 40, 50];
    let mut seen = Vec::new();
    let out: Exit<Vec<i32>, ()> = map(&seq, &mut seen, |seen, x, i, _| {
        seen.push(i);
        if i == 2 {
            Flow::BREAK
        } else {
            Flow::Continue(*x)
        }
    });
    assert_eq!(out, Exit::Stopped(vec![10, 20]));
    assert_eq!(seen, vec![0, 1, 2]);
}

#[test]
fn test_bare_break_stops_reverse_scan() {
    let seq = [10, 20, 30, 40, 50];
    let mut seen = Vec::new();
    let out: Exit<Vec<i32>, ()> = filter_right(&seq, &mut seen, |seen, _, i, _| {
        seen.push(i);
        if i == 2 {
            Flow::RETURN
        } else {
            Flow::Continue(true)
        }
    });
    assert_eq!(out, Exit::Stopped(vec![50, 40]));
    assert_eq!(seen, vec![4, 3, 2]);
}

#[test]
fn test_break_with_value_overrides_accumulator() {
    let out: Exit<Vec<i32>, i32> = map(&[1, 2, 3, 4], &mut (), |_, x, _, _| {
        if *x == 3 {
            Flow::returning(-3)
        } else {
            Flow::Continue(*x)
        }
    });
    assert_eq!(out, Exit::Returned(-3));
}

#[test]
fn test_filter_returns_found() {
    let out: Exit<Vec<&str>, &str> = filter(&["a", "b", "c"], &mut (), |_, _, i, _| {
        if i == 1 {
            Flow::returning("found")
        } else {
            Flow::Continue(false)
        }
    });
    assert_eq!(out, Exit::Returned("found"));
}

#[test]
fn test_for_each_results() {
    let out: Exit<&str, (), Option<()>> =
        for_each(&[9, 8, 7], "ctx", None, |_, _, _, _| Flow::Continue(()));
    assert_eq!(out, Exit::Completed("ctx"));

    let out = for_each(&[9, 8, 7], "ctx", Some("default"), |_, v, _, _| {
        if *v == 7 {
            Flow::Break
        } else {
            Flow::Continue(())
        }
    });
    assert_eq!(out, Exit::Stopped(Some("default")));

    let out = for_each(&[9, 8, 7], "ctx", Some("default"), |_, v, _, _| {
        if *v == 8 {
            Flow::Return("eight")
        } else {
            Flow::Continue(())
        }
    });
    assert_eq!(out, Exit::Returned("eight"));
}

#[test]
fn test_break_without_value_yields_empty_value() {
    let out: Exit<Vec<Value>, Value> =
        map(&[1, 2], &mut (), |_, _, _, _| Flow::returning_default());
    assert_eq!(out, Exit::Returned(Value::Undefined));
}

// ============================================================================
// Nesting
// ============================================================================

/// How the inner loop of `outer_with_inner` ends
#[derive(Debug, Clone, Copy)]
enum Inner {
    Complete,
    Break,
    Return,
}

/// Outer loop whose visitor runs an inner loop on each row
///
/// The outer context records every inner outcome.
fn outer_with_inner(mode: Inner) -> (Exit<Vec<i32>, ()>, Vec<Exit<Vec<i32>, i32>>) {
    let rows = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    let mut inner_exits = Vec::new();
    let out = map(&rows, &mut inner_exits, |inner_exits, row, i, _| {
        let inner: Exit<Vec<i32>, i32> = map(row, &mut (), |_, x, _, _| match mode {
            Inner::Return if *x % 3 == 0 => Flow::Return(*x),
            Inner::Break if *x % 3 == 2 => Flow::Break,
            _ => Flow::Continue(*x),
        });
        inner_exits.push(inner);
        if i == 2 {
            Flow::Break
        } else {
            Flow::Continue(row[0])
        }
    });
    (out, inner_exits)
}

#[test]
fn test_inner_break_does_not_disturb_outer() {
    let (plain, inner) = outer_with_inner(Inner::Complete);
    assert_eq!(plain, Exit::Stopped(vec![1, 4]));
    assert!(inner.iter().all(Exit::is_completed));

    let (out, inner) = outer_with_inner(Inner::Break);
    assert_eq!(out, plain);
    assert_eq!(
        inner,
        vec![
            Exit::Stopped(vec![1]),
            Exit::Stopped(vec![4]),
            Exit::Stopped(vec![7]),
        ]
    );
}

#[test]
fn test_inner_break_with_value_does_not_disturb_outer() {
    let (plain, _) = outer_with_inner(Inner::Complete);
    let (out, inner) = outer_with_inner(Inner::Return);
    assert_eq!(out, plain);
    assert_eq!(
        inner,
        vec![Exit::Returned(3), Exit::Returned(6), Exit::Returned(9)]
    );
}

#[test]
fn test_inner_return_value_is_local() {
    let rows = [["x", "y"], ["z", "w"]];
    let out: Exit<Vec<Value>, ()> = map(&rows, &mut (), |_, row, _, _| {
        let found: Exit<Vec<&str>, &str> = filter(row, &mut (), |_, s, _, _| {
            if *s == "y" {
                Flow::Return("hit")
            } else {
                Flow::Continue(true)
            }
        });
        Flow::Continue(found.into_dynamic())
    });
    assert_eq!(
        out,
        Exit::Completed(vec![Value::from("hit"), Value::from(vec!["z", "w"])])
    );
}

// ============================================================================
// Error and panic paths
// ============================================================================

#[derive(Debug, PartialEq)]
struct Rejected(usize);

#[test]
fn test_try_variants_return_visitor_error_unchanged() {
    let seq = [1, 2, 3, 4];
    let out = try_filter_right(&seq, &mut (), |_, x, i, _| {
        if *x == 2 {
            Err(Rejected(i))
        } else {
            Ok(Flow::<bool, ()>::Continue(true))
        }
    });
    assert_eq!(out, Err(Rejected(1)));

    let out = try_for_each(&seq, 0, None::<()>, |n, _, _, _| {
        *n += 1;
        Ok::<_, Rejected>(Flow::Continue(()))
    });
    assert_eq!(out, Ok(Exit::Completed(4)));

    let out = try_map_right(&seq, &mut (), |_, x, _, _| {
        Ok::<_, Rejected>(if *x == 3 { Flow::Return("three") } else { Flow::Continue(*x) })
    });
    assert_eq!(out, Ok(Exit::Returned("three")));
}

#[test]
fn test_panicking_inner_loop_leaves_outer_intact() {
    let rows = vec![vec![1], vec![2], vec![3]];
    let out: Exit<Vec<bool>, ()> = map(&rows, &mut (), |_, row, _, _| {
        let inner = panic::catch_unwind(AssertUnwindSafe(|| {
            let _: Exit<Vec<i32>, ()> = map(row, &mut (), |_, x, _, _| {
                if *x == 2 {
                    panic!("visitor failure");
                }
                Flow::Continue(*x)
            });
        }));
        Flow::Continue(inner.is_ok())
    });
    assert_eq!(out, Exit::Completed(vec![true, false, true]));
}

// ============================================================================
// Threads
// ============================================================================

#[test]
fn test_concurrent_loops_share_no_state() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                let seq: Vec<i32> = (0..1000).collect();
                let out: Exit<Vec<i32>, i32> = map(&seq, &mut (), |_, x, _, _| {
                    if *x == 500 + t {
                        Flow::Return(t)
                    } else {
                        Flow::Continue(*x)
                    }
                });
                out
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let out = handle.join().expect("worker thread panicked");
        assert_eq!(out, Exit::Returned(t as i32));
    }
}

// ============================================================================
// Dynamic values
// ============================================================================

#[test]
fn test_dynamic_filter_scenario() {
    let seq = Value::from(vec!["a", "b", "c"]);
    let items = seq.try_as_array().expect("array value");
    let out: Exit<Vec<Value>, Value> = filter(items, &mut (), |_, _, i, _| {
        if i == 1 {
            Flow::returning(Value::from("found"))
        } else {
            Flow::Continue(Value::Bool(false))
        }
    });
    assert_eq!(out.into_dynamic(), Value::from("found"));
}

#[test]
fn test_dynamic_filter_by_truthiness() {
    let seq = Value::Array(vec![
        Value::I64(0),
        Value::from("x"),
        Value::Null,
        Value::F64(2.5),
        Value::from(""),
    ]);
    let items = seq.try_as_array().expect("array value");
    let out: Exit<Vec<Value>, Value> =
        filter(items, &mut (), |_, v, _, _| Flow::Continue(v.clone()));
    assert_eq!(
        out.into_dynamic(),
        Value::Array(vec![Value::from("x"), Value::F64(2.5)])
    );
}

#[test]
fn test_into_completed_reports_early_exit() {
    let out: Exit<Vec<i32>, ()> = map(&[1, 2], &mut (), |_, _, _, _| Flow::Break);
    assert_eq!(out.into_completed(), Err(LoopError::Stopped));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let out: Exit<Vec<Value>, Value> = Exit::Returned(Value::from("found"));
    let json = serde_json::to_string(&out).expect("serialize");
    let back: Exit<Vec<Value>, Value> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, out);
}
