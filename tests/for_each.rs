use std::cell::Cell;
use std::rc::Rc;

use anyhow::anyhow;
use async_step::prelude::*;
use async_step::{from_fn, Step};
use futures_lite::future::block_on;

#[test]
fn callback_sees_every_step_in_order() {
    block_on(async {
        let mut n = 0;
        let iter = from_fn(move || {
            n += 1;
            let step = match n {
                1 => Step::value(1),
                2 => Step::value(2),
                _ => Step::done_with(3),
            };
            async move { Ok::<_, anyhow::Error>(step) }
        });

        let mut seen = vec![];
        iter.for_each(|value| seen.push(value)).await.unwrap();

        // The terminal step's value is passed through as well.
        assert_eq!(seen, [Some(1), Some(2), Some(3)]);
    })
}

#[test]
fn immediately_done_invokes_callback_once() {
    block_on(async {
        let iter = from_fn(|| async { Ok::<_, anyhow::Error>(Step::done()) });

        let mut seen = vec![];
        iter.for_each(|value: Option<i32>| seen.push(value)).await.unwrap();

        assert_eq!(seen, [None]);
    })
}

#[test]
fn producer_failure_stops_consumption() {
    block_on(async {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let iter = from_fn(move || {
            counter.set(counter.get() + 1);
            let res = if counter.get() < 3 {
                Ok(Step::value(counter.get()))
            } else {
                Err(anyhow!("producer failed"))
            };
            async move { res }
        });

        let mut invocations = 0;
        let res = iter.for_each(|_| invocations += 1).await;

        assert!(res.is_err());
        // Two values made it through before the third invocation failed,
        // and the producer was never asked for a fourth step.
        assert_eq!(invocations, 2);
        assert_eq!(calls.get(), 3);
    })
}

#[test]
fn callback_failure_stops_consumption() {
    block_on(async {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let iter = from_fn(move || {
            counter.set(counter.get() + 1);
            let step = Step::value(counter.get());
            async move { Ok::<_, anyhow::Error>(step) }
        });

        let res = iter
            .try_for_each(|value| {
                if value == Some(2) {
                    Err(anyhow!("callback failed"))
                } else {
                    Ok(())
                }
            })
            .await;

        assert!(res.is_err());
        assert_eq!(calls.get(), 2);
    })
}
