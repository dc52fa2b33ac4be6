use std::future::poll_fn;
use std::pin::Pin;

use futures_core::stream::Stream;

use crate::{AsyncIterator, Step};

/// Create an iterator from an existing [`Stream`] of steps.
///
/// Each stream item surfaces as one step, failures included. Once the stream
/// is exhausted a terminal step is synthesized, and every call past that
/// point yields the same terminal step again without polling the stream.
///
/// # Example
///
/// ```
/// use async_step::prelude::*;
/// use async_step::{from_stream, Step};
/// use futures_lite::stream;
///
/// fn main() {
///     futures_lite::future::block_on(async {
///         let steps = stream::iter(vec![Ok::<_, std::io::Error>(Step::value("meow"))]);
///         let mut iter = from_stream(steps);
///
///         assert_eq!(iter.next().await.unwrap().value, Some("meow"));
///         assert!(iter.next().await.unwrap().done);
///     })
/// }
/// ```
pub fn from_stream<S, T, E>(stream: S) -> FromStream<S>
where
    S: Stream<Item = Result<Step<T>, E>> + Unpin,
{
    FromStream {
        stream,
        exhausted: false,
    }
}

/// An iterator backed by a stream of steps.
///
/// This `struct` is created by the [`from_stream`] function. See its
/// documentation for more.
#[derive(Debug)]
#[must_use = "iterators do nothing unless stepped"]
pub struct FromStream<S> {
    stream: S,
    exhausted: bool,
}

impl<S, T, E> AsyncIterator for FromStream<S>
where
    S: Stream<Item = Result<Step<T>, E>> + Unpin,
{
    type Item = T;
    type Error = E;

    async fn next(&mut self) -> Result<Step<T>, E> {
        if self.exhausted {
            return Ok(Step::done());
        }
        match poll_fn(|cx| Pin::new(&mut self.stream).poll_next(cx)).await {
            Some(res) => res,
            None => {
                self.exhausted = true;
                Ok(Step::done())
            }
        }
    }
}
