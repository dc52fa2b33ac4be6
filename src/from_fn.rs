use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::stream::Stream;
use pin_project_lite::pin_project;

use crate::{AsyncIterator, Step};

/// Create an iterator from a producer closure.
///
/// The closure is invoked once per [`next`] call, never at construction time,
/// and its captures are the iterator's position. It must be safe to invoke
/// again after each of its own completions; whether it terminates at all is
/// its own responsibility.
///
/// [`next`]: AsyncIterator::next
///
/// # Example
///
/// ```
/// use async_step::prelude::*;
/// use async_step::{from_fn, Step};
///
/// fn main() {
///     futures_lite::future::block_on(async {
///         let mut n = 0;
///         let mut counter = from_fn(move || {
///             n += 1;
///             let step = if n < 4 { Step::value(n) } else { Step::done() };
///             async move { Ok::<_, std::io::Error>(step) }
///         });
///
///         let step = counter.next().await.unwrap();
///         assert_eq!(step.value, Some(1));
///     })
/// }
/// ```
pub fn from_fn<F, Fut, T, E>(producer: F) -> FromFn<F>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Step<T>, E>>,
{
    FromFn { producer }
}

/// An iterator backed by a producer closure.
///
/// This `struct` is created by the [`from_fn`] function. See its
/// documentation for more.
#[must_use = "iterators do nothing unless stepped"]
pub struct FromFn<F> {
    producer: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<F, Fut, T, E> AsyncIterator for FromFn<F>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Step<T>, E>>,
{
    type Item = T;
    type Error = E;

    async fn next(&mut self) -> Result<Step<T>, E> {
        (self.producer)().await
    }
}

impl<F, Fut, T, E> FromFn<F>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Step<T>, E>>,
{
    /// Convert this iterator into a [`Stream`] of steps.
    ///
    /// The stream yields one item per step and ends after yielding a step
    /// whose `done` flag is set, or after yielding a producer failure. This
    /// is the one place the step contract is mapped onto the stream
    /// contract; consuming the iterator through [`next`] instead leaves
    /// behavior past the terminal step up to the producer.
    ///
    /// [`next`]: AsyncIterator::next
    pub fn into_stream(self) -> IntoStream<F, Fut> {
        IntoStream {
            producer: self.producer,
            future: None,
            done: false,
        }
    }
}

pin_project! {
    /// A stream of steps over a producer closure.
    ///
    /// This `struct` is created by the [`into_stream`] method on [`FromFn`].
    /// See its documentation for more.
    ///
    /// [`into_stream`]: FromFn::into_stream
    #[must_use = "streams do nothing unless polled or .awaited"]
    pub struct IntoStream<F, Fut> {
        producer: F,
        #[pin]
        future: Option<Fut>,
        done: bool,
    }
}

impl<F, Fut> fmt::Debug for IntoStream<F, Fut> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoStream")
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<F, Fut, T, E> Stream for IntoStream<F, Fut>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Step<T>, E>>,
{
    type Item = Result<Step<T>, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }
        loop {
            match this.future.as_mut().as_pin_mut() {
                Some(fut) => {
                    let res = match fut.poll(cx) {
                        Poll::Ready(res) => res,
                        Poll::Pending => return Poll::Pending,
                    };
                    this.future.set(None);
                    match &res {
                        Ok(step) if step.done => *this.done = true,
                        Err(_) => *this.done = true,
                        Ok(_) => {}
                    }
                    return Poll::Ready(Some(res));
                }
                None => {
                    let fut = (this.producer)();
                    this.future.set(Some(fut));
                }
            }
        }
    }
}
