use crate::Step;

/// A trait for dealing with step-based async iterators.
///
/// Unlike [`Iterator`], each call to [`next`] suspends until the underlying
/// producer resolves, and yields a full [`Step`] rather than an `Option`. The
/// terminal step is an ordinary step whose `done` flag is set; this layer
/// never fuses an iterator, so stepping past a terminal step is defined by
/// the producer, not by the trait.
///
/// [`next`]: AsyncIterator::next
pub trait AsyncIterator {
    /// The type of the elements being iterated over.
    type Item;

    /// The type of failures surfaced by the producer.
    type Error;

    /// Advance the iterator and return the next step.
    ///
    /// Invokes the underlying producer exactly once. Producer failures are
    /// returned unchanged; nothing is retried, wrapped, or translated.
    async fn next(&mut self) -> Result<Step<Self::Item>, Self::Error>;

    /// Drive the iterator to completion, invoking `f` once per step.
    ///
    /// Steps are taken in strict sequence; a new step is only requested once
    /// the previous one has resolved. The closure receives each step's value
    /// slot, including the terminal step's, so a run of `n` value steps
    /// followed by one terminal step invokes `f` exactly `n + 1` times. If
    /// the producer fails, no further steps are requested and the failure is
    /// returned.
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
    ///         let counter = from_fn(move || {
    ///             n += 1;
    ///             let step = if n < 3 { Step::value(n) } else { Step::done_with(n) };
    ///             async move { Ok::<_, std::io::Error>(step) }
    ///         });
    ///
    ///         let mut seen = vec![];
    ///         counter.for_each(|value| seen.extend(value)).await.unwrap();
    ///         assert_eq!(seen, [1, 2, 3]);
    ///     })
    /// }
    /// ```
    async fn for_each<F>(mut self, mut f: F) -> Result<(), Self::Error>
    where
        Self: Sized,
        F: FnMut(Option<Self::Item>),
    {
        loop {
            let step = self.next().await?;
            let done = step.done;
            f(step.value);
            if done {
                return Ok(());
            }
        }
    }

    /// Drive the iterator to completion with a fallible closure.
    ///
    /// Behaves like [`for_each`], except that the closure may fail; the
    /// first failure stops consumption and is returned, and no further
    /// steps are requested after it.
    ///
    /// [`for_each`]: AsyncIterator::for_each
    async fn try_for_each<F>(mut self, mut f: F) -> Result<(), Self::Error>
    where
        Self: Sized,
        F: FnMut(Option<Self::Item>) -> Result<(), Self::Error>,
    {
        loop {
            let step = self.next().await?;
            let done = step.done;
            f(step.value)?;
            if done {
                return Ok(());
            }
        }
    }
}
