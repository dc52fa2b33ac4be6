#![allow(async_fn_in_trait)]
#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]
#![warn(missing_docs, future_incompatible, unreachable_pub)]

//! Step-based async pull iteration primitives.
//!
//! This is a minimal interface layer over async iteration: a producer is a
//! closure that asynchronously yields one [`Step`] per call, and a consumer
//! drives it one step at a time through [`AsyncIterator::next`], or to
//! completion through [`AsyncIterator::for_each`]. A step carries two
//! independent fields, a `done` flag and an optional value, so a terminal
//! step can still hand over a final value.
//!
//! No iteration engine lives here. Suspension and sequencing are whatever
//! the surrounding runtime provides, and interop with the wider ecosystem
//! goes through [`futures_core::Stream`] in both directions: [`from_stream`]
//! wraps an existing stream of steps, and [`FromFn::into_stream`] exposes a
//! closure-backed iterator as a stream.
//!
//! [`futures_core::Stream`]: futures_core::stream::Stream
//!
//! # Examples
//!
//! ```
//! use async_step::prelude::*;
//! use async_step::{from_fn, Step};
//!
//! fn main() {
//!     futures_lite::future::block_on(async {
//!         let mut n = 0;
//!         let counter = from_fn(move || {
//!             n += 1;
//!             let step = if n < 4 { Step::value(n) } else { Step::done() };
//!             async move { Ok::<_, std::io::Error>(step) }
//!         });
//!
//!         let mut seen = vec![];
//!         counter.for_each(|value| seen.extend(value)).await.unwrap();
//!         assert_eq!(seen, [1, 2, 3]);
//!     })
//! }
//! ```
//!
//! # Design Decisions
//!
//! This library performs no recovery and no bookkeeping on behalf of the
//! producer. Failures surface unchanged to whichever call triggered them,
//! and an iterator is never fused: what happens when stepping past a
//! terminal step is the producer's decision. Consumers that want the fused
//! behavior can go through [`FromFn::into_stream`], which ends after the
//! terminal step by construction.
//!
//! All operations run on one logical thread of control, so no `Send` bounds
//! are required and async functions in traits can be used freely. Steps on a
//! single iterator are strictly sequential; sharing one iterator across call
//! sites that race on [`next`] is not supported.
//!
//! [`next`]: AsyncIterator::next

mod async_iterator;
mod from_fn;
mod from_stream;
mod step;

pub use async_iterator::AsyncIterator;
pub use from_fn::{from_fn, FromFn, IntoStream};
pub use from_stream::{from_stream, FromStream};
pub use step::Step;

/// The `async-step` prelude.
pub mod prelude {
    pub use crate::AsyncIterator as _;
}
