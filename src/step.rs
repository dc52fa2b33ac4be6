/// The result of a single iteration step.
///
/// `done` and `value` are independent: a step may be non-terminal without a
/// value, and a terminal step may still carry a final value. Consumers should
/// read both fields rather than infer one from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<T> {
    /// Whether the iterator will produce further values after this step.
    pub done: bool,
    /// The value yielded by this step, if any.
    pub value: Option<T>,
}

impl<T> Step<T> {
    /// Create a non-terminal step carrying a value.
    ///
    /// # Example
    ///
    /// ```
    /// use async_step::Step;
    ///
    /// let step = Step::value("meow");
    /// assert!(!step.done);
    /// assert_eq!(step.value, Some("meow"));
    /// ```
    pub fn value(value: T) -> Self {
        Self {
            done: false,
            value: Some(value),
        }
    }

    /// Create a terminal step with no value.
    ///
    /// # Example
    ///
    /// ```
    /// use async_step::Step;
    ///
    /// let step: Step<()> = Step::done();
    /// assert!(step.done);
    /// assert_eq!(step.value, None);
    /// ```
    pub fn done() -> Self {
        Self {
            done: true,
            value: None,
        }
    }

    /// Create a terminal step carrying a final value.
    ///
    /// # Example
    ///
    /// ```
    /// use async_step::Step;
    ///
    /// let step = Step::done_with("meow");
    /// assert!(step.done);
    /// assert_eq!(step.value, Some("meow"));
    /// ```
    pub fn done_with(value: T) -> Self {
        Self {
            done: true,
            value: Some(value),
        }
    }
}
