//! Core pipeline traits.
//!
//! This module defines the fundamental abstractions for data processing:
//!
//! - [`Node`] - A processing unit that transforms input data to output data
//! - [`Sink`] - A fire-and-forget consumer that takes ownership of its input

/// A processing node that transforms input to output.
///
/// Nodes are the building blocks of pipelines. They receive input data,
/// process it, and optionally produce output data.
pub trait Node: Send + Sync {
    type Input;
    type Output;

    /// Process input data and optionally produce output.
    ///
    /// Returns `None` if this invocation produces no output (for example an
    /// empty input quantum). A `None` has no effect on later invocations.
    fn process(&self, input: Self::Input) -> Option<Self::Output>;
}

/// A consumer endpoint of a pipeline.
///
/// Pushing is one-way: ownership of the input transfers to the sink and the
/// caller gets no acknowledgment back. A sink must not surface transient
/// delivery failures to its producer.
pub trait Sink: Send + Sync {
    type Input;

    fn push(&self, input: Self::Input);
}
