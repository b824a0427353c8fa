/// Numeric conversion helpers.
///
/// This module provides checked conversions from literal text to the
/// evaluator's integer type, so an oversized literal is reported instead of
/// silently wrapping.
pub mod num;

/// Stack growth for the recursive parts of the pipeline.
///
/// Parsing, evaluation and teardown all recurse once per nesting level, so
/// deeply nested input would otherwise overflow the thread's stack.
pub mod stack;
