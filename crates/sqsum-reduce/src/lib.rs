//! Sum-of-squares reduction kernels with two calling conventions
//!
//! This crate computes `sum(x_i^2)` over a 64-bit float buffer, exposing the
//! two axes a caller chooses along when data crosses an execution boundary:
//!
//! - **Data acquisition**: borrow a zero-copy view of caller-managed memory,
//!   or copy into kernel-owned storage ([`SampleBuffer`]) first. Copying is
//!   mandatory when the source lives across an isolation boundary that only
//!   supports pass-by-value; the marshalled entry point
//!   ([`sum_of_squares_copied`]) handles that case end-to-end.
//! - **Execution**: a strictly index-ordered sequential fold, or a
//!   partition-map-combine parallel reduction with a fixed combine order.
//!
//! # Choosing a variant
//!
//! Borrow when the caller can guarantee the memory stays valid and unwritten
//! for the duration of the call; in Rust the shared borrow makes that
//! guarantee structural. Copy when it cannot, or when the data arrives as a
//! marshalled byte image from another memory space.
//!
//! # Example
//!
//! ```rust
//! use sqsum_reduce::{sum_of_squares_borrowed, sum_of_squares_copied, encode_f64_le};
//!
//! let data = vec![3.0, 4.0];
//! assert_eq!(sum_of_squares_borrowed(&data), 25.0);
//!
//! // The same reduction over a marshalled byte image
//! let image = encode_f64_le(&data);
//! assert_eq!(sum_of_squares_copied(&image).unwrap(), 25.0);
//! ```

pub mod buffer;
pub mod marshal;
pub mod sum_squares;

pub use buffer::{SampleBuffer, SAMPLE_ALIGN};
pub use marshal::{decode_f64_le, encode_f64_le};
pub use sum_squares::{sum_of_squares_borrowed, sum_of_squares_copied,
    sum_of_squares_owned_sequential, SumOfSquares};

#[cfg(feature = "parallel")]
pub use sum_squares::sum_of_squares_owned_parallel;
