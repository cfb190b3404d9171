//! Integer sequence exercises
//!
//! - `gray`: reflected binary Gray codes and one-bit neighbors
//! - `subarray`: longest contiguous run shared by two slices

pub mod gray;
pub mod subarray;

pub use gray::{count_different_bits, find_first_duplicate, gray_code, one_bit_neighbors};
pub use subarray::find_length;
