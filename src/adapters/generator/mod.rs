//! Response generator adapters.
//!
//! - `BinaryResponseGenerator` - affirming or apologetic fixed reply
//! - `GradedResponseGenerator` - three-way reply naming the product

mod binary;
mod graded;

pub use binary::BinaryResponseGenerator;
pub use graded::GradedResponseGenerator;
