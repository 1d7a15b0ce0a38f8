//! Response generator adapters.
//!
//! - `MockResponseGenerator` - keyword-matching stand-in with simulated latency

mod mock_generator;

pub use mock_generator::MockResponseGenerator;
