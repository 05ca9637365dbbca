pub mod metrics;
pub mod serializer;

pub use serializer::TermSerializer;
