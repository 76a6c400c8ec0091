mod query;
mod resolver;
#[cfg(test)]
pub mod testing;
pub mod types;

pub use query::{Resolution, query};
pub use resolver::{Resolve, SystemResolver};
pub use types::DnsRecordType;
