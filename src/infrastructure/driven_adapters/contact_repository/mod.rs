//! Contact Repository Implementations

mod memory;
mod postgres;

pub use memory::InMemoryContactRepository;
pub use postgres::PostgresContactRepository;
