//! Repository layer for database operations.
//!
//! Repositories encapsulate the queries against each table, following the
//! Data Mapper pattern recommended by SeaORM. They are generic over
//! `ConnectionTrait` so the same calls work on a plain connection or inside a
//! transaction.

pub mod memo;

pub use memo::MemoRepository;
