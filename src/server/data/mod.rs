//! Database repository layer.
//!
//! Repositories handle all database operations for the battle collection. They use SeaORM
//! entity models internally and return domain models to keep the data layer separate from
//! business logic. Every operation issues a single store call, except statistics, which
//! reads inside one transaction so all aggregates share a snapshot.

pub mod battle;
