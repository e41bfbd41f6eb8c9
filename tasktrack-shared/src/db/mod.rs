/// Database layer
///
/// - `pool`: PostgreSQL connection pool management with a startup health check
/// - `migrations`: embedded migration runner
///
/// Models are in the `models` module at crate root level.

pub mod migrations;
pub mod pool;
