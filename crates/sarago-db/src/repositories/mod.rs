//! Repository implementations
//!
//! Concrete implementations of the repository traits defined in
//! sarago-core, using sqlx for MySQL access.

pub mod cdr_repo;
pub mod folder_repo;
pub mod params_repo;

pub use cdr_repo::MySqlCdrRepository;
pub use folder_repo::MySqlFolderRepository;
pub use params_repo::MySqlParamsRepository;
