pub mod mappers;
pub mod pager;
pub mod predicates;
pub mod query;
pub mod repositories;
pub mod sort;

pub use repositories::PostgresCatalogRepository;
