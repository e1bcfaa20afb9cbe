pub mod actor;
pub mod calendar;
pub mod config;
pub mod data;
pub mod dia;
pub mod director;
pub mod error;
pub mod format;
pub mod mes;
pub mod score;
pub mod server;
pub mod votos;

pub use actor::get_actor;
pub use data::{Catalog, DatasetPaths};
pub use dia::cantidad_filmaciones_dia;
pub use director::get_director;
pub use error::CatalogError;
pub use mes::cantidad_filmaciones_mes;
pub use score::score_titulo;
pub use votos::votos_titulo;
