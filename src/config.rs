use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::data::{Catalog, DatasetPaths};
use crate::{actor, dia, director, mes, score, votos};

#[derive(Parser, Debug)]
#[command(name = "filmstats", version, about = "Analytic queries over a movie catalog")]
pub struct Cli {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Where the three tables live.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Directory holding the dataset files
    #[arg(long, env = "FILMSTATS_DATA_DIR", default_value = "Datasets", global = true)]
    pub data_dir: PathBuf,

    /// Films table, relative to the data directory
    #[arg(long, env = "FILMSTATS_MOVIES", default_value = "movies_dataset_sumario.csv", global = true)]
    pub movies: String,

    /// Cast associations, relative to the data directory
    #[arg(long, env = "FILMSTATS_CAST", default_value = "cast_desanidado.csv", global = true)]
    pub cast: String,

    /// Crew associations, relative to the data directory
    #[arg(long, env = "FILMSTATS_CREW", default_value = "directores_desanidado.csv", global = true)]
    pub crew: String,
}

impl DataArgs {
    pub fn paths(&self) -> DatasetPaths {
        DatasetPaths::in_dir(&self.data_dir, &self.movies, &self.cast, &self.crew)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the HTTP API
    Serve {
        /// Bind address for the HTTP server
        #[arg(long, env = "FILMSTATS_BIND", default_value = "0.0.0.0:8000")]
        bind: SocketAddr,
    },

    /// Run one query and print its message
    Query {
        #[arg(value_enum)]
        query: QueryKind,

        /// Month, weekday, title or person name, depending on the query
        argument: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Mes,
    Dia,
    Score,
    Votos,
    Actor,
    Director,
}

impl QueryKind {
    pub fn run(self, db: &Catalog, argument: &str) -> String {
        match self {
            QueryKind::Mes => mes::cantidad_filmaciones_mes(db, argument),
            QueryKind::Dia => dia::cantidad_filmaciones_dia(db, argument),
            QueryKind::Score => score::score_titulo(db, argument),
            QueryKind::Votos => votos::votos_titulo(db, argument),
            QueryKind::Actor => actor::get_actor(db, argument),
            QueryKind::Director => director::get_director(db, argument),
        }
    }
}
