use std::time::Instant;
use tracing::debug;

use crate::data::Catalog;
use crate::format;

pub const NOT_FOUND: &str = "No se encontró ninguna filmación con ese título.";

pub fn score_titulo(db: &Catalog, titulo: &str) -> String {
    let films = &db.films;

    let start = Instant::now();
    let row = films.find_title(titulo);
    debug!(query = "score", elapsed = ?start.elapsed());

    let Some(row) = row else {
        return NOT_FOUND.to_string();
    };

    format!(
        "La película '{}' fue estrenada en el año {} con un score/popularidad de {}.",
        films.title[row].as_deref().unwrap_or_default(),
        format::year_or_missing(films.release_date[row]),
        format::score_or_missing(films.vote_average[row]),
    )
}

// SELECT t.title, EXTRACT(YEAR FROM t.release_date), t.vote_average
// FROM movies AS t
// WHERE LOWER(t.title) = LOWER(:titulo)
// LIMIT 1;
