use std::time::Instant;
use tracing::debug;

use crate::data::Catalog;
use crate::format;
use crate::score::NOT_FOUND;

/// Films under this many votes get no statistics.
pub const MIN_VOTOS: f64 = 2000.0;

pub fn votos_titulo(db: &Catalog, titulo: &str) -> String {
    let films = &db.films;

    let start = Instant::now();
    let row = films.find_title(titulo);
    debug!(query = "votos", elapsed = ?start.elapsed());

    let Some(row) = row else {
        return NOT_FOUND.to_string();
    };

    let title = films.title[row].as_deref().unwrap_or_default();
    let vote_count = films.vote_count[row].unwrap_or(0.0);

    if vote_count < MIN_VOTOS {
        return format!("La película '{title}' no cumple con el mínimo de 2000 votos.");
    }

    format!(
        "La película '{title}' fue estrenada en el año {}. La misma cuenta con un total de {} valoraciones, con un promedio de {}.",
        format::year_or_missing(films.release_date[row]),
        vote_count as i64,
        format::score_or_missing(films.vote_average[row]),
    )
}

// SELECT t.title, EXTRACT(YEAR FROM t.release_date), t.vote_count, t.vote_average
// FROM movies AS t
// WHERE LOWER(t.title) = LOWER(:titulo)
//   AND COALESCE(t.vote_count, 0) >= 2000
// LIMIT 1;
