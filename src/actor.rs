use std::time::Instant;
use tracing::debug;

use crate::data::Catalog;

pub fn get_actor(db: &Catalog, nombre_actor: &str) -> String {
    let cast = &db.cast;
    let films = &db.films;

    let start = Instant::now();

    let nombre = nombre_actor.to_lowercase();
    let mut matched = false;
    let movie_ids: Vec<i64> = cast
        .actor_name
        .iter()
        .zip(cast.movie_id.iter())
        .filter_map(|(name, movie_id)| {
            let name = name.as_deref()?;
            if name.to_lowercase() != nombre {
                return None;
            }
            matched = true;
            *movie_id
        })
        .collect();

    if !matched {
        return format!("No se encontraron participaciones para el actor {nombre_actor}.");
    }

    let rows = films.join_rows(&movie_ids);
    let cantidad = rows.len();
    // Seeded fold: an empty f64 `sum()` yields -0.0, which renders as "-0.00".
    let retorno_total = rows
        .iter()
        .map(|&row| films.return_[row].unwrap_or(0.0))
        .fold(0.0, |acc, retorno| acc + retorno);
    let promedio = if cantidad > 0 {
        retorno_total / cantidad as f64
    } else {
        0.0
    };

    debug!(query = "actor", films = cantidad, elapsed = ?start.elapsed());

    format!(
        "El actor {nombre_actor} ha participado de {cantidad} cantidad de filmaciones, el mismo ha conseguido un retorno de {retorno_total:.2} con un promedio de {promedio:.2} por filmación."
    )
}

// SELECT COUNT(*), SUM(COALESCE(t.return, 0)), AVG(COALESCE(t.return, 0))
// FROM cast AS ci,
//      movies AS t
// WHERE LOWER(ci.actor_name) = LOWER(:nombre_actor)
//   AND ci.movie_id = t.id;
