use std::time::Instant;
use tracing::debug;

use crate::data::Catalog;
use crate::format;

pub const DIRECTOR_JOB: &str = "Director";

pub fn get_director(db: &Catalog, nombre_director: &str) -> String {
    let crew = &db.crew;
    let films = &db.films;

    let start = Instant::now();

    let nombre = nombre_director.to_lowercase();
    let mut matched = false;
    let movie_ids: Vec<i64> = crew
        .crew_name
        .iter()
        .zip(crew.job.iter())
        .zip(crew.movie_id.iter())
        .filter_map(|((name, job), movie_id)| {
            let (name, job) = (name.as_deref()?, job.as_deref()?);
            if job != DIRECTOR_JOB || name.to_lowercase() != nombre {
                return None;
            }
            matched = true;
            *movie_id
        })
        .collect();

    if !matched {
        return format!("No se encontraron películas para el director {nombre_director}.");
    }

    let rows = films.join_rows(&movie_ids);

    let mut retorno_total = 0.0;
    let detalle: Vec<String> = rows
        .iter()
        .map(|&row| {
            let retorno = films.return_[row].unwrap_or(0.0);
            let costo = films.budget[row].unwrap_or(0.0);
            let ganancia = films.revenue[row].unwrap_or(0.0) - costo;
            retorno_total += retorno;

            format!(
                "Película: {}, Fecha de lanzamiento: {}, Retorno: {retorno:.2}, Costo: {}, Ganancia: {}",
                films.title[row].as_deref().unwrap_or_default(),
                films.release_date_raw[row]
                    .as_deref()
                    .unwrap_or(format::NO_DISPONIBLE),
                format::currency(costo),
                format::currency(ganancia),
            )
        })
        .collect();

    debug!(query = "director", films = rows.len(), elapsed = ?start.elapsed());

    format!(
        "El director {nombre_director} tiene un retorno total de {retorno_total:.2}.\nDetalle de sus películas:\n{}",
        detalle.join("\n")
    )
}

// SELECT t.title, t.release_date, COALESCE(t.return, 0),
//        COALESCE(t.budget, 0), COALESCE(t.revenue, 0) - COALESCE(t.budget, 0)
// FROM crew AS cr,
//      movies AS t
// WHERE LOWER(cr.crew_name) = LOWER(:nombre_director)
//   AND cr.job = 'Director'
//   AND cr.movie_id = t.id;
