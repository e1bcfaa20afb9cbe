use chrono::Datelike;
use std::time::Instant;
use tracing::debug;

use crate::calendar::{Dia, capitalize};
use crate::data::Catalog;

pub fn cantidad_filmaciones_dia(db: &Catalog, dia: &str) -> String {
    let Some(dia) = Dia::from_nombre(dia) else {
        return "Día ingresado no válido. Por favor ingresa un día en español.".to_string();
    };

    let start = Instant::now();

    let cantidad = db
        .films
        .release_date
        .iter()
        .filter_map(|date| *date)
        .filter(|date| date.weekday().num_days_from_monday() == dia.ordinal())
        .count();

    debug!(query = "dia", elapsed = ?start.elapsed());

    format!(
        "{cantidad} cantidad de películas fueron estrenadas en los días {}.",
        capitalize(dia.nombre())
    )
}

// SELECT COUNT(*)
// FROM movies AS t
// WHERE t.release_date IS NOT NULL
//   AND (EXTRACT(ISODOW FROM t.release_date) - 1) = :dia;
