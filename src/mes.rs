use chrono::Datelike;
use std::time::Instant;
use tracing::debug;

use crate::calendar::{Mes, capitalize};
use crate::data::Catalog;

pub fn cantidad_filmaciones_mes(db: &Catalog, mes: &str) -> String {
    let Some(mes) = Mes::from_nombre(mes) else {
        return "Mes ingresado no válido. Por favor ingresa un mes en español.".to_string();
    };

    let start = Instant::now();

    let cantidad = db
        .films
        .release_date
        .iter()
        .flatten()
        .filter(|date| date.month() == mes.ordinal())
        .count();

    debug!(query = "mes", elapsed = ?start.elapsed());

    format!(
        "{cantidad} cantidad de películas fueron estrenadas en el mes de {}.",
        capitalize(mes.nombre())
    )
}

// SELECT COUNT(*)
// FROM movies AS t
// WHERE t.release_date IS NOT NULL
//   AND EXTRACT(MONTH FROM t.release_date) = :mes;
