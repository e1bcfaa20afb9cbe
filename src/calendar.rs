//! Spanish month and weekday names.

/// Calendar month, numbered 1..=12 like `chrono::Datelike::month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mes {
    Enero = 1,
    Febrero,
    Marzo,
    Abril,
    Mayo,
    Junio,
    Julio,
    Agosto,
    Septiembre,
    Octubre,
    Noviembre,
    Diciembre,
}

impl Mes {
    pub const ALL: [Mes; 12] = [
        Mes::Enero,
        Mes::Febrero,
        Mes::Marzo,
        Mes::Abril,
        Mes::Mayo,
        Mes::Junio,
        Mes::Julio,
        Mes::Agosto,
        Mes::Septiembre,
        Mes::Octubre,
        Mes::Noviembre,
        Mes::Diciembre,
    ];

    /// Case-insensitive lookup of a Spanish month name.
    pub fn from_nombre(nombre: &str) -> Option<Self> {
        let nombre = nombre.to_lowercase();
        Self::ALL.into_iter().find(|mes| mes.nombre() == nombre)
    }

    pub fn nombre(self) -> &'static str {
        match self {
            Mes::Enero => "enero",
            Mes::Febrero => "febrero",
            Mes::Marzo => "marzo",
            Mes::Abril => "abril",
            Mes::Mayo => "mayo",
            Mes::Junio => "junio",
            Mes::Julio => "julio",
            Mes::Agosto => "agosto",
            Mes::Septiembre => "septiembre",
            Mes::Octubre => "octubre",
            Mes::Noviembre => "noviembre",
            Mes::Diciembre => "diciembre",
        }
    }

    pub fn ordinal(self) -> u32 {
        self as u32
    }
}

/// Day of the week, Monday = 0 like `chrono::Weekday::num_days_from_monday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dia {
    Lunes = 0,
    Martes,
    Miercoles,
    Jueves,
    Viernes,
    Sabado,
    Domingo,
}

impl Dia {
    pub const ALL: [Dia; 7] = [
        Dia::Lunes,
        Dia::Martes,
        Dia::Miercoles,
        Dia::Jueves,
        Dia::Viernes,
        Dia::Sabado,
        Dia::Domingo,
    ];

    /// Case-insensitive lookup of a Spanish weekday name. Accents are required.
    pub fn from_nombre(nombre: &str) -> Option<Self> {
        let nombre = nombre.to_lowercase();
        Self::ALL.into_iter().find(|dia| dia.nombre() == nombre)
    }

    pub fn nombre(self) -> &'static str {
        match self {
            Dia::Lunes => "lunes",
            Dia::Martes => "martes",
            Dia::Miercoles => "miércoles",
            Dia::Jueves => "jueves",
            Dia::Viernes => "viernes",
            Dia::Sabado => "sábado",
            Dia::Domingo => "domingo",
        }
    }

    pub fn ordinal(self) -> u32 {
        self as u32
    }
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod test_calendar {
    use super::*;

    #[test]
    fn test_mes_lookup() {
        assert_eq!(Mes::from_nombre("enero"), Some(Mes::Enero));
        assert_eq!(Mes::from_nombre("DICIEMBRE"), Some(Mes::Diciembre));
        assert_eq!(Mes::from_nombre("Septiembre").map(Mes::ordinal), Some(9));
        assert_eq!(Mes::from_nombre("january"), None);
        assert_eq!(Mes::from_nombre(""), None);
    }

    #[test]
    fn test_mes_ordinals_are_sequential() {
        for (i, mes) in Mes::ALL.into_iter().enumerate() {
            assert_eq!(mes.ordinal(), i as u32 + 1);
        }
    }

    #[test]
    fn test_dia_lookup() {
        assert_eq!(Dia::from_nombre("lunes").map(Dia::ordinal), Some(0));
        assert_eq!(Dia::from_nombre("Miércoles"), Some(Dia::Miercoles));
        assert_eq!(Dia::from_nombre("SÁBADO").map(Dia::ordinal), Some(5));
        assert_eq!(Dia::from_nombre("domingo").map(Dia::ordinal), Some(6));
        assert_eq!(Dia::from_nombre("sabado"), None);
        assert_eq!(Dia::from_nombre("monday"), None);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("enero"), "Enero");
        assert_eq!(capitalize("sábado"), "Sábado");
        assert_eq!(capitalize("mIÉRCOLES"), "Miércoles");
        assert_eq!(capitalize(""), "");
    }
}
