/// A fixed match day ("jornada") and the date label its news are filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jornada {
    pub number: u32,
    pub date: &'static str,
}

const JORNADAS: [Jornada; 3] = [
    Jornada {
        number: 1,
        date: "2025-10-28",
    },
    Jornada {
        number: 2,
        date: "2025-10-29",
    },
    Jornada {
        number: 3,
        date: "2025-10-30",
    },
];

impl Jornada {
    /// Look up a jornada by its number. Unknown numbers have no jornada.
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        JORNADAS
            .iter()
            .copied()
            .find(|jornada| i64::from(jornada.number) == number)
    }

    #[must_use]
    pub fn all() -> &'static [Jornada] {
        &JORNADAS
    }
}
