//! Session catalog
//!
//! Every piece of plan content lives here as a template, selected by
//! (intensity level, objective) lookup. The generator stays branch-free
//! over content: it only decides which slot gets which template.

use crate::models::plan::{Objective, Session};

/// Pre-match preparation slots, three and two days out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreMatchLevel {
    /// Three days before the match, intensity 3
    Medium,
    /// Two days before the match, intensity 2
    Low,
}

fn session(kind: &str, detail: &str, intensity: u8) -> Session {
    Session {
        kind: kind.to_string(),
        detail: detail.to_string(),
        intensity,
    }
}

/// Default slot content: full recovery
pub fn rest() -> Session {
    session("Rest", "Recuperación completa. Hidratación y sueño.", 0)
}

/// Match day. Fixed content, never objective-dependent.
pub fn match_day() -> Session {
    session(
        "Match",
        "Partido oficial. Calentamiento 15 min. Mantén concentración.",
        5,
    )
}

/// Day after the match
pub fn regenerative() -> Session {
    session(
        "Regenerativo",
        "Trote suave 15 min + estiramientos. Foco en recuperación.",
        1,
    )
}

/// Day before the match. Intensity 2 is a hard cap for this slot.
pub fn activation() -> Session {
    session(
        "Activación",
        "Activación corta 20 min: movilidad, pases cortos, remates suaves.",
        2,
    )
}

/// Objective-specific preparation session for a pre-match slot
pub fn pre_match(level: PreMatchLevel, objective: Objective) -> Session {
    match (level, objective) {
        (PreMatchLevel::Medium, Objective::Speed) => session(
            "Velocidad / Media",
            "Pasadas cortas 5×30m + circuito de agilidad 3 rondas.",
            3,
        ),
        (PreMatchLevel::Medium, Objective::Endurance) => session(
            "Resistencia / Media",
            "Carrera continua 30 min ritmo moderado + técnica de balón.",
            3,
        ),
        (PreMatchLevel::Medium, Objective::Maintain) => session(
            "Balanceado / Media",
            "Técnica de pase 20 min + trote 20 min. Ejercicios tácticos.",
            3,
        ),
        (PreMatchLevel::Low, Objective::Speed) => session(
            "Velocidad / Baja",
            "Aceleración progresiva 4×20m. Sin forzar. Técnica de carrera.",
            2,
        ),
        (PreMatchLevel::Low, Objective::Endurance) => session(
            "Aeróbico / Baja",
            "Trote suave 25 min. Mantener frecuencia cardíaca baja.",
            2,
        ),
        (PreMatchLevel::Low, Objective::Maintain) => session(
            "Técnica / Baja",
            "Control, dominio y pases cortos. Ritmo tranquilo 25 min.",
            2,
        ),
    }
}

/// The five sessions of a match-free week, Monday through Friday in this
/// order. Saturday and Sunday stay on the rest default.
pub fn no_match_week(objective: Objective) -> [Session; 5] {
    let mut base = [
        session(
            "VO₂ Máx",
            "Intervalos: 8×1 min al 90% + 1 min descanso. Mejora capacidad aeróbica.",
            5,
        ),
        session(
            "Pasadas Explosivas",
            "Sprints 6×40m + cambios de dirección. Máxima potencia muscular.",
            4,
        ),
        session(
            "Fondo",
            "Carrera continua 40 min a ritmo cómodo. Construir base aeróbica.",
            3,
        ),
        session(
            "Técnica",
            "Control, regate, pases en corto y largo. Dominio del balón 45 min.",
            2,
        ),
        session(
            "Descanso Activo",
            "Estiramientos, movilidad articular y foam roller 20 min.",
            1,
        ),
    ];

    match objective {
        Objective::Speed => {
            base[1].detail =
                "Sprints 8×30m + reacciones explosivas. Énfasis en potencia de arranque."
                    .to_string();
            base[1].intensity = 5;
            base[0].detail =
                "Intervalos cortos: 10×30s al máximo + 90s descanso (pasadas explosivas)."
                    .to_string();
        }
        Objective::Endurance => {
            base[2].detail =
                "Carrera continua 45 min ritmo moderado-alto. Trabajo aeróbico principal."
                    .to_string();
            base[2].intensity = 4;
            base[0].detail =
                "VO₂ Máx largo: 6×2 min al 85% + 2 min recuperación activa.".to_string();
        }
        Objective::Maintain => {}
    }

    base
}
