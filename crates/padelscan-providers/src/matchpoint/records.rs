//! Serde models for the Matchpoint grid exchange.

use serde::{Deserialize, Serialize};

/// Request body for the `ObtenerCuadro` data call.
#[derive(Debug, Clone, Serialize)]
pub struct GridRequest<'a> {
    /// Grid identifier.
    #[serde(rename = "idCuadro")]
    pub cuadro_id: &'a str,
    /// Date in dd/mm/yyyy form.
    pub fecha: &'a str,
    /// The short-lived key lifted from the grid page.
    pub key: &'a str,
}

/// Top-level grid payload (ASP.NET wraps the data under `d`).
#[derive(Debug, Clone, Deserialize)]
pub struct GridResponse {
    /// The actual grid data.
    #[serde(default)]
    pub d: GridPayload,
}

/// The grid body: one column per physical court.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridPayload {
    /// Court columns.
    #[serde(rename = "Columnas", default)]
    pub columns: Vec<ColumnRecord>,
}

/// One court column with its fixed windows and reservations.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnRecord {
    /// Court name.
    #[serde(rename = "TextoPrincipal", default)]
    pub court: Option<String>,
    /// Bookable candidate windows.
    #[serde(rename = "HorariosFijos", default)]
    pub fixed_windows: Vec<IntervalRecord>,
    /// Existing reservations excluding overlapping candidates.
    #[serde(rename = "Ocupaciones", default)]
    pub reservations: Vec<IntervalRecord>,
}

/// A start/end pair; the display ("Mostrar") variants take precedence when
/// present and non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntervalRecord {
    /// Raw start time.
    #[serde(rename = "StrHoraInicio", default)]
    pub start: Option<String>,
    /// Display start time, preferred over the raw one.
    #[serde(rename = "StrHoraInicioMostrar", default)]
    pub start_display: Option<String>,
    /// Raw end time.
    #[serde(rename = "StrHoraFin", default)]
    pub end: Option<String>,
    /// Display end time, preferred over the raw one.
    #[serde(rename = "StrHoraFinMostrar", default)]
    pub end_display: Option<String>,
}

impl IntervalRecord {
    /// Effective start string, display form first.
    pub fn start_str(&self) -> Option<&str> {
        effective(self.start_display.as_deref(), self.start.as_deref())
    }

    /// Effective end string, display form first.
    pub fn end_str(&self) -> Option<&str> {
        effective(self.end_display.as_deref(), self.end.as_deref())
    }
}

fn effective<'a>(display: Option<&'a str>, raw: Option<&'a str>) -> Option<&'a str> {
    display.filter(|s| !s.is_empty()).or(raw).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_variant_takes_precedence() {
        let record: IntervalRecord = serde_json::from_str(
            r#"{"StrHoraInicio": "09:00", "StrHoraInicioMostrar": "09:30", "StrHoraFin": "11:00"}"#,
        )
        .unwrap();
        assert_eq!(record.start_str(), Some("09:30"));
        assert_eq!(record.end_str(), Some("11:00"));
    }

    #[test]
    fn empty_display_falls_back_to_raw() {
        let record: IntervalRecord = serde_json::from_str(
            r#"{"StrHoraInicio": "09:00", "StrHoraInicioMostrar": ""}"#,
        )
        .unwrap();
        assert_eq!(record.start_str(), Some("09:00"));
        assert_eq!(record.end_str(), None);
    }

    #[test]
    fn decodes_full_grid() {
        let json = r#"{
            "d": {
                "Columnas": [{
                    "TextoPrincipal": "Pista 1",
                    "HorariosFijos": [{"StrHoraInicio": "09:00", "StrHoraFin": "10:30"}],
                    "Ocupaciones": [{"StrHoraInicio": "09:30", "StrHoraFin": "10:00"}]
                }]
            }
        }"#;
        let grid: GridResponse = serde_json::from_str(json).unwrap();
        assert_eq!(grid.d.columns.len(), 1);
        assert_eq!(grid.d.columns[0].court.as_deref(), Some("Pista 1"));
        assert_eq!(grid.d.columns[0].fixed_windows.len(), 1);
        assert_eq!(grid.d.columns[0].reservations.len(), 1);
    }

    #[test]
    fn tolerates_empty_payload() {
        let grid: GridResponse = serde_json::from_str(r#"{"d": {}}"#).unwrap();
        assert!(grid.d.columns.is_empty());
    }

    #[test]
    fn grid_request_serializes_platform_names() {
        let request = GridRequest {
            cuadro_id: "4",
            fecha: "12/12/2025",
            key: "abc",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["idCuadro"], "4");
        assert_eq!(json["fecha"], "12/12/2025");
        assert_eq!(json["key"], "abc");
    }
}
