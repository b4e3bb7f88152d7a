//! Terminal rendering of a search report.

use std::fmt::Write;

use padelscan_core::{SearchReport, Slot};

/// Renders the human-readable report.
pub fn render_text(report: &SearchReport) -> String {
    let mut out = String::new();

    let durations = if report.durations.is_empty() {
        "toutes durées".to_string()
    } else {
        let joined = report
            .durations
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{joined} min")
    };

    let _ = writeln!(out, "Date : {}", report.date);
    let _ = writeln!(
        out,
        "Fenêtre : {} -> {} | Durées : {}",
        report.window.start, report.window.end, durations
    );

    for venue in &report.venues {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", venue.venue);
        if venue.slots.is_empty() {
            let _ = writeln!(out, "  Aucun créneau.");
        } else {
            for slot in &venue.slots {
                let _ = writeln!(out, "  - {}", slot_line(slot));
            }
        }
    }

    if !report.errors.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Erreurs :");
        for error in &report.errors {
            let _ = writeln!(out, "  - {error}");
        }
    }

    out
}

fn slot_line(slot: &Slot) -> String {
    let mut line = format!("{} | {} min", slot.start, slot.duration_min);

    if let Some(court) = &slot.court {
        let _ = write!(line, " | {court}");
    }

    if slot.price_per_participant.is_some() || slot.participant_count.is_some() {
        let price = slot
            .price_per_participant
            .map(|cents| format!("{:.2} €", f64::from(cents) / 100.0))
            .unwrap_or_else(|| "-".to_string());
        let count = slot
            .participant_count
            .map(|count| count.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = write!(line, " | {price} / joueur x {count}");
    }

    if let Some(label) = &slot.label {
        if !label.is_empty() {
            let _ = write!(line, " | {label}");
        }
    }

    line
}
