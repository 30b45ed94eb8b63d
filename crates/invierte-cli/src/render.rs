//! Text rendering for the list card, the detail card and the bar chart.
//!
//! Field labels and ordering follow the original screens. Every value
//! passes the display rules first: fields holding a sentinel value are
//! suppressed entirely, string values are first-letter-capitalized,
//! period codes reformatted, amounts rendered in soles, and place names
//! run through the display correction before printing.

use std::fmt::Write;

use invierte_core::AggregationEntry;
use invierte_core::Project;
use invierte_core::display::{
    capitalize_first, clean_detail_text, format_period, format_soles, is_displayable,
    is_displayable_amount,
};
use invierte_core::text::restore_place_names;

/// Widest bar drawn by the chart view, in cells.
const MAX_BAR_WIDTH: usize = 40;

/// Render one listing card.
pub fn list_card(project: &Project) -> String {
    let mut card = String::new();

    let title = project.nombre_inversion.as_deref().unwrap_or("(sin nombre)");
    let _ = writeln!(card, "{title}");

    if let Some(amount) = project.monto_viable {
        let _ = writeln!(card, "  Monto Viable: {}", format_soles(amount));
    }
    push_plain(&mut card, "Función", project.funcion.as_deref());
    push_plain(&mut card, "Situación", project.situacion.as_deref());
    push_plain(
        &mut card,
        "Estado de inversión",
        project.estado_inversion.as_deref(),
    );
    push_place(&mut card, "Ejecutora", project.ejecutora.as_deref());
    if let Some(count) = project.beneficiarios {
        let _ = writeln!(card, "  Beneficiarios: {count}");
    }
    push_place(&mut card, "Departamento", project.departamento.as_deref());
    push_place(&mut card, "Provincia", project.provincia.as_deref());

    card
}

/// Render the detail card for one record.
///
/// The description is always shown; `full` expands the responsables,
/// entidades and finanzas sections (the screen's expand toggle).
pub fn detail_card(project: &Project, full: bool) -> String {
    let mut card = String::new();

    let _ = writeln!(card, "DESCRIPCIÓN ALTERNATIVA");
    if let Some(text) = project.descripcion_alternativa.as_deref() {
        push_field(&mut card, "", &clean_detail_text(text));
    }

    if !full {
        return card;
    }

    let _ = writeln!(card, "\nRESPONSABLES DE LA INVERSIÓN");
    push_opt(&mut card, "Unidad OPMI", project.unidad_opmi.as_deref());
    push_opt(&mut card, "Unidad UEI", project.unidad_uei.as_deref());
    push_opt(&mut card, "Unidad UF", project.unidad_uf.as_deref());
    push_opt(&mut card, "Responsable OPMI", project.responsable_opmi.as_deref());
    push_opt(&mut card, "Responsable UEI", project.responsable_uei.as_deref());
    push_opt(&mut card, "Responsable UF", project.responsable_uf.as_deref());

    let _ = writeln!(card, "\nENTIDADES RELACIONADAS CON LA INVERSIÓN");
    push_opt(&mut card, "Entidad", project.entidad.as_deref());
    push_opt(&mut card, "Ejecutora", project.ejecutora.as_deref());
    push_opt(&mut card, "Entidad OPI", project.entidad_opi.as_deref());
    push_opt(&mut card, "Responsable OPI", project.responsable_opi.as_deref());
    push_place_opt(&mut card, "Departamento", project.departamento.as_deref());
    push_place_opt(&mut card, "Provincia", project.provincia.as_deref());
    push_place_opt(&mut card, "Centro poblado", project.centro_poblado.as_deref());
    push_opt(&mut card, "Último estudio", project.ultimo_estudio.as_deref());

    let _ = writeln!(card, "\nFINANZAS RELACIONADO A LA INVERSIÓN");
    push_amount(&mut card, "Monto F16", project.monto_f16);
    push_amount(&mut card, "Costo actualizado", project.costo_actualizado);
    push_amount(
        &mut card,
        "Devengado acumulado año anterior",
        project.devengado_acumulado_ano_anterior,
    );
    push_period(
        &mut card,
        "Mes-año primer devengado",
        project.mes_ano_primer_devengado.as_deref(),
    );
    push_period(
        &mut card,
        "Mes-año último devengado",
        project.mes_ano_ultimo_devengado.as_deref(),
    );

    card
}

/// Render the aggregation entries as a horizontal bar chart.
///
/// Bars scale to the widest count; every nonzero count draws at least one
/// cell. Labels are left-aligned in a shared column.
pub fn bar_chart(entries: &[AggregationEntry]) -> String {
    let Some(max_count) = entries.iter().map(|e| e.count).max() else {
        return String::new();
    };

    let label_width = entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut chart = String::new();
    for entry in entries {
        let width = scaled_width(entry.count, max_count);
        let _ = writeln!(
            chart,
            "{:<label_width$}  {} {}",
            entry.label,
            "█".repeat(width),
            entry.count,
        );
    }
    chart
}

/// Bar width for a count, scaled against the batch maximum.
fn scaled_width(count: u64, max_count: u64) -> usize {
    if count == 0 || max_count == 0 {
        return 0;
    }
    let scaled = (count as usize * MAX_BAR_WIDTH) / max_count as usize;
    scaled.max(1)
}

// ----------------------------------------------------------------------------
// Field helpers
// ----------------------------------------------------------------------------

/// List-card line without validity suppression (the listing shows raw
/// presence only).
fn push_plain(card: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = writeln!(card, "  {label}: {value}");
    }
}

/// List-card line with place-name correction.
fn push_place(card: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = writeln!(card, "  {label}: {}", restore_place_names(value));
    }
}

/// Detail line: suppressed unless the value passes the validity rule,
/// rendered first-letter-capitalized.
fn push_field(card: &mut String, label: &str, value: &str) {
    if !is_displayable(value) {
        return;
    }
    if label.is_empty() {
        let _ = writeln!(card, "  {}", capitalize_first(value));
    } else {
        let _ = writeln!(card, "  {label}: {}", capitalize_first(value));
    }
}

fn push_opt(card: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        push_field(card, label, value);
    }
}

fn push_place_opt(card: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        push_field(card, label, &restore_place_names(value));
    }
}

fn push_amount(card: &mut String, label: &str, value: Option<f64>) {
    if let Some(amount) = value
        && is_displayable_amount(amount)
    {
        let _ = writeln!(card, "  {label}: {}", format_soles(amount));
    }
}

fn push_period(card: &mut String, label: &str, value: Option<&str>) {
    if let Some(code) = value {
        let formatted = format_period(code);
        if is_displayable(&formatted) {
            let _ = writeln!(card, "  {label}: {formatted}");
        }
    }
}
