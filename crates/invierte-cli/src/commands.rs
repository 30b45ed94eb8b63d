//! Command handlers: one per view, each doing fetch → derive → render.
//!
//! Error taxonomy per view: a transport failure surfaces as a static
//! user-visible message (the cause goes to the debug log) and a nonzero
//! exit; an empty result is not an error and gets its own message.

use anyhow::{Result, anyhow};
use invierte_client::ProjectsClient;
use invierte_core::{CHART_FIELDS, count_field_values, filter_projects};
use tracing::debug;

use crate::render;

/// The list view: fetch everything, filter client-side, print cards.
pub async fn list(client: &ProjectsClient, search: Option<&str>) -> Result<()> {
    let projects = client.list().await.map_err(|err| {
        debug!(error = %err, "listing fetch failed");
        anyhow!("Error al obtener los proyectos")
    })?;

    let term = search.unwrap_or("");
    let filtered = filter_projects(&projects, term);

    if filtered.is_empty() {
        if term.trim().is_empty() {
            println!("No hay proyectos disponibles.");
        } else {
            println!("No se encontraron proyectos con ese criterio de búsqueda.");
        }
        return Ok(());
    }

    for project in filtered {
        println!("{}", render::list_card(project));
    }
    Ok(())
}

/// The detail view: fetch by code, print the detail card(s).
pub async fn show(client: &ProjectsClient, code: &str, full: bool) -> Result<()> {
    let records = client.detail(code).await.map_err(|err| {
        debug!(error = %err, code, "detail fetch failed");
        anyhow!("Error al obtener los detalles del proyecto")
    })?;

    if records.is_empty() {
        println!("No hay detalles disponibles.");
        return Ok(());
    }

    for record in &records {
        println!("{}", render::detail_card(record, full));
    }
    Ok(())
}

/// The chart view: fetch by code, aggregate the categorical fields,
/// print the bar chart.
pub async fn chart(client: &ProjectsClient, code: &str) -> Result<()> {
    let records = client.detail(code).await.map_err(|err| {
        debug!(error = %err, code, "chart fetch failed");
        anyhow!("Error al obtener los datos del gráfico")
    })?;

    let entries = count_field_values(&records, CHART_FIELDS);

    if entries.is_empty() {
        println!("No hay datos disponibles para mostrar");
        return Ok(());
    }

    println!("Datos Procesados\n");
    print!("{}", render::bar_chart(&entries));
    Ok(())
}
