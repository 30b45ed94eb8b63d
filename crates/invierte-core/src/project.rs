//! The project record as served by the remote API.
//!
//! Field names follow the wire format (the upstream API speaks Spanish),
//! so the struct deserializes straight from the JSON array the listing and
//! detail endpoints return. The listing endpoint omits the detail-only
//! fields (responsables, finanzas); every field a screen might not receive
//! is therefore optional, and a missing value is `None` rather than a
//! deserialization failure.

use serde::{Deserialize, Serialize};

/// One public-investment project record.
///
/// `id` is unique within a fetched batch and is the only key used for
/// rendering. `codigo_unico_inversion` is the investment code passed from
/// the list view to the detail and chart views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique record id within a batch.
    pub id: u64,
    /// Unique investment code; the detail endpoint is keyed by it.
    pub codigo_unico_inversion: String,

    // Descriptive fields (list and detail).
    /// Project name.
    pub nombre_inversion: Option<String>,
    /// Government function (education, transport, ...).
    pub funcion: Option<String>,
    /// Executing entity.
    pub ejecutora: Option<String>,
    /// Department (region).
    pub departamento: Option<String>,
    /// Province.
    pub provincia: Option<String>,
    /// Populated center.
    pub centro_poblado: Option<String>,
    /// Investment state.
    pub estado_inversion: Option<String>,
    /// Current situation.
    pub situacion: Option<String>,
    /// Alternative description (arrives with a stray leading colon).
    pub descripcion_alternativa: Option<String>,
    /// Number of beneficiaries.
    pub beneficiarios: Option<u64>,

    // Categorical fields used by the chart view.
    /// Government level (nacional, regional, local).
    pub nivel_gobierno: Option<String>,
    /// Regulatory framework.
    pub marco: Option<String>,
    /// Format type.
    pub tipo_formato: Option<String>,

    // Responsible-party fields (detail only).
    /// OPMI unit.
    pub unidad_opmi: Option<String>,
    /// UEI unit.
    pub unidad_uei: Option<String>,
    /// UF unit.
    pub unidad_uf: Option<String>,
    /// OPMI responsible.
    pub responsable_opmi: Option<String>,
    /// UEI responsible.
    pub responsable_uei: Option<String>,
    /// UF responsible.
    pub responsable_uf: Option<String>,

    // Related-entity fields (detail only).
    /// Owning entity.
    pub entidad: Option<String>,
    /// OPI entity.
    pub entidad_opi: Option<String>,
    /// OPI responsible.
    pub responsable_opi: Option<String>,
    /// Latest study.
    pub ultimo_estudio: Option<String>,

    // Financial fields.
    /// Viable amount in soles.
    pub monto_viable: Option<f64>,
    /// F16 amount in soles.
    pub monto_f16: Option<f64>,
    /// Updated cost in soles.
    pub costo_actualizado: Option<f64>,
    /// Accrued amount for the previous year.
    pub devengado_acumulado_ano_anterior: Option<f64>,
    /// First accrual period as a YYYYMM code.
    pub mes_ano_primer_devengado: Option<String>,
    /// Last accrual period as a YYYYMM code.
    pub mes_ano_ultimo_devengado: Option<String>,
}

impl Project {
    /// The fields the list view searches over, in match order.
    ///
    /// A missing field is simply absent from matching; it never fails.
    pub fn searchable_fields(&self) -> [Option<&str>; 6] {
        [
            self.nombre_inversion.as_deref(),
            self.funcion.as_deref(),
            self.ejecutora.as_deref(),
            self.departamento.as_deref(),
            self.provincia.as_deref(),
            self.estado_inversion.as_deref(),
        ]
    }
}
