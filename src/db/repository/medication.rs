use rusqlite::{Connection, Row};

use crate::db::DatabaseError;
use crate::models::{MedicationRecord, NaturalConnection};

/// All medications with their classifications, joined to the research
/// report when one exists. Natural-connection flags prefer the research
/// row and fall back to the base row.
pub fn fetch_medications(conn: &Connection) -> Result<Vec<MedicationRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT
            m.id,
            m.active_moiety as name,
            m.formulary_status as status,
            m.formulary_rationale as rationale,
            m.topical_only,
            m.level4_code,
            m.level4_name,
            m.ahfs_primary_category as ahfs_category,
            m.who_mapping_type,
            m.who_mapping_notes,
            cr.full_research_report,
            COALESCE(cr.direct_natural_source, m.direct_natural_source) as direct_natural_source,
            COALESCE(cr.semi_synthetic_natural, m.semi_synthetic_natural) as semi_synthetic_natural,
            COALESCE(cr.structural_analog_natural, m.structural_analog_natural) as structural_analog_natural,
            COALESCE(cr.endogenous_compound, m.endogenous_compound) as endogenous_compound,
            COALESCE(cr.biosynthetic_product, m.biosynthetic_product) as biosynthetic_product,
            COALESCE(cr.works_natural_pathways, m.works_natural_pathways) as works_natural_pathways,
            COALESCE(cr.facilitates_natural_processes, m.facilitates_natural_processes) as facilitates_natural_processes,
            COALESCE(cr.no_natural_connection, m.no_natural_connection) as no_natural_connection
         FROM mapped_medications m
         LEFT JOIN comprehensive_research cr ON m.id = cr.mapped_medication_id
         ORDER BY m.active_moiety",
    )?;

    let rows = stmt.query_map([], medication_from_row)?;

    let mut medications = Vec::new();
    for row in rows {
        medications.push(row?);
    }
    Ok(medications)
}

fn medication_from_row(row: &Row<'_>) -> Result<MedicationRecord, rusqlite::Error> {
    Ok(MedicationRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        status: row.get(2)?,
        rationale: row.get(3)?,
        topical_only: flag(row, 4)?,
        level4_code: row.get(5)?,
        level4_name: row.get(6)?,
        ahfs_category: row.get(7)?,
        who_mapping_type: row.get(8)?,
        who_mapping_notes: row.get(9)?,
        full_research_report: row.get(10)?,
        natural_connection: NaturalConnection {
            direct_natural_source: flag(row, 11)?,
            semi_synthetic_natural: flag(row, 12)?,
            structural_analog_natural: flag(row, 13)?,
            endogenous_compound: flag(row, 14)?,
            biosynthetic_product: flag(row, 15)?,
            works_natural_pathways: flag(row, 16)?,
            facilitates_natural_processes: flag(row, 17)?,
            no_natural_connection: flag(row, 18)?,
        },
    })
}

/// Coerce a truthy store value to bool; NULL counts as false.
pub(crate) fn flag(row: &Row<'_>, idx: usize) -> Result<bool, rusqlite::Error> {
    Ok(row.get::<_, Option<i64>>(idx)?.unwrap_or(0) != 0)
}
