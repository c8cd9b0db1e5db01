//! In-memory database fixtures shared by the repository and export tests.

use rusqlite::Connection;

use super::open_memory_database;

const SCHEMA: &str = "
    CREATE TABLE mapped_medications (
        id INTEGER PRIMARY KEY,
        active_moiety TEXT NOT NULL,
        formulary_status TEXT,
        formulary_rationale TEXT,
        topical_only INTEGER,
        level4_code TEXT,
        level4_name TEXT,
        ahfs_primary_category TEXT,
        who_mapping_type TEXT,
        who_mapping_notes TEXT,
        direct_natural_source INTEGER,
        semi_synthetic_natural INTEGER,
        structural_analog_natural INTEGER,
        endogenous_compound INTEGER,
        biosynthetic_product INTEGER,
        works_natural_pathways INTEGER,
        facilitates_natural_processes INTEGER,
        no_natural_connection INTEGER
    );

    CREATE TABLE comprehensive_research (
        mapped_medication_id INTEGER PRIMARY KEY,
        full_research_report TEXT,
        direct_natural_source INTEGER,
        semi_synthetic_natural INTEGER,
        structural_analog_natural INTEGER,
        endogenous_compound INTEGER,
        biosynthetic_product INTEGER,
        works_natural_pathways INTEGER,
        facilitates_natural_processes INTEGER,
        no_natural_connection INTEGER
    );

    CREATE TABLE level4_category_research (
        level4_code TEXT PRIMARY KEY,
        level4_name TEXT,
        medication_count INTEGER,
        category_description TEXT,
        therapeutic_purpose TEXT,
        common_mechanisms TEXT,
        typical_clinical_uses TEXT,
        predominantly_natural INTEGER,
        predominantly_synthetic INTEGER,
        mixed_natural_synthetic INTEGER,
        natural_therapies_available INTEGER,
        natural_alternatives_notes TEXT,
        category_status TEXT,
        naturopathic_considerations TEXT,
        safety_considerations TEXT,
        typical_naturopathic_applications TEXT,
        research_completed INTEGER,
        full_research_report TEXT,
        level1_code TEXT,
        level1_name TEXT,
        level2_code TEXT,
        level2_name TEXT,
        level3_code TEXT,
        level3_name TEXT
    );
";

/// An in-memory store with the three dashboard tables and a small seed:
/// Aspirin (NULL status, research row overriding its base flags),
/// Ibuprofen (approved, research report text), Zinc oxide (topical, no
/// research row), plus one completed, one sparse and one uncompleted
/// category research row.
pub fn seeded_connection() -> Connection {
    let conn = open_memory_database().unwrap();
    seed(&conn);
    conn
}

/// Apply the fixture schema and seed rows to an existing connection
/// (used to build on-disk stores for end-to-end tests).
pub fn seed(conn: &Connection) {
    conn.execute_batch(SCHEMA).unwrap();

    conn.execute_batch(
        "INSERT INTO mapped_medications
            (id, active_moiety, formulary_status, formulary_rationale, topical_only,
             level4_code, level4_name, ahfs_primary_category, who_mapping_type, who_mapping_notes,
             direct_natural_source, semi_synthetic_natural, structural_analog_natural,
             endogenous_compound, biosynthetic_product, works_natural_pathways,
             facilitates_natural_processes, no_natural_connection)
         VALUES
            (1, 'Aspirin', NULL, NULL, 0,
             'N02BA', 'Salicylic acid and derivatives',
             'AHFS 28:08 - Analgesics and Antipyretics - Extra', 'direct', NULL,
             0, 0, NULL, 0, NULL, 0, 0, 0),
            (2, 'Ibuprofen', 'APPROVED', 'Well tolerated NSAID', 0,
             'M01AE', 'Propionic acid derivatives',
             'AHFS 28:08 - Analgesics and Antipyretics', 'direct', 'exact match',
             0, 0, 1, 0, 0, 0, 0, 0),
            (3, 'Zinc oxide', 'APPROVED', NULL, 1,
             NULL, NULL, 'Uncategorized', NULL, NULL,
             1, 0, 0, 0, 0, 0, 0, 0);

         INSERT INTO comprehensive_research
            (mapped_medication_id, full_research_report,
             direct_natural_source, semi_synthetic_natural, structural_analog_natural,
             endogenous_compound, biosynthetic_product, works_natural_pathways,
             facilitates_natural_processes, no_natural_connection)
         VALUES
            (1, 'Derived from willow bark salicin.', 1, 0, NULL, 0, 0, NULL, 0, 0),
            (2, 'Synthetic propionic acid derivative.', 0, 0, 1, 0, 0, 0, 0, 0);

         INSERT INTO level4_category_research
            (level4_code, level4_name, medication_count, category_description,
             therapeutic_purpose, common_mechanisms, typical_clinical_uses,
             predominantly_natural, predominantly_synthetic, mixed_natural_synthetic,
             natural_therapies_available, natural_alternatives_notes, category_status,
             naturopathic_considerations, safety_considerations,
             typical_naturopathic_applications, research_completed, full_research_report,
             level1_code, level1_name, level2_code, level2_name, level3_code, level3_name)
         VALUES
            ('N02BA', 'Salicylic acid and derivatives', 12, 'Salicylates',
             'Analgesia and antipyresis', 'COX inhibition', 'Pain, fever',
             1, 0, 0, 1, 'Willow bark preparations', 'RESEARCHED',
             'GI irritation with chronic use', 'Bleeding risk',
             'Short-term pain relief', 1, 'Full salicylate category report.',
             'N', 'Nervous system', 'N02', 'Analgesics', 'N02B', 'Other analgesics'),
            ('A01AA', 'Caries prophylactic agents', 3, NULL,
             NULL, NULL, NULL,
             NULL, NULL, NULL, NULL, NULL, NULL,
             NULL, NULL, NULL, 1, NULL,
             'A', 'Alimentary tract', 'A01', 'Stomatological preparations',
             'A01A', 'Stomatological preparations'),
            ('C03CA', 'Sulfonamides, plain', 5, 'Loop diuretics',
             NULL, NULL, NULL,
             0, 1, 0, 0, NULL, 'PENDING',
             NULL, NULL, NULL, 0, NULL,
             'C', 'Cardiovascular system', 'C03', 'Diuretics', 'C03C', 'High-ceiling diuretics');",
    )
    .unwrap();
}
