use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::{MedicineRecord, SymptomList};

pub fn insert_medicine(conn: &Connection, med: &MedicineRecord) -> Result<(), DatabaseError> {
    if med.name.trim().is_empty() {
        return Err(DatabaseError::ConstraintViolation(format!(
            "medicine {} has an empty name",
            med.id
        )));
    }
    conn.execute(
        "INSERT INTO medicines (id, name, dosage, expiry_months, min_age, usage, symptoms_treated)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            med.id,
            med.name,
            med.dosage,
            med.expiry_months,
            med.min_age,
            med.usage,
            med.symptoms.raw(),
        ],
    )?;
    Ok(())
}

/// Delete every medicine row. Returns the number of rows removed.
pub fn clear_medicines(conn: &Connection) -> Result<usize, DatabaseError> {
    Ok(conn.execute("DELETE FROM medicines", [])?)
}

/// All medicines in insertion (id) order.
pub fn list_medicines(conn: &Connection) -> Result<Vec<MedicineRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, dosage, expiry_months, min_age, usage, symptoms_treated
         FROM medicines ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], medicine_from_row)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn count_medicines(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM medicines", [], |row| {
        row.get::<_, i64>(0)
    })?;
    Ok(count)
}

fn medicine_from_row(row: &rusqlite::Row<'_>) -> Result<MedicineRecord, rusqlite::Error> {
    let symptoms: String = row.get(6)?;
    Ok(MedicineRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        dosage: row.get(2)?,
        expiry_months: row.get(3)?,
        min_age: row.get(4)?,
        usage: row.get(5)?,
        symptoms: SymptomList::parse(&symptoms),
    })
}
