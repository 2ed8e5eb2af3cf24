//! Built-in starting catalog.
//!
//! `load_seed` wipes the `medicines` table and re-inserts the fixed list in
//! a single transaction, assigning ids 1..=n in list order. Running it any
//! number of times leaves the same rows behind.

use rusqlite::Connection;

use crate::db::{clear_medicines, insert_medicine, DatabaseError};
use crate::models::{MedicineRecord, SymptomList};

/// One row of the built-in catalog.
#[derive(Debug, Clone, Copy)]
pub struct SeedEntry {
    pub name: &'static str,
    pub dosage: &'static str,
    pub expiry_months: u32,
    pub min_age: u32,
    pub usage: &'static str,
    pub symptoms: &'static str,
}

impl SeedEntry {
    fn to_record(self, id: i64) -> MedicineRecord {
        MedicineRecord {
            id,
            name: self.name.to_string(),
            dosage: self.dosage.to_string(),
            expiry_months: self.expiry_months,
            min_age: self.min_age,
            usage: self.usage.to_string(),
            symptoms: SymptomList::parse(self.symptoms),
        }
    }
}

const fn entry(
    name: &'static str,
    dosage: &'static str,
    expiry_months: u32,
    min_age: u32,
    usage: &'static str,
    symptoms: &'static str,
) -> SeedEntry {
    SeedEntry {
        name,
        dosage,
        expiry_months,
        min_age,
        usage,
        symptoms,
    }
}

pub const SEED_MEDICINES: &[SeedEntry] = &[
    // Pain & fever
    entry(
        "Paracetamol",
        "500mg every 6 hours",
        24,
        6,
        "Reduces fever and mild pain",
        "fever, headache, body pain, temperature",
    ),
    entry(
        "Ibuprofen",
        "400mg after food",
        24,
        12,
        "Anti-inflammatory and pain relief",
        "swelling, joint pain, toothache, muscle pain",
    ),
    entry(
        "Aspirin",
        "75mg once a day",
        24,
        18,
        "Blood thinner and pain relief",
        "chest pain, heart health, headache",
    ),
    // Cough, cold & allergies
    entry(
        "Dextromethorphan",
        "10ml every 8 hours",
        18,
        12,
        "Cough suppressant syrup",
        "dry cough, throat irritation, hacking cough",
    ),
    entry(
        "Cetirizine",
        "10mg once a day",
        36,
        6,
        "Relieves allergy symptoms",
        "allergy, sneezing, runny nose, watery eyes, itching",
    ),
    entry(
        "Benadryl",
        "5ml every 6 hours",
        24,
        12,
        "Antihistamine for allergies/cold",
        "cold, cough, allergy, sneezing",
    ),
    entry(
        "Salbutamol",
        "2 puffs as needed",
        18,
        4,
        "Bronchodilator for asthma",
        "asthma, breathing difficulty, wheezing, bronchitis, breathlessness",
    ),
    // Antibiotics (prescription)
    entry(
        "Amoxicillin",
        "500mg every 8 hours",
        12,
        10,
        "Antibiotic for bacterial infections",
        "bacterial infection, throat infection, ear infection",
    ),
    entry(
        "Azithromycin",
        "500mg once daily (3 days)",
        24,
        12,
        "Strong antibiotic for respiratory issues",
        "respiratory infection, bronchitis, pneumonia, throat pain",
    ),
    // Stomach & digestion
    entry(
        "Omeprazole",
        "20mg before breakfast",
        24,
        18,
        "Reduces stomach acid",
        "acidity, heartburn, stomach pain, acid reflux, gastritis",
    ),
    entry(
        "Pantoprazole",
        "40mg on empty stomach",
        36,
        18,
        "Treats GERD and acid reflux",
        "gerd, acidity, burning sensation, stomach ulcer",
    ),
    entry(
        "Domperidone",
        "10mg before food",
        24,
        12,
        "Anti-nausea and vomiting",
        "nausea, vomiting, motion sickness, upset stomach",
    ),
    entry(
        "Loperamide",
        "2mg after loose stool",
        36,
        12,
        "Anti-diarrheal medication",
        "diarrhea, loose motion, stomach upset",
    ),
    // Vitamins & supplements
    entry(
        "Vitamin C (Ascorbic Acid)",
        "500mg daily",
        24,
        4,
        "Immunity booster",
        "scurvy, immunity, weak gum, cold prevention",
    ),
    entry(
        "Calcium + Vitamin D3",
        "1 tablet daily after meal",
        36,
        12,
        "Bone health supplement",
        "bone pain, weak bones, calcium deficiency",
    ),
    entry(
        "B-Complex",
        "1 capsule daily",
        24,
        10,
        "Energy and nerve health",
        "mouth ulcer, weakness, fatigue, nerve pain",
    ),
    // Skin & topical
    entry(
        "Betadine Ointment",
        "Apply twice daily",
        24,
        2,
        "Antiseptic for wounds",
        "cuts, wounds, burns, infection prevention",
    ),
    entry(
        "Volini Spray",
        "Spray on affected area",
        36,
        12,
        "Pain relief spray",
        "back pain, sprain, muscle catch, joint pain",
    ),
    entry(
        "Calamine Lotion",
        "Apply gently on skin",
        36,
        2,
        "Soothing lotion for skin irritation",
        "itching, rash, chickenpox, insect bite",
    ),
    // Chronic conditions
    entry(
        "Metformin",
        "500mg with meals",
        24,
        18,
        "Type 2 Diabetes management",
        "diabetes, high blood sugar",
    ),
    entry(
        "Amlodipine",
        "5mg once daily",
        36,
        18,
        "High blood pressure control",
        "hypertension, high bp, blood pressure",
    ),
    entry(
        "Atorvastatin",
        "10mg at night",
        24,
        18,
        "Cholesterol lowering",
        "high cholesterol, heart risk",
    ),
];

/// The seed list as records, ids assigned from 1 in list order.
pub fn seed_records() -> Vec<MedicineRecord> {
    SEED_MEDICINES
        .iter()
        .enumerate()
        .map(|(i, e)| e.to_record(i as i64 + 1))
        .collect()
}

/// Replace the persisted catalog with the built-in list.
///
/// Returns the number of inserted rows.
pub fn load_seed(conn: &mut Connection) -> Result<usize, DatabaseError> {
    let records = seed_records();
    let tx = conn.transaction()?;
    let removed = clear_medicines(&tx)?;
    for record in &records {
        insert_medicine(&tx, record)?;
    }
    tx.commit()?;

    tracing::info!(removed, inserted = records.len(), "Medicine catalog seeded");
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{count_medicines, list_medicines, open_memory_database};

    #[test]
    fn seed_inserts_every_entry() {
        let mut conn = open_memory_database().unwrap();
        let inserted = load_seed(&mut conn).unwrap();
        assert_eq!(inserted, SEED_MEDICINES.len());
        assert_eq!(count_medicines(&conn).unwrap(), SEED_MEDICINES.len() as i64);
    }

    #[test]
    fn seed_twice_yields_identical_rows() {
        let mut conn = open_memory_database().unwrap();
        load_seed(&mut conn).unwrap();
        let first = list_medicines(&conn).unwrap();
        load_seed(&mut conn).unwrap();
        let second = list_medicines(&conn).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn seed_replaces_foreign_rows() {
        let mut conn = open_memory_database().unwrap();
        conn.execute(
            "INSERT INTO medicines (id, name, dosage, expiry_months, min_age, usage, symptoms_treated)
             VALUES (99, 'Stale', 'x', 1, 1, 'x', 'x')",
            [],
        )
        .unwrap();
        load_seed(&mut conn).unwrap();
        let meds = list_medicines(&conn).unwrap();
        assert!(meds.iter().all(|m| m.name != "Stale"));
    }

    #[test]
    fn ids_follow_list_order() {
        let records = seed_records();
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].name, "Paracetamol");
        let loperamide = records.iter().find(|r| r.name == "Loperamide").unwrap();
        assert_eq!(loperamide.id, 13);
    }

    #[test]
    fn every_entry_has_a_name_and_symptoms() {
        for e in SEED_MEDICINES {
            assert!(!e.name.is_empty());
            assert!(!SymptomList::parse(e.symptoms).is_empty(), "{}", e.name);
        }
    }

    #[test]
    fn seed_symptoms_are_lower_case() {
        for e in SEED_MEDICINES {
            assert_eq!(e.symptoms, e.symptoms.to_lowercase(), "{}", e.name);
        }
    }
}
