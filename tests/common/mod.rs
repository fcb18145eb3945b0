#![allow(dead_code)]

use rust_xlsxwriter::Workbook;

/// Build a minimal Formato workbook: five title rows, a header row with the
/// `ID`/`Subject` columns and the answer column at offset 8, then one data
/// row per `(id, subject, answer)` tuple.
pub fn formato_workbook(rows: &[(u32, &str, &str)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("ECOEMS 202526").unwrap();

    sheet.write_string(0, 0, "ECOEMS question classification").unwrap();
    sheet.write_string(1, 0, "Internal template, do not edit").unwrap();

    sheet.write_string(5, 0, "ID").unwrap();
    sheet.write_string(5, 1, "Question").unwrap();
    sheet.write_string(5, 2, "Subject").unwrap();
    sheet.write_string(5, 8, "Answer").unwrap();

    for (i, (id, subject, answer)) in rows.iter().enumerate() {
        let row = 6 + i as u32;
        sheet.write_number(row, 0, *id as f64).unwrap();
        sheet.write_string(row, 1, format!("Question {}", id)).unwrap();
        sheet.write_string(row, 2, *subject).unwrap();
        sheet.write_string(row, 8, *answer).unwrap();
    }

    workbook.save_to_buffer().unwrap()
}

/// Build a Formato workbook where every question id 1..=count shares one
/// subject and one correct answer.
pub fn uniform_formato_workbook(count: u32, subject: &str, answer: &str) -> Vec<u8> {
    let rows: Vec<(u32, &str, &str)> = (1..=count).map(|id| (id, subject, answer)).collect();
    formato_workbook(&rows)
}

/// Build a Resultados workbook: a short preamble, the `Student Name` header
/// row, then one row per student with answers starting at column offset 4.
/// `None` slots are left empty.
pub fn resultados_workbook(students: &[(&str, Vec<Option<&str>>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "Resultados prueba").unwrap();

    sheet.write_string(3, 0, "Student Name").unwrap();
    sheet.write_string(3, 1, "Group").unwrap();
    for slot in 0..128u16 {
        sheet
            .write_string(3, 4 + slot, format!("Q{}", slot + 1))
            .unwrap();
    }

    for (i, (name, answers)) in students.iter().enumerate() {
        let row = 4 + i as u32;
        sheet.write_string(row, 0, *name).unwrap();
        for (slot, answer) in answers.iter().enumerate() {
            if let Some(answer) = answer {
                sheet.write_string(row, 4 + slot as u16, *answer).unwrap();
            }
        }
    }

    workbook.save_to_buffer().unwrap()
}

/// Answer vector with `value` in every one of the 128 slots.
pub fn full_answers(value: &str) -> Vec<Option<&str>> {
    vec![Some(value); 128]
}
