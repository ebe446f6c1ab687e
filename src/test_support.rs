//! Shared fixtures for unit tests

use rust_xlsxwriter::Workbook;

/// Build an in-memory xlsx workbook. Each entry is a sheet name and its rows;
/// empty strings are left as blank cells.
pub fn xlsx_bytes(sheets: &[(&str, Vec<Vec<&str>>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                worksheet
                    .write_string(row_idx as u32, col_idx as u16, *value)
                    .unwrap();
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// The three-row workbook used across loader tests: two techniques, one
/// state, two municipalities, and a fully blank row.
pub fn sample_workbook() -> Vec<u8> {
    xlsx_bytes(&[(
        "Datos",
        vec![
            vec!["Nombre_de_la_t_cnica_en_espa_ol", "Estado", "Municipio"],
            vec!["A", "X", "M1"],
            vec!["B", "X", "M2"],
            vec!["", "", ""],
        ],
    )])
}
