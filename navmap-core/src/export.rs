use crate::hierarchy::HierarchyTable;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use thiserror::Error;

pub const SHEET_NAME: &str = "URLs";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("workbook write failed: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Serialize a hierarchy table into an xlsx workbook, returned as in-memory
/// bytes. One sheet, a bold header row ("Navigation Level 1".."Navigation
/// Level N", "Current URL Address"), one data row per hierarchy row.
/// Writing the bytes anywhere is the caller's business.
pub fn export_workbook(table: &HierarchyTable) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for level in 0..table.max_depth {
        worksheet.write_string_with_format(
            0,
            level as u16,
            format!("Navigation Level {}", level + 1),
            &header,
        )?;
    }
    worksheet.write_string_with_format(0, table.max_depth as u16, "Current URL Address", &header)?;

    for (i, row) in table.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (c, value) in row.levels.iter().enumerate() {
            worksheet.write_string(r, c as u16, value)?;
        }
        worksheet.write_string(r, row.levels.len() as u16, &row.url)?;
    }

    Ok(workbook.save_to_buffer()?)
}
