use crate::error::ExportError;
use crate::model::ClassifiedRow;
use std::fs::File;
use std::path::Path;

pub fn export_csv<P: AsRef<Path>>(rows: &[ClassifiedRow], path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "Category",
        "Type Name",
        "Display Name",
        "Instances",
        "Length",
        "Area",
        "Volume",
        "Mass",
        "Unit",
        "Measured",
        "Code",
        "Marks",
        "Remarks",
    ])?;

    for row in rows {
        writer.write_record([
            &row.category,
            &row.type_name,
            &row.display_name,
            &row.instance_count.to_string(),
            &format!("{:.2}", row.sum_length),
            &format!("{:.2}", row.sum_area),
            &format!("{:.2}", row.sum_volume),
            &format!("{:.2}", row.sum_mass),
            row.preferred_unit.label(),
            &format!("{:.2}", row.measured_value),
            row.full_code.as_deref().unwrap_or(""),
            &row.marks,
            &row.remarks,
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
