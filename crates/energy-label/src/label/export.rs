use crate::catalog::schema::Field;
use crate::catalog::VehicleRecord;

/// Errors raised while encoding a record for download.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode export row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to finish export row: {0}")]
    Io(#[from] std::io::Error),
    #[error("export row is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode the selected vehicle's full attribute set as one CSV record under
/// the canonical display headers. Missing cells are written empty.
pub fn record_csv(record: &VehicleRecord) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(Field::ALL.iter().map(|field| field.header()))?;
    writer.write_record(Field::ALL.iter().map(|field| cell_value(record, *field)))?;
    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn cell_value(record: &VehicleRecord, field: Field) -> String {
    match field {
        Field::Manufacturer => text(&record.manufacturer),
        Field::ModelRange => text(&record.model_range),
        Field::Description => text(&record.description),
        Field::Co2 => number(record.co2_gkm),
        Field::CombinedMpg => number(record.combined_mpg),
        Field::ElectricRange => number(record.electric_range_miles),
        Field::TotalCostOfOwnership => number(record.total_cost_of_ownership),
        Field::P11dValue => number(record.p11d_value),
        Field::BikPercent => number(record.bik_percent),
        Field::NetBasicPrice => text(&record.net_basic_price),
        Field::PowerBhp => text(&record.power_bhp),
        Field::LuggageCapacity => text(&record.luggage_capacity),
        Field::NcapRating => text(&record.ncap_rating),
        Field::ZeroToSixtyTwo => text(&record.zero_to_sixty_two),
        Field::KwhPer100Km => text(&record.kwh_per_100km),
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_headers_and_one_row() {
        let record = VehicleRecord {
            manufacturer: Some("BMW".to_string()),
            model_range: Some("3 Series".to_string()),
            description: Some("320i M Sport".to_string()),
            co2_gkm: Some(148.0),
            net_basic_price: Some("£36,450".to_string()),
            ..VehicleRecord::default()
        };
        let csv = record_csv(&record).expect("export");
        let mut lines = csv.lines();
        let header = lines.next().expect("header line");
        assert!(header.starts_with("Manufacturer,Model Range,Description,CO2 g/KM"));
        let row = lines.next().expect("data line");
        assert!(row.starts_with("BMW,3 Series,320i M Sport,148"));
        assert!(row.contains("\"£36,450\""));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn missing_cells_export_as_empty_fields() {
        let csv = record_csv(&VehicleRecord::default()).expect("export");
        let row = csv.lines().nth(1).expect("data line");
        assert_eq!(row, ",,,,,,,,,,,,,,");
    }
}
