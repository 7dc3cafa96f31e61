use super::domain::VehicleRecord;
use super::normalizer::parse_numeric;
use super::schema::{field_for_header, Field};
use std::io::Read;

pub(crate) struct ParsedDataset {
    pub(crate) records: Vec<VehicleRecord>,
    pub(crate) recognized_fields: Vec<Field>,
}

pub(crate) fn parse_dataset<R: Read>(reader: R) -> Result<ParsedDataset, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    // Resolve each physical column to a canonical field once, up front.
    // Unrecognized columns stay None and are skipped per row.
    let columns: Vec<Option<Field>> = csv_reader
        .headers()?
        .iter()
        .map(field_for_header)
        .collect();
    let recognized_fields: Vec<Field> = columns.iter().flatten().copied().collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut record = VehicleRecord::default();
        for (index, field) in columns.iter().enumerate() {
            let Some(field) = field else { continue };
            let Some(cell) = row.get(index) else { continue };
            apply_cell(&mut record, *field, cell);
        }
        records.push(record);
    }

    Ok(ParsedDataset {
        records,
        recognized_fields,
    })
}

fn apply_cell(record: &mut VehicleRecord, field: Field, cell: &str) {
    if cell.is_empty() {
        return;
    }
    match field {
        Field::Manufacturer => record.manufacturer = Some(cell.to_string()),
        Field::ModelRange => record.model_range = Some(cell.to_string()),
        Field::Description => record.description = Some(cell.to_string()),
        Field::Co2 => record.co2_gkm = parse_numeric(cell),
        Field::CombinedMpg => record.combined_mpg = parse_numeric(cell),
        Field::ElectricRange => record.electric_range_miles = parse_numeric(cell),
        Field::TotalCostOfOwnership => record.total_cost_of_ownership = parse_numeric(cell),
        Field::P11dValue => record.p11d_value = parse_numeric(cell),
        Field::BikPercent => record.bik_percent = parse_numeric(cell),
        Field::NetBasicPrice => record.net_basic_price = Some(cell.to_string()),
        Field::PowerBhp => record.power_bhp = Some(cell.to_string()),
        Field::LuggageCapacity => record.luggage_capacity = Some(cell.to_string()),
        Field::NcapRating => record.ncap_rating = Some(cell.to_string()),
        Field::ZeroToSixtyTwo => record.zero_to_sixty_two = Some(cell.to_string()),
        Field::KwhPer100Km => record.kwh_per_100km = Some(cell.to_string()),
    }
}
