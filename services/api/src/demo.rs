use crate::infra::rating_engine;
use clap::{Args, ValueEnum};
use energy_label::catalog::{SelectionPath, VehicleCatalog};
use energy_label::config::AppConfig;
use energy_label::error::AppError;
use energy_label::label::rating::{Co2BandScale, RatingMode};
use energy_label::label::tax::{TaxBracket, TaxLiability};
use energy_label::label::views::{LabelCard, RatingView};
use energy_label::label::LabelService;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

/// Built-in sample export so the demo runs without a spreadsheet on disk.
const SAMPLE_DATASET: &str = "\
Manufacturer,Model Range,Description,CO2 g/KM,WLTP MPG (Comb),WLTP Electric Range (miles),Power (bhp),Luggage Capacity (L),NCAP Rating,0-62 mph (secs),Net Basic Price,TCO,P11D Basic,BIK% Year 1
Audi,A3,35 TFSI S line,132,47.9,,148,380,5 stars,8.4,\"£28,950\",31000,30180,31
Audi,Q4 e-tron,40 Sport,0,,316,201,520,5 stars,8.5,\"£49,500\",36000,51225,2
BMW,3 Series,320i M Sport,148,44.1,,184,480,5 stars,7.1,\"£36,450\",34000,37425,30
BMW,3 Series,330e M Sport,32,217.3,,292,375,5 stars,5.9,\"£45,000\",38000,45500,8
BMW,i4,eDrive40 Sport,0,,365,335,470,5 stars,5.7,\"£51,000\",39000,52655,2
Hyundai,IONIQ 5,Premium 77kWh,0,,298,225,527,5 stars,7.3,\"£43,150\",33000,44545,2
Tesla,Model 3,Long Range AWD,0,,390,434,594,5 stars,4.4,\"£49,990\",30000,49990,2
Vauxhall,Astra,Design 1.2,124,51.4,,110,422,4 stars,9.7,\"£26,795\",28000,27420,N/A
";

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum ModeArg {
    Composite,
    DirectCo2,
}

impl From<ModeArg> for RatingMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Composite => RatingMode::Composite,
            ModeArg::DirectCo2 => RatingMode::DirectCo2,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum BracketArg {
    Standard,
    Higher,
    Additional,
}

impl From<BracketArg> for TaxBracket {
    fn from(value: BracketArg) -> Self {
        match value {
            BracketArg::Standard => TaxBracket::Standard,
            BracketArg::Higher => TaxBracket::Higher,
            BracketArg::Additional => TaxBracket::Additional,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum BandsArg {
    Five,
    Six,
}

impl From<BandsArg> for Co2BandScale {
    fn from(value: BandsArg) -> Self {
        match value {
            BandsArg::Five => Co2BandScale::FiveBand,
            BandsArg::Six => Co2BandScale::SixBand,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct LabelArgs {
    /// Vehicle dataset to load (defaults to the configured APP_DATASET path)
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Manufacturer, matched exactly against the dataset
    #[arg(long)]
    pub(crate) manufacturer: String,
    /// Model range under the manufacturer
    #[arg(long)]
    pub(crate) model_range: String,
    /// Description (trim level) under the model range
    #[arg(long)]
    pub(crate) description: String,
    /// Rating policy to apply
    #[arg(long, value_enum, default_value = "composite")]
    pub(crate) mode: ModeArg,
    /// Marginal tax bracket for the benefit-in-kind figure
    #[arg(long, value_enum)]
    pub(crate) bracket: Option<BracketArg>,
    /// Override the direct-CO2 band layout (defaults to APP_CO2_BANDS)
    #[arg(long, value_enum)]
    pub(crate) co2_bands: Option<BandsArg>,
    /// Print the row as CSV instead of a rendered card
    #[arg(long)]
    pub(crate) export: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Use the five-band legacy CO2 scale instead of the six-band layout
    #[arg(long)]
    pub(crate) five_bands: bool,
}

pub(crate) fn run_label(args: LabelArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let dataset = args
        .dataset
        .unwrap_or_else(|| config.catalog.dataset_path.clone());
    let scale = args
        .co2_bands
        .map(Co2BandScale::from)
        .unwrap_or(config.catalog.co2_bands);

    let catalog = Arc::new(VehicleCatalog::from_path(&dataset)?);
    let service = LabelService::new(catalog, rating_engine(scale));

    let path = SelectionPath::new(args.manufacturer, args.model_range, args.description);

    if args.export {
        match service.export_csv(&path)? {
            Some(csv) => print!("{csv}"),
            None => print_miss(&service, &path),
        }
        return Ok(());
    }

    match service.card(&path, args.mode.into(), args.bracket.map(TaxBracket::from)) {
        Some(card) => render_card(&card),
        None => print_miss(&service, &path),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let scale = if args.five_bands {
        Co2BandScale::FiveBand
    } else {
        Co2BandScale::SixBand
    };
    let catalog = Arc::new(VehicleCatalog::from_reader(Cursor::new(SAMPLE_DATASET))?);
    let service = LabelService::new(catalog, rating_engine(scale));

    println!("Vehicle energy label demo");
    println!("\nSelection cascade");
    for manufacturer in service.manufacturers() {
        println!("- {manufacturer}");
        for model_range in service.model_ranges(&manufacturer) {
            let descriptions = service.descriptions(&manufacturer, &model_range);
            println!("  - {model_range}: {}", descriptions.join(" | "));
        }
    }

    let picks = [
        ("BMW", "3 Series", "320i M Sport"),
        ("Tesla", "Model 3", "Long Range AWD"),
    ];
    for (manufacturer, model_range, description) in picks {
        let path = SelectionPath::new(manufacturer, model_range, description);
        println!();
        match service.card(&path, RatingMode::Composite, Some(TaxBracket::Higher)) {
            Some(card) => render_card(&card),
            None => print_miss(&service, &path),
        }
    }

    // The Astra's BIK cell is unparseable, so the figure is withheld.
    println!();
    let path = SelectionPath::new("Vauxhall", "Astra", "Design 1.2");
    match service.card(&path, RatingMode::DirectCo2, Some(TaxBracket::Higher)) {
        Some(card) => render_card(&card),
        None => print_miss(&service, &path),
    }

    Ok(())
}

fn print_miss(service: &LabelService, path: &SelectionPath) {
    println!(
        "No vehicle matches {} / {} / {}",
        path.manufacturer, path.model_range, path.description
    );
    let candidates = service.descriptions(&path.manufacturer, &path.model_range);
    if candidates.is_empty() {
        println!("No descriptions available under that manufacturer and model range");
    } else {
        println!("Available descriptions: {}", candidates.join(" | "));
    }
}

fn render_card(card: &LabelCard) {
    println!("{}", card.title);
    println!("{}", card.subtitle);

    match &card.rating {
        RatingView::DirectCo2(rating) => {
            println!(
                "Efficiency rating: {} ({}, gauge {}%)",
                rating.band_label, rating.colour, rating.gauge
            );
        }
        RatingView::Composite(assessment) => {
            println!(
                "Efficiency rating: {} ({}, overall {:.1})",
                assessment.band_label, assessment.band_colour, assessment.overall_score
            );
            println!(
                "  CO2 {:.1} | range {:.1} | cost {:.1}",
                assessment.co2_score, assessment.range_score, assessment.cost_score
            );
        }
    }

    println!("Band legend:");
    for entry in &card.band_legend {
        println!("  {}: {}", entry.band.label(), entry.range);
    }

    println!("CO2: {}", card.metrics.co2);
    println!("MPG / Range: {}", card.metrics.mpg_or_range);
    println!("Power: {}", card.metrics.power);
    println!("Luggage: {}", card.metrics.luggage);
    println!("NCAP: {}", card.metrics.ncap);
    println!("0-62 mph: {}", card.metrics.zero_to_sixty_two);
    println!("Net basic price: {}", card.metrics.net_basic_price);

    match &card.tax {
        Some(TaxLiability::Assessed {
            annual,
            monthly,
            bracket_label,
            ..
        }) => {
            println!(
                "Company car tax ({bracket_label}): £{annual:.2}/year, £{monthly:.2}/month"
            );
        }
        Some(TaxLiability::Unavailable) => {
            println!("Company car tax: unavailable (missing taxable value or BIK%)");
        }
        None => {}
    }
}
