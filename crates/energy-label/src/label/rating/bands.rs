use serde::{Deserialize, Serialize};

/// Letter grade shown on the energy label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EfficiencyBand {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl EfficiencyBand {
    pub const fn label(self) -> &'static str {
        match self {
            EfficiencyBand::A => "A",
            EfficiencyBand::B => "B",
            EfficiencyBand::C => "C",
            EfficiencyBand::D => "D",
            EfficiencyBand::E => "E",
            EfficiencyBand::F => "F",
        }
    }
}

/// One step of a direct-CO2 band table: inclusive upper bound, grade, gauge
/// weight for the visual meter, and colour token for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Co2BandStep {
    pub max_co2: f64,
    pub band: EfficiencyBand,
    pub gauge: u8,
    pub colour: &'static str,
}

/// Ordered direct-CO2 banding table. Steps ascend by `max_co2`; anything
/// above the last bound falls into the terminal step. Spreadsheet revisions
/// disagree on whether the scale bottoms out at E or F, so both layouts ship
/// as explicit constructors and the active one is chosen by configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Co2BandTable {
    steps: Vec<Co2BandStep>,
    terminal: Co2BandStep,
}

/// Which direct-CO2 band layout is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Co2BandScale {
    FiveBand,
    SixBand,
}

impl Co2BandTable {
    /// Legacy layout: A-D with everything over 170 g/km graded E.
    pub fn five_band() -> Self {
        Self {
            steps: vec![
                step(50.0, EfficiencyBand::A, 100, "green"),
                step(90.0, EfficiencyBand::B, 80, "lightgreen"),
                step(130.0, EfficiencyBand::C, 60, "yellow"),
                step(170.0, EfficiencyBand::D, 40, "orange"),
            ],
            terminal: step(f64::INFINITY, EfficiencyBand::E, 20, "red"),
        }
    }

    /// Extended layout: an explicit E step up to 210 g/km and an F floor.
    pub fn six_band() -> Self {
        Self {
            steps: vec![
                step(50.0, EfficiencyBand::A, 100, "green"),
                step(90.0, EfficiencyBand::B, 80, "lightgreen"),
                step(130.0, EfficiencyBand::C, 60, "yellow"),
                step(170.0, EfficiencyBand::D, 40, "orange"),
                step(210.0, EfficiencyBand::E, 20, "red"),
            ],
            terminal: step(f64::INFINITY, EfficiencyBand::F, 0, "darkred"),
        }
    }

    pub fn for_scale(scale: Co2BandScale) -> Self {
        match scale {
            Co2BandScale::FiveBand => Self::five_band(),
            Co2BandScale::SixBand => Self::six_band(),
        }
    }

    /// Exactly one step applies to any CO2 value: the first whose inclusive
    /// upper bound covers it, or the terminal step.
    pub fn classify(&self, co2: f64) -> &Co2BandStep {
        self.steps
            .iter()
            .find(|band| co2 <= band.max_co2)
            .unwrap_or(&self.terminal)
    }

    /// Human-readable band boundaries for the label's explanatory legend.
    pub fn legend(&self) -> Vec<BandLegendEntry> {
        let mut entries = Vec::with_capacity(self.steps.len() + 1);
        let mut lower: Option<f64> = None;
        for band in &self.steps {
            let range = match lower {
                None => format!("up to {} g/km", band.max_co2),
                Some(from) => format!("{}-{} g/km", from + 1.0, band.max_co2),
            };
            entries.push(BandLegendEntry {
                band: band.band,
                range,
            });
            lower = Some(band.max_co2);
        }
        entries.push(BandLegendEntry {
            band: self.terminal.band,
            range: match lower {
                None => "all values".to_string(),
                Some(from) => format!("over {} g/km", from),
            },
        });
        entries
    }
}

fn step(max_co2: f64, band: EfficiencyBand, gauge: u8, colour: &'static str) -> Co2BandStep {
    Co2BandStep {
        max_co2,
        band,
        gauge,
        colour,
    }
}

/// One line of the band legend, e.g. "B: 51-90 g/km".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandLegendEntry {
    pub band: EfficiencyBand,
    pub range: String,
}

/// One step of the composite band table: lower bound on the overall score,
/// evaluated top-down with first match winning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeBandStep {
    pub min_score: f64,
    pub band: EfficiencyBand,
    pub colour: &'static str,
}

/// Banding table for the weighted composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeBandTable {
    steps: Vec<CompositeBandStep>,
    terminal: CompositeBandStep,
}

impl CompositeBandTable {
    pub fn standard() -> Self {
        Self {
            steps: vec![
                CompositeBandStep {
                    min_score: 80.0,
                    band: EfficiencyBand::A,
                    colour: "green",
                },
                CompositeBandStep {
                    min_score: 65.0,
                    band: EfficiencyBand::B,
                    colour: "lightgreen",
                },
                CompositeBandStep {
                    min_score: 50.0,
                    band: EfficiencyBand::C,
                    colour: "yellow",
                },
                CompositeBandStep {
                    min_score: 35.0,
                    band: EfficiencyBand::D,
                    colour: "orange",
                },
                CompositeBandStep {
                    min_score: 20.0,
                    band: EfficiencyBand::E,
                    colour: "red",
                },
            ],
            terminal: CompositeBandStep {
                min_score: f64::NEG_INFINITY,
                band: EfficiencyBand::F,
                colour: "darkred",
            },
        }
    }

    pub fn classify(&self, overall: f64) -> &CompositeBandStep {
        self.steps
            .iter()
            .find(|band| overall >= band.min_score)
            .unwrap_or(&self.terminal)
    }
}
