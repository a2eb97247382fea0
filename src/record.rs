//! Per-country output record

use crate::extraction::{EconomicIndicators, LeftCard, ProsCons, Ratings};
use serde::{Deserialize, Serialize};

/// Header of the indicators file
pub const INDICATOR_HEADERS: [&str; 7] = [
    "Pays",
    "Note risque pays",
    "Note environnement des affaires",
    "Population (en millions)",
    "PIB par habitant (en $US)",
    "Croissance PIB",
    "Inflation (en %)",
];

/// Header of the pros/cons file
pub const PROS_CONS_HEADERS: [&str; 3] = ["Pays", "Points forts", "Points faibles"];

/// One exported row. Every field but `country` may be blank; values are kept
/// as displayed on the site, without numeric parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Display label as selected
    pub country: String,
    /// Country risk rating code
    pub risk_rating: String,
    /// Business climate rating code
    pub business_rating: String,
    /// Population, millions
    pub population: String,
    /// GDP per capita, US$
    pub gdp_per_capita: String,
    /// GDP growth
    pub gdp_growth: String,
    /// Inflation
    pub inflation: String,
    /// Strengths
    pub pros: String,
    /// Weaknesses
    pub cons: String,
}

impl CountryRecord {
    /// Blank record for a country
    pub fn new<S: Into<String>>(country: S) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }

    /// Fill growth and inflation
    pub fn apply_indicators(&mut self, indicators: EconomicIndicators) {
        self.gdp_growth = indicators.growth;
        self.inflation = indicators.inflation;
    }

    /// Fill GDP per capita and population
    pub fn apply_left_card(&mut self, card: LeftCard) {
        self.gdp_per_capita = card.gdp_per_capita;
        self.population = card.population;
    }

    /// Fill both rating codes
    pub fn apply_ratings(&mut self, ratings: Ratings) {
        self.risk_rating = ratings.risk;
        self.business_rating = ratings.business;
    }

    /// Fill strengths and weaknesses
    pub fn apply_pros_cons(&mut self, pros_cons: ProsCons) {
        self.pros = pros_cons.pros;
        self.cons = pros_cons.cons;
    }

    /// Row for the indicators file, in [`INDICATOR_HEADERS`] order
    pub fn indicator_row(&self) -> [&str; 7] {
        [
            self.country.as_str(),
            self.risk_rating.as_str(),
            self.business_rating.as_str(),
            self.population.as_str(),
            self.gdp_per_capita.as_str(),
            self.gdp_growth.as_str(),
            self.inflation.as_str(),
        ]
    }

    /// Row for the pros/cons file, in [`PROS_CONS_HEADERS`] order
    pub fn pros_cons_row(&self) -> [&str; 3] {
        [self.country.as_str(), self.pros.as_str(), self.cons.as_str()]
    }
}
