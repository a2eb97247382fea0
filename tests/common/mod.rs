//! Shared fixtures for integration tests
//!
//! Pages mimic the markup of the dashboard listing page and of a country
//! risk sheet.

#![allow(dead_code)]

/// Listing page with a country `<select>`
pub fn listing_page(countries: &[&str]) -> String {
    let options: String = countries
        .iter()
        .map(|c| format!("<option value=\"{}\">{}</option>", c, c))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head><title>Tableau de bord des risques économiques</title></head>
<body>
  <form class="countrySearch">
    <select name="pays">
      <option value="">  </option>
      {}
    </select>
  </form>
</body>
</html>"#,
        options
    )
}

/// Figures shown on one country sheet
#[derive(Debug, Clone)]
pub struct Sheet {
    pub gdp_per_capita: &'static str,
    pub population: &'static str,
    pub risk: &'static str,
    pub business: &'static str,
    pub growth: &'static str,
    pub inflation: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

pub const FRANCE: Sheet = Sheet {
    gdp_per_capita: "42 330",
    population: "68,2",
    risk: "A3",
    business: "A1",
    growth: "0,7",
    inflation: "2,4",
    pros: &["Épargne abondante", "Infrastructures de qualité, réseau dense"],
    cons: &["Dette publique \"élevée\""],
};

pub const ALLEMAGNE: Sheet = Sheet {
    gdp_per_capita: "52 820",
    population: "84,5",
    risk: "A3",
    business: "A1",
    growth: "0,2",
    inflation: "2,3",
    pros: &["Tissu industriel diversifié"],
    cons: &["Dépendance énergétique", "Vieillissement démographique"],
};

/// Country risk sheet page
pub fn sheet_page(sheet: &Sheet) -> String {
    let items = |list: &[&str]| -> String {
        list.iter().map(|i| format!("<li>{}</li>", i)).collect()
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<body>
  <header class="countrySheetHeader">
    <div class="countrySheetHeader__content">
      <div class="countrySheetHeader__content__card__left">
        <dl>
          <dt>PIB par habitant</dt>
          <dd>{gdp} $US</dd>
          <dt>Population</dt>
          <dd>{population} Millions</dd>
        </dl>
      </div>
      <div class="countrySheetHeader__content__card__right">
        <dl class="rating">
          <dt>Évaluation risque pays</dt>
          <dd class="color-{risk}">{risk}</dd>
        </dl>
        <dl class="rating">
          <dt>Environnement des affaires</dt>
          <dd class="color-{business}">{business}</dd>
        </dl>
      </div>
    </div>
  </header>
  <section>
    <table class="table">
      <caption class="sr-only">Principaux indicateurs économiques</caption>
      <thead>
        <tr><th></th><th>2021</th><th>2022</th><th>2023 (e)</th><th>2024 (p)</th></tr>
      </thead>
      <tbody>
        <tr><td>Croissance PIB (%)</td><td>6,4</td><td>2,5</td><td>
          {growth}
        </td><td>1,0</td></tr>
        <tr><td>Inflation (moyenne annuelle, %)</td><td>2,1</td><td>5,9</td><td>{inflation}</td><td>2,0</td></tr>
        <tr><td>Solde public / PIB (%)</td><td>-6,5</td><td>-4,8</td><td>-5,5</td><td>-5,1</td></tr>
      </tbody>
    </table>
  </section>
  <section class="prosAndCons">
    <article class="prosAndCons__pros"><h3>Points forts</h3><ul>{pros}</ul></article>
    <article class="prosAndCons__cons"><h3>Points faibles</h3><ul>{cons}</ul></article>
  </section>
</body>
</html>"#,
        gdp = sheet.gdp_per_capita,
        population = sheet.population,
        risk = sheet.risk,
        business = sheet.business,
        growth = sheet.growth,
        inflation = sheet.inflation,
        pros = items(sheet.pros),
        cons = items(sheet.cons),
    )
}

/// Expected `"\n - item"` rendering of a list
pub fn bullets(list: &[&str]) -> String {
    list.iter().map(|i| format!("\n - {}", i)).collect()
}
