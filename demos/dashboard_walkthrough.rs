// Walks through a dashboard session: upload, clean, features, train,
// evaluate, forecast, export, and a live quote next to it.
//
// Run with `RUST_LOG=debug` to see every stage's log events.

use commodity_forecast_workspace::forecast_pipeline::{FeatureSelection, PipelineSession};
use commodity_forecast_workspace::market_quotes::{
    QuoteOutcome, QuoteService, StaticQuoteProvider,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let csv = price_history(60);

    let mut session = PipelineSession::default();
    let dataset = session.load_bytes(csv.as_bytes())?;
    println!("Loaded {} rows, columns {:?}", dataset.len(), dataset.columns());

    let report = session.clean()?.report;
    println!(
        "Cleaning: {} -> {} rows, {} missing values removed",
        report.rows_before, report.rows_after, report.missing_before
    );

    let table = session.engineer_features()?;
    println!("Feature catalog: {:?}", table.catalog());

    session.select_features(FeatureSelection::new(["silver_lag1", "gold_ma5", "gold"]))?;
    let model = session.train()?;
    println!(
        "Trained {} on {:?}: weights {:?}, intercept {:.4}",
        model.target(),
        model.predictors(),
        model.coefficients(),
        model.intercept()
    );

    let evaluation = session.evaluate()?;
    println!(
        "Held-out {} rows: R2 {:.4}, MAE {:.4}, MSE {:.4}",
        evaluation.test_size(),
        evaluation.r2,
        evaluation.mae,
        evaluation.mse
    );

    let forecast = session.forecast(5)?;
    println!("Forecast index {:?}", forecast.index());
    print!("{}", String::from_utf8(forecast.to_csv_bytes()?)?);

    let mut quotes = QuoteService::new(StaticQuoteProvider::demo());
    let names: Vec<String> = quotes
        .catalog()
        .names()
        .into_iter()
        .map(String::from)
        .collect();
    for name in &names {
        match quotes.lookup_or_notice(name) {
            QuoteOutcome::Snapshot(quote) => println!(
                "{} ({}): price {:?}, change {:?}%, spread {:?}",
                quote.commodity, quote.symbol, quote.price, quote.change_pct, quote.spread
            ),
            QuoteOutcome::Notice(message) => println!("{}: {}", name, message),
        }
    }

    for bar in quotes.history("Gold", 5)? {
        println!("{} open {:.2} close {:.2}", bar.timestamp.date_naive(), bar.open, bar.close);
    }

    Ok(())
}

/// Deterministic gold and silver series with a gap and one spike
fn price_history(rows: usize) -> String {
    let mut csv = String::from("date,gold,silver\n");
    for i in 0..rows {
        let gold = 1900.0 + 2.0 * i as f64 + (i as f64 * 0.7).sin() * 5.0;
        let silver = if i == 17 {
            String::from("NA")
        } else if i == 41 {
            String::from("250.0")
        } else {
            format!("{:.2}", 23.0 + 0.05 * i as f64 + (i as f64 * 1.3).cos() * 0.4)
        };
        csv.push_str(&format!("2024-01-{:02},{:.2},{}\n", i % 28 + 1, gold, silver));
    }
    csv
}
