mod config;

use rand::Rng;
use tracing::Level;
use two_heaps::{
    max_capital, measure_time, next_interval, sliding_window_median, Interval, MedianFinder,
};

use crate::config::DemoConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::load()?;
    let level: Level = config.log_level.parse()?;
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!(?config, "Loaded the demo configuration");

    run_stream()?;
    run_sliding_window(&config)?;
    if config.random_stream > 0 {
        run_random_stream(config.random_stream)?;
    }
    run_max_capital()?;
    run_next_interval();
    Ok(())
}

/**
Streams 3, 1, 5 and 4 through a finder, logging the median after each step
from the second value on.
*/
fn run_stream() -> Result<(), two_heaps::MedianError> {
    let mut stream = MedianFinder::new();
    stream.insert_num(3);
    for num in [1, 5, 4] {
        stream.insert_num(num);
        let median = stream.find_median()?;
        tracing::info!(inserted = num, median, "Median after insert");
    }
    Ok(())
}

fn run_sliding_window(config: &DemoConfig) -> Result<(), two_heaps::MedianError> {
    let (medians, _) = measure_time!({
        sliding_window_median(&config.sequence, config.window_size)
    });
    let medians = medians?;
    tracing::info!(
        sequence = ?config.sequence,
        window_size = config.window_size,
        ?medians,
        "Sliding window median"
    );
    Ok(())
}

fn run_random_stream(count: usize) -> Result<(), two_heaps::MedianError> {
    let mut rng = rand::thread_rng();
    let (median, duration) = measure_time!({
        let finder: MedianFinder<u64> = (0..count).map(|_| rng.gen_range(0..=1_000)).collect();
        finder.find_median()
    });
    let median = median?;
    tracing::info!(count, median, ?duration, "Median of a random stream");
    Ok(())
}

fn run_max_capital() -> Result<(), two_heaps::MedianError> {
    let capital = max_capital(&[0, 1, 2, 3], &[1, 2, 3, 5], 0, 3)?;
    tracing::info!(capital, "Maximum total capital");
    Ok(())
}

fn run_next_interval() {
    let intervals: Vec<Interval> = [(2, 3), (3, 4), (5, 6)]
        .into_iter()
        .map(Interval::from)
        .collect();
    let next = next_interval(&intervals);
    tracing::info!(?intervals, ?next, "Next interval");
}
