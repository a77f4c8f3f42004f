/// Runs a block and returns its value together with the elapsed time.
#[macro_export]
macro_rules! measure_time {
    ($block:block) => {{
        let start = std::time::Instant::now();
        let result = { $block }; // Execute the block and capture the result
        let duration = start.elapsed();
        $crate::__tracing::debug!("Execution time: {:?}", duration);
        (result, duration)
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_measure_time_returns_block_value() {
        let (value, duration) = measure_time!({ (1..=10).sum::<u32>() });
        assert_eq!(value, 55);
        assert!(duration.as_secs() < 60);
    }
}
