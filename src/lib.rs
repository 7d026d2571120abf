//! Perfect-hash lookup tables for a constant-time hand classifier.
//!
//! Three independent generators each produce one dense buffer, indexed by a
//! compact integer encoding of a set of cards:
//!
//! - [`tables::FlushTable`] by packed per-suit counts
//! - [`tables::PatternTable`] by packed counts of singletons, pairs, trips, quads
//! - [`tables::StraightTable`] by 13-bit rank presence masks
pub mod cards;
pub mod tables;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// HAND SIZES
// ============================================================================
/// Fewest cards a classified hand holds (the flop).
pub const MIN_HAND_SIZE: usize = 3;
/// Most cards a classified hand holds (hole cards plus a full board).
pub const MAX_HAND_SIZE: usize = 7;

// ============================================================================
// TABLE SIZES
// ============================================================================
/// One past the largest packed suit count encoding (seven Spades).
pub const FLUSH_TABLE_SIZE: usize = 3585;
/// One past the packed encoding of one quad, one trip, one pair and seven singletons.
pub const PATTERN_TABLE_SIZE: usize = 592;
/// Occurrence counts 0 through 4 of a single rank.
pub const COUNT_HASH_SIZE: usize = 5;
/// Every 14-bit index, so that any OR of rank bits lands in range.
pub const STRAIGHT_TABLE_SIZE: usize = 16384;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
