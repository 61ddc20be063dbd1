use std::{
    fs::File,
    io::{self, BufReader},
};

use nmea0183_log::{LineEndingMode, LogParser, ParserConfig, Position};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let parser = LogParser::new(ParserConfig {
        line_ending: LineEndingMode::Tolerated,
        ..ParserConfig::default()
    });

    let positions: Vec<Position> = match std::env::args().nth(1) {
        Some(path) => parser.parse_log(BufReader::new(File::open(path)?))?,
        None => parser.parse_log(io::stdin().lock())?,
    };

    for Position {
        latitude,
        longitude,
        elevation,
    } in positions
    {
        println!("{latitude:.6}, {longitude:.6}, {elevation:.1} m");
    }

    Ok(())
}
