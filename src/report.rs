//! Human-readable reporting of benchmark results.

use std::io::{self, Write};

use crate::harness::BenchmarkResult;

/// Writes the mean round duration as `average: <seconds>` with six
/// fractional digits and a trailing newline.
pub fn write_average<W: Write>(writer: &mut W, result: &BenchmarkResult) -> io::Result<()> {
    writeln!(writer, "average: {:.6}", result.mean().as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness;

    #[test]
    fn average_line_has_fixed_point_format() {
        let result = harness::run(2, 1, || 1.0);
        let mut buffer = Vec::new();
        write_average(&mut buffer, &result).unwrap();
        let line = String::from_utf8(buffer).unwrap();
        assert!(line.starts_with("average: "));
        assert!(line.ends_with('\n'));
        let digits = line
            .trim_end()
            .rsplit('.')
            .next()
            .expect("fractional digits");
        assert_eq!(digits.len(), 6);
    }
}
