//! Solution reporting: boundary voltages and ADC readings.

use std::fmt;

use crate::search::Solution;
use crate::{ADC_FULL_SCALE, VREF};

/// Digitize a node voltage onto the 10-bit ADC scale.
///
/// `reading = round((y / VREF) * 1023)`. Callers pass voltages already
/// inside [0V, VREF], so the result lies in [0, 1023]; no clamping.
pub fn adc_reading(y: f64) -> u16 {
    ((y / VREF) * f64::from(ADC_FULL_SCALE)).round() as u16
}

/// A winning network together with what the ADC will see at both input
/// extremes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub solution: Solution,
    pub v_lo: f64,
    pub v_hi: f64,
    pub y_lo: f64,
    pub y_hi: f64,
    pub reading_lo: u16,
    pub reading_hi: u16,
}

impl Report {
    /// Evaluate the solution at both extremes.
    pub fn new(solution: Solution, v_lo: f64, v_hi: f64) -> Self {
        let y_lo = solution.network.output_voltage(v_lo);
        let y_hi = solution.network.output_voltage(v_hi);
        Self {
            solution,
            v_lo,
            v_hi,
            y_lo,
            y_hi,
            reading_lo: adc_reading(y_lo),
            reading_hi: adc_reading(y_hi),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.solution.network)?;
        writeln!(
            f,
            "When x = {:.1}V, y = {:.6}, reading = {:4}",
            self.v_lo, self.y_lo, self.reading_lo
        )?;
        writeln!(
            f,
            "When x = {:.1}V, y = {:.6}, reading = {:4}",
            self.v_hi, self.y_hi, self.reading_hi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Network;

    #[test]
    fn test_adc_reading_endpoints() {
        assert_eq!(adc_reading(0.0), 0);
        assert_eq!(adc_reading(VREF), 1023);
        assert_eq!(adc_reading(2.5), 512);
    }

    #[test]
    fn test_report_output_format() {
        let solution = Solution {
            network: Network::new(8200.0, 5600.0, 3300.0),
            score: 4.849333041766892,
        };
        let report = Report::new(solution, -12.0, 12.0);
        assert_eq!(report.reading_lo, 18);
        assert_eq!(report.reading_hi, 1010);
        assert_eq!(
            report.to_string(),
            "Q = 8200, R = 5600, S = 3300\n\
             When x = -12.0V, y = 0.085721, reading =   18\n\
             When x = 12.0V, y = 4.935054, reading = 1010\n"
        );
    }
}
