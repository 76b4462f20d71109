pub mod json;
pub mod md;
pub mod text;

use crate::error::ScorerError;
use crate::types::config::FormatSetting;
use crate::types::report::ScoreReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Md,
    Json,
}

impl From<FormatSetting> for OutputFormat {
    fn from(setting: FormatSetting) -> Self {
        match setting {
            FormatSetting::Text => OutputFormat::Text,
            FormatSetting::Md => OutputFormat::Md,
            FormatSetting::Json => OutputFormat::Json,
        }
    }
}

/// Fixed-point formatting that rounds ties half-up on the shortest decimal form of
/// `value`, matching `printf("%.2f")` rather than `{:.2}` (ties-to-even).
pub fn format_fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(precision))
        .map(|byte| byte - b'0')
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(precision)
        .is_some_and(|digit| *digit >= b'5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let int_len = digits.len() - precision;
    let mut output = String::new();
    if value.is_sign_negative() && digits.iter().any(|digit| *digit != 0) {
        output.push('-');
    }
    output.extend(digits[..int_len].iter().map(|digit| char::from(b'0' + digit)));
    if precision > 0 {
        output.push('.');
        output.extend(digits[int_len..].iter().map(|digit| char::from(b'0' + digit)));
    }
    output
}

pub fn render(
    report: &ScoreReport,
    format: OutputFormat,
    precision: usize,
) -> Result<String, ScorerError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report, precision)),
        OutputFormat::Md => Ok(md::to_markdown(report, precision)),
        OutputFormat::Json => json::to_json(report).map_err(ScorerError::Json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_fixed_rounds_ties_up() {
        assert_eq!(format_fixed(3.125, 2), "3.13");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(1.005, 2), "1.01");
        assert_eq!(format_fixed(2.5, 0), "3");
    }

    #[test]
    fn format_fixed_pads_and_carries() {
        assert_eq!(format_fixed(0.0, 2), "0.00");
        assert_eq!(format_fixed(82.0, 2), "82.00");
        assert_eq!(format_fixed(82.00000000000001, 2), "82.00");
        assert_eq!(format_fixed(99.995, 2), "100.00");
        assert_eq!(format_fixed(9.96, 1), "10.0");
        assert_eq!(format_fixed(3.124, 2), "3.12");
        assert_eq!(format_fixed(-0.001, 2), "0.00");
        assert_eq!(format_fixed(-1.5, 0), "-2");
    }
}
